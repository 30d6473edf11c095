//! Tabular benchmark reports. A [`Comparison`] only holds strings; layout is
//! left to `tabled`.

use crate::error::ReportError;
use std::fmt;
use tabled::{builder::Builder, settings::Style};

/// A table with a header row. The first cell of every row is its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Comparison {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: vec![],
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.first().cloned().unwrap_or_default())
            .collect()
    }

    /// Place the columns of `other` to the right of this table. Both tables
    /// must have the same row labels in the same order; the label column of
    /// `other` is dropped.
    pub fn join(mut self, other: Comparison) -> Result<Self, ReportError> {
        if self.row_labels() != other.row_labels() {
            return Err(ReportError::MismatchedRows {
                expected: self.row_labels(),
                found: other.row_labels(),
            });
        }
        self.headers.extend(other.headers.into_iter().skip(1));
        for (row, other_row) in self.rows.iter_mut().zip(other.rows) {
            row.extend(other_row.into_iter().skip(1));
        }
        Ok(self)
    }

    /// Place the rows of `other` below this table. Both tables must have the
    /// same headers.
    pub fn append(mut self, other: Comparison) -> Result<Self, ReportError> {
        if self.headers != other.headers {
            return Err(ReportError::MismatchedHeaders {
                expected: self.headers,
                found: other.headers,
            });
        }
        self.rows.extend(other.rows);
        Ok(self)
    }

    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.iter().cloned());
        for row in &self.rows {
            builder.push_record(row.iter().cloned());
        }
        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Comparison {
        let mut comparison = Comparison::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            comparison.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        comparison
    }

    #[test]
    fn join_appends_columns() {
        let left = table(&["Searcher", "p1"], &[&["bfs", "a"], &["dfs", "b"]]);
        let right = table(&["Searcher", "p2"], &[&["bfs", "c"], &["dfs", "d"]]);
        let joined = left.join(right).unwrap();
        assert_eq!(
            joined,
            table(
                &["Searcher", "p1", "p2"],
                &[&["bfs", "a", "c"], &["dfs", "b", "d"]]
            )
        );
    }

    #[test]
    fn join_rejects_different_rows() {
        let left = table(&["Searcher", "p1"], &[&["bfs", "a"]]);
        let right = table(&["Searcher", "p2"], &[&["dfs", "c"]]);
        assert!(matches!(
            left.join(right),
            Err(ReportError::MismatchedRows { .. })
        ));
    }

    #[test]
    fn append_requires_same_headers() {
        let top = table(&["Searcher", "Problem"], &[&["bfs", "p1"]]);
        let bottom = table(&["Searcher", "Problem"], &[&["bfs", "p2"]]);
        assert_eq!(top.clone().append(bottom).unwrap().rows().len(), 2);
        let other = table(&["Searcher"], &[&["bfs"]]);
        assert!(matches!(
            top.append(other),
            Err(ReportError::MismatchedHeaders { .. })
        ));
    }

    #[test]
    fn render_contains_every_cell() {
        let rendered = table(&["Searcher", "p1"], &[&["bfs", "<1/2/3/B>"]]).render();
        for cell in ["Searcher", "p1", "bfs", "<1/2/3/B>"] {
            assert!(rendered.contains(cell));
        }
    }
}
