use crate::search::SearchProblem;

/// A partial board: `rows[column]` is the row of the queen in that column, or
/// `None` if the column is still empty. Columns are always filled left to
/// right.
pub type Board = Vec<Option<usize>>;

/// Place a queen in `column` at `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
}

/// The N-Queens puzzle as an incremental search problem. Successors are
/// generated without looking for conflicts; a board is only checked once it
/// is full, in [`SearchProblem::is_goal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NQueensProblem {
    size: usize,
}

impl NQueensProblem {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether queens at `a` and `b` attack each other.
    pub fn conflict(a: Placement, b: Placement) -> bool {
        let row_difference = a.row as isize - b.row as isize;
        let column_difference = a.column as isize - b.column as isize;
        a.row == b.row
            || a.column == b.column
            || row_difference == column_difference
            || row_difference == -column_difference
    }

    /// Whether any two queens on `board` attack each other.
    pub fn has_conflicts(board: &Board) -> bool {
        let placements: Vec<Placement> = board
            .iter()
            .enumerate()
            .filter_map(|(column, row)| row.map(|row| Placement { column, row }))
            .collect();
        placements.iter().enumerate().any(|(index, &a)| {
            placements[index + 1..]
                .iter()
                .any(|&b| NQueensProblem::conflict(a, b))
        })
    }
}

impl SearchProblem for NQueensProblem {
    type State = Board;
    type Action = Placement;

    fn initial_state(&self) -> Board {
        vec![None; self.size]
    }

    fn is_goal(&mut self, state: &Board) -> bool {
        match state.last() {
            Some(Some(_)) => !NQueensProblem::has_conflicts(state),
            // A zero-sized board is trivially solved
            None => true,
            Some(None) => false,
        }
    }

    fn successors(&mut self, state: &Board) -> Vec<(Placement, Board)> {
        let Some(column) = state.iter().position(Option::is_none) else {
            return vec![];
        };
        (0..self.size)
            .map(|row| {
                let mut successor = state.clone();
                successor[column] = Some(row);
                (Placement { column, row }, successor)
            })
            .collect()
    }

    fn step_cost(
        &self,
        _state: &Board,
        _action: &Placement,
        _result: &Board,
        accumulated_cost: f64,
    ) -> f64 {
        accumulated_cost + 1.
    }

    /// The number of empty columns, which is exactly the number of placements
    /// still needed to fill the board.
    fn heuristic(&self, state: &Board) -> f64 {
        state.iter().filter(|row| row.is_none()).count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::SearchEngineName;

    #[test]
    fn initial_expansion_has_one_successor_per_row() {
        let mut problem = NQueensProblem::new(4);
        let initial = problem.initial_state();
        assert_eq!(initial, vec![None; 4]);
        let successors = problem.successors(&initial);
        assert_eq!(successors.len(), 4);
        for (row, (placement, board)) in successors.into_iter().enumerate() {
            assert_eq!(placement, Placement { column: 0, row });
            assert_eq!(board, vec![Some(row), None, None, None]);
        }
    }

    #[test]
    fn successors_do_not_prune_conflicts() {
        let mut problem = NQueensProblem::new(4);
        let successors = problem.successors(&vec![Some(0), None, None, None]);
        assert_eq!(successors.len(), 4);
        assert_eq!(successors[0].1, vec![Some(0), Some(0), None, None]);
    }

    #[test]
    fn full_board_has_no_successors() {
        let mut problem = NQueensProblem::new(2);
        assert!(problem.successors(&vec![Some(0), Some(1)]).is_empty());
    }

    #[test]
    fn known_solution_is_goal() {
        let mut problem = NQueensProblem::new(4);
        assert!(problem.is_goal(&vec![Some(1), Some(3), Some(0), Some(2)]));
        assert!(!problem.is_goal(&vec![Some(1), Some(3), Some(0), None]));
        assert!(!problem.is_goal(&vec![Some(0), Some(2), Some(1), Some(3)]));
    }

    #[test]
    fn row_conflict_is_never_a_goal() {
        let mut problem = NQueensProblem::new(4);
        for third in 0..4 {
            for fourth in 0..4 {
                let board = vec![Some(0), Some(0), Some(third), Some(fourth)];
                assert!(!problem.is_goal(&board));
            }
        }
    }

    #[test]
    fn diagonal_conflicts() {
        let at = |column, row| Placement { column, row };
        assert!(NQueensProblem::conflict(at(0, 0), at(2, 2)));
        assert!(NQueensProblem::conflict(at(0, 3), at(3, 0)));
        assert!(NQueensProblem::conflict(at(1, 2), at(1, 0)));
        assert!(!NQueensProblem::conflict(at(0, 1), at(1, 3)));
    }

    #[test]
    fn depth_first_solves_six_queens() {
        let mut problem = NQueensProblem::new(6);
        let result = SearchEngineName::DepthFirstTree.search(&mut problem);
        let solution = result.solution().unwrap();
        assert_eq!(solution.depth(), 6);
        assert!(solution.state().iter().all(Option::is_some));
        assert!(!NQueensProblem::has_conflicts(solution.state()));
    }

    #[test]
    fn three_queens_is_unsolvable() {
        let mut problem = NQueensProblem::new(3);
        let result = SearchEngineName::BreadthFirstTree.search(&mut problem);
        assert!(!result.is_success());
    }
}
