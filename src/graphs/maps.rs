//! Classic road and region maps used as benchmark instances.

use crate::graphs::GraphMap;

const ROMANIA_LOCATIONS: [(&str, (f64, f64)); 20] = [
    ("A", (91., 492.)),
    ("B", (400., 327.)),
    ("C", (253., 288.)),
    ("D", (165., 299.)),
    ("E", (562., 293.)),
    ("F", (305., 449.)),
    ("G", (375., 270.)),
    ("H", (534., 350.)),
    ("I", (473., 506.)),
    ("L", (165., 379.)),
    ("M", (168., 339.)),
    ("N", (406., 537.)),
    ("O", (131., 571.)),
    ("P", (320., 368.)),
    ("R", (233., 410.)),
    ("S", (207., 457.)),
    ("T", (94., 410.)),
    ("U", (456., 350.)),
    ("V", (509., 444.)),
    ("Z", (108., 531.)),
];

const ROMANIA_ROADS: [(&str, &str, f64); 23] = [
    ("A", "Z", 75.),
    ("A", "S", 140.),
    ("A", "T", 118.),
    ("B", "U", 85.),
    ("B", "P", 101.),
    ("B", "G", 90.),
    ("B", "F", 211.),
    ("C", "D", 120.),
    ("C", "R", 146.),
    ("C", "P", 138.),
    ("D", "M", 75.),
    ("E", "H", 86.),
    ("F", "S", 99.),
    ("H", "U", 98.),
    ("I", "V", 92.),
    ("I", "N", 87.),
    ("L", "T", 111.),
    ("L", "M", 70.),
    ("O", "Z", 71.),
    ("O", "S", 151.),
    ("P", "R", 97.),
    ("R", "S", 80.),
    ("U", "V", 142.),
];

const AUSTRALIA_LOCATIONS: [(&str, (f64, f64)); 7] = [
    ("WA", (120., 24.)),
    ("NT", (135., 20.)),
    ("SA", (135., 30.)),
    ("Q", (145., 20.)),
    ("NSW", (145., 32.)),
    ("T", (145., 42.)),
    ("V", (145., 37.)),
];

const AUSTRALIA_BORDERS: [(&str, &str, f64); 9] = [
    ("SA", "WA", 1.),
    ("SA", "NT", 1.),
    ("SA", "Q", 1.),
    ("SA", "NSW", 1.),
    ("SA", "V", 1.),
    ("NT", "WA", 1.),
    ("NT", "Q", 1.),
    ("NSW", "Q", 1.),
    ("NSW", "V", 1.),
];

/// The road map of Romania, with each city labelled by its initial.
pub fn romania_map() -> GraphMap<&'static str> {
    build(&ROMANIA_LOCATIONS, &ROMANIA_ROADS)
}

/// The states and territories of Australia joined by shared borders. Tasmania
/// (`T`) has no neighbours.
///
/// Every border costs 1 while the locations are degrees of longitude and
/// latitude, so the straight-line distance heuristic overestimates here.
/// Greedy and A* routes on this map are not guaranteed to be cheapest.
pub fn australia_map() -> GraphMap<&'static str> {
    build(&AUSTRALIA_LOCATIONS, &AUSTRALIA_BORDERS)
}

fn build(
    locations: &[(&'static str, (f64, f64))],
    edges: &[(&'static str, &'static str, f64)],
) -> GraphMap<&'static str> {
    GraphMap::from_edges(locations.iter().copied(), edges.iter().copied())
        .expect("Every edge endpoint of a built-in map has a location")
}
