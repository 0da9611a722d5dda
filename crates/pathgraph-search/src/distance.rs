use pathgraph_core::Coord;

/// Straight-line (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    (a - b).length()
}
