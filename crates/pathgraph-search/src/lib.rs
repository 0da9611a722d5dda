//! Single-query path search over weighted undirected graphs.
//!
//! Three interchangeable strategies share one frontier / record pattern:
//!
//! - **Uniform-cost** (Dijkstra) shortest paths ([`uniform_cost`])
//! - **A\*** shortest paths guided by straight-line distance ([`astar`])
//! - **Greedy best-first**, fast but not optimal ([`best_first`])
//!
//! Each returns a fresh [`SearchRecord`]; [`reconstruct`] turns its parent
//! links into drawable [`Segment`]s. [`PathFinder`] ties it together: it
//! holds the endpoints, resets display state, dispatches on an
//! [`Algorithm`] and keeps the resulting path and visited-edge log.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`GraphView`] | uniform-cost |
//! | [`SpatialView`] : [`GraphView`] | A*, best-first, reconstruction |
//! | [`StyledView`] : [`SpatialView`] | [`PathFinder`] |

mod astar;
mod best_first;
mod dijkstra;
mod distance;
mod finder;
mod reconstruct;
mod record;
mod traits;

#[cfg(test)]
mod test_graphs;

pub use astar::astar;
pub use best_first::best_first;
pub use dijkstra::uniform_cost;
pub use distance::euclidean;
pub use finder::{Algorithm, FinderState, ParseAlgorithmError, PathFinder, RunSummary};
pub use reconstruct::{Segment, mark_path, path_length, reconstruct, visited_lines};
pub use record::{Link, SearchRecord, Termination, UNREACHED, VisitedEdge};
pub use traits::{Adjacent, GraphView, SpatialView, StyledView};
