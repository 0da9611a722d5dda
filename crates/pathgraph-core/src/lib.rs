//! **pathgraph-core** — weighted planar graph model.
//!
//! This crate provides the data the path-search engine reads: plane
//! coordinates, an arena-backed undirected graph with non-negative edge
//! lengths, and the transient display attributes (plus the [`Theme`] that
//! defines their defaults) that a renderer draws.

pub mod geom;
pub mod graph;
pub mod style;

pub use geom::Coord;
pub use graph::{Edge, EdgeId, Graph, GraphError, Node, NodeId};
pub use style::{Color, EdgeStyle, NodeStyle, Theme};
