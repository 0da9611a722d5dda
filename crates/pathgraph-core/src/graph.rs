//! Arena-backed undirected graph.
//!
//! Nodes and edges live in two flat vectors and refer to each other through
//! [`NodeId`] / [`EdgeId`] handles. Structural fields (key, coordinate,
//! adjacency, endpoints, length) are fixed once inserted; only the display
//! styles are mutable.

use std::collections::HashMap;
use std::fmt;

use crate::geom::Coord;
use crate::style::{EdgeStyle, NodeStyle, Theme};

/// Handle of a node inside a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

/// Handle of an edge inside a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Node / Edge
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
pub struct Node {
    key: u64,
    coord: Coord,
    edges: Vec<EdgeId>,
    pub style: NodeStyle,
}

impl Node {
    /// External identifier the node was inserted with.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Incident edges, in insertion order. A self-loop appears once.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }
}

#[derive(Clone, Debug)]
pub struct Edge {
    src: NodeId,
    dest: NodeId,
    length: f64,
    pub style: EdgeStyle,
}

impl Edge {
    #[inline]
    pub fn src(&self) -> NodeId {
        self.src
    }

    #[inline]
    pub fn dest(&self) -> NodeId {
        self.dest
    }

    /// Weight of the edge. Always finite and non-negative.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The endpoint opposite to `n`. For a self-loop this is `n` itself.
    #[inline]
    pub fn other(&self, n: NodeId) -> NodeId {
        if self.src == n { self.dest } else { self.src }
    }

    /// Whether the edge joins `a` and `b`, in either direction.
    #[inline]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.src == a && self.dest == b) || (self.src == b && self.dest == a)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Weighted undirected graph with planar node coordinates.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    keys: HashMap<u64, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            keys: HashMap::with_capacity(nodes),
        }
    }

    /// Insert a node identified by `key` at `coord`.
    pub fn add_node(&mut self, key: u64, coord: Coord) -> Result<NodeId, GraphError> {
        if self.keys.contains_key(&key) {
            return Err(GraphError::DuplicateKey(key));
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            key,
            coord,
            edges: Vec::new(),
            style: NodeStyle::default(),
        });
        self.keys.insert(key, id);
        Ok(id)
    }

    /// Insert an undirected edge between `a` and `b`.
    ///
    /// `length` must be finite and non-negative.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, length: f64) -> Result<EdgeId, GraphError> {
        self.check(a)?;
        self.check(b)?;
        if !length.is_finite() || length < 0.0 {
            return Err(GraphError::InvalidLength(length));
        }
        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            src: a,
            dest: b,
            length,
            style: EdgeStyle::default(),
        });
        self.nodes[a.0].edges.push(id);
        if a != b {
            self.nodes[b.0].edges.push(id);
        }
        Ok(id)
    }

    /// Insert an edge whose length is the straight-line distance between its
    /// endpoints.
    pub fn add_straight_edge(&mut self, a: NodeId, b: NodeId) -> Result<EdgeId, GraphError> {
        self.check(a)?;
        self.check(b)?;
        let length = (self.nodes[a.0].coord - self.nodes[b.0].coord).length();
        self.add_edge(a, b, length)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    #[inline]
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id.0)
    }

    /// Look a node up by the key it was inserted with.
    #[inline]
    pub fn node_by_key(&self, key: u64) -> Option<NodeId> {
        self.keys.get(&key).copied()
    }

    /// Iterate over every node together with its handle.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Iterate over every edge together with its handle.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Restore every node and edge to the theme's default display style.
    pub fn reset_styles(&mut self, theme: &Theme) {
        let node_style = theme.node_default();
        for n in self.nodes.iter_mut() {
            n.style = node_style;
        }
        let edge_style = theme.edge_default();
        for e in self.edges.iter_mut() {
            e.style = edge_style;
        }
    }

    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}

/// Errors raised while building a [`Graph`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node with this key already exists.
    DuplicateKey(u64),
    /// The handle does not belong to this graph.
    UnknownNode(NodeId),
    /// Edge length is negative, NaN or infinite.
    InvalidLength(f64),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "graph: duplicate node key {key}"),
            Self::UnknownNode(id) => write!(f, "graph: unknown node {id}"),
            Self::InvalidLength(len) => write!(f, "graph: invalid edge length {len}"),
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph, [NodeId; 3]) {
        let mut g = Graph::new();
        let a = g.add_node(10, Coord::new(0.0, 0.0)).unwrap();
        let b = g.add_node(20, Coord::new(3.0, 0.0)).unwrap();
        let c = g.add_node(30, Coord::new(3.0, 4.0)).unwrap();
        g.add_edge(a, b, 3.0).unwrap();
        g.add_edge(b, c, 4.0).unwrap();
        g.add_straight_edge(a, c).unwrap();
        (g, [a, b, c])
    }

    #[test]
    fn adjacency_is_symmetric() {
        let (g, [a, b, c]) = triangle();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 3);
        for (id, node) in g.nodes() {
            assert_eq!(node.edges().len(), 2);
            for &e in node.edges() {
                let edge = g.edge(e).unwrap();
                assert!(edge.src() == id || edge.dest() == id);
            }
        }
        let ac = g.edge(EdgeId(2)).unwrap();
        assert_eq!(ac.length(), 5.0);
        assert_eq!(ac.other(a), c);
        assert_eq!(ac.other(c), a);
        assert!(ac.connects(c, a));
        assert!(!ac.connects(a, b));
    }

    #[test]
    fn lookup_by_key() {
        let (g, [_, b, _]) = triangle();
        assert_eq!(g.node_by_key(20), Some(b));
        assert_eq!(g.node_by_key(99), None);
        assert_eq!(g.node(b).unwrap().key(), 20);
    }

    #[test]
    fn duplicate_key_rejected() {
        let (mut g, _) = triangle();
        assert_eq!(
            g.add_node(10, Coord::ZERO),
            Err(GraphError::DuplicateKey(10))
        );
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn invalid_lengths_rejected() {
        let (mut g, [a, b, _]) = triangle();
        assert_eq!(g.add_edge(a, b, -1.0), Err(GraphError::InvalidLength(-1.0)));
        assert!(matches!(
            g.add_edge(a, b, f64::NAN),
            Err(GraphError::InvalidLength(_))
        ));
        assert!(g.add_edge(a, b, f64::INFINITY).is_err());
        assert!(g.add_edge(a, b, 0.0).is_ok());
    }

    #[test]
    fn unknown_node_rejected() {
        let (mut g, [a, _, _]) = triangle();
        let err = g.add_edge(a, NodeId(7), 1.0).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode(NodeId(7)));
        assert_eq!(err.to_string(), "graph: unknown node n7");
    }

    #[test]
    fn self_loop_listed_once() {
        let (mut g, [a, _, _]) = triangle();
        let e = g.add_edge(a, a, 1.0).unwrap();
        let node = g.node(a).unwrap();
        assert_eq!(node.edges().iter().filter(|&&x| x == e).count(), 1);
        assert_eq!(g.edge(e).unwrap().other(a), a);
    }

    #[test]
    fn reset_styles_applies_theme() {
        let (mut g, [a, _, _]) = triangle();
        let theme = Theme::default();
        g.node_mut(a).unwrap().style = theme.source_style();
        g.edge_mut(EdgeId(0)).unwrap().style = theme.path_line();
        g.reset_styles(&theme);
        assert!(g.nodes().all(|(_, n)| n.style == theme.node_default()));
        assert!(g.edges().all(|(_, e)| e.style == theme.edge_default()));
    }
}
