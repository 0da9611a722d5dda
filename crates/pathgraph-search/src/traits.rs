use pathgraph_core::{Coord, EdgeId, Graph, NodeId, NodeStyle, Theme};

use crate::distance::euclidean;

/// One incident edge as seen from the node being expanded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Adjacent {
    pub edge: EdgeId,
    /// The endpoint opposite to the expanded node.
    pub node: NodeId,
    pub length: f64,
}

/// Minimal search interface — node count and adjacency.
pub trait GraphView {
    /// Number of nodes; valid handles are `NodeId(0..node_count())`.
    fn node_count(&self) -> usize;

    /// Append every edge incident to `n` into `buf`. The caller clears `buf`
    /// before calling. Lengths must be non-negative.
    fn adjacent(&self, n: NodeId, buf: &mut Vec<Adjacent>);

    #[inline]
    fn contains(&self, n: NodeId) -> bool {
        n.0 < self.node_count()
    }
}

/// Graph view whose nodes have plane coordinates.
pub trait SpatialView: GraphView {
    fn coord(&self, n: NodeId) -> Coord;

    /// Heuristic estimate of the distance from `from` to `to`.
    ///
    /// Defaults to the straight-line distance, which never overestimates as
    /// long as every edge is at least as long as the segment it spans.
    #[inline]
    fn estimate(&self, from: NodeId, to: NodeId) -> f64 {
        euclidean(self.coord(from), self.coord(to))
    }
}

/// Spatial view whose transient display attributes may be rewritten.
pub trait StyledView: SpatialView {
    /// Put every node and edge back to the theme defaults.
    fn reset_styles(&mut self, theme: &Theme);

    fn node_style(&self, n: NodeId) -> NodeStyle;

    fn set_node_style(&mut self, n: NodeId, style: NodeStyle);
}

impl GraphView for Graph {
    #[inline]
    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn adjacent(&self, n: NodeId, buf: &mut Vec<Adjacent>) {
        let Some(node) = self.node(n) else {
            return;
        };
        for &e in node.edges() {
            if let Some(edge) = self.edge(e) {
                buf.push(Adjacent {
                    edge: e,
                    node: edge.other(n),
                    length: edge.length(),
                });
            }
        }
    }
}

impl SpatialView for Graph {
    #[inline]
    fn coord(&self, n: NodeId) -> Coord {
        self.node(n).map(|node| node.coord()).unwrap_or_default()
    }
}

impl StyledView for Graph {
    #[inline]
    fn reset_styles(&mut self, theme: &Theme) {
        Graph::reset_styles(self, theme);
    }

    #[inline]
    fn node_style(&self, n: NodeId) -> NodeStyle {
        self.node(n).map(|node| node.style).unwrap_or_default()
    }

    #[inline]
    fn set_node_style(&mut self, n: NodeId, style: NodeStyle) {
        if let Some(node) = self.node_mut(n) {
            node.style = style;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_adjacency_reports_opposite_endpoint() {
        let mut g = Graph::new();
        let a = g.add_node(1, Coord::new(0.0, 0.0)).unwrap();
        let b = g.add_node(2, Coord::new(0.0, 2.0)).unwrap();
        let e = g.add_edge(a, b, 2.5).unwrap();

        let mut buf = Vec::new();
        g.adjacent(b, &mut buf);
        assert_eq!(
            buf,
            vec![Adjacent {
                edge: e,
                node: a,
                length: 2.5
            }]
        );
        assert_eq!(g.estimate(a, b), 2.0);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let g = Graph::new();
        let mut buf = Vec::new();
        g.adjacent(NodeId(3), &mut buf);
        assert!(buf.is_empty());
        assert!(!GraphView::contains(&g, NodeId(3)));
    }
}
