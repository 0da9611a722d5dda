//! Graph builders for the `pathgraph-demo` binary.

use pathgraph_core::{Coord, Graph, GraphError, NodeId};
use rand::{Rng, RngExt};

/// Node keys of [`scenario_graph`].
pub const SCENARIO_KEYS: [(char, u64); 5] = [('A', 1), ('B', 2), ('C', 3), ('D', 4), ('E', 5)];

/// The A–B(1), B–C(1), A–C(5), C–D(1) graph with an isolated node E.
///
/// Nodes sit on a line one unit apart so straight-line estimates stay
/// admissible.
pub fn scenario_graph() -> Result<Graph, GraphError> {
    let mut g = Graph::with_capacity(5, 4);
    let a = g.add_node(1, Coord::new(0.0, 0.0))?;
    let b = g.add_node(2, Coord::new(1.0, 0.0))?;
    let c = g.add_node(3, Coord::new(2.0, 0.0))?;
    let d = g.add_node(4, Coord::new(3.0, 0.0))?;
    g.add_node(5, Coord::new(10.0, 10.0))?;
    g.add_edge(a, b, 1.0)?;
    g.add_edge(b, c, 1.0)?;
    g.add_edge(a, c, 5.0)?;
    g.add_edge(c, d, 1.0)?;
    Ok(g)
}

/// A `w` × `h` 4-connected lattice, `spacing` apart. Keys are row-major
/// starting at 0.
pub fn grid_graph(w: usize, h: usize, spacing: f64) -> Result<Graph, GraphError> {
    let mut g = Graph::with_capacity(w * h, 2 * w * h);
    let mut ids = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let key = (y * w + x) as u64;
            ids.push(g.add_node(key, Coord::new(x as f64, y as f64) * spacing)?);
        }
    }
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            if x + 1 < w {
                g.add_straight_edge(ids[i], ids[i + 1])?;
            }
            if y + 1 < h {
                g.add_straight_edge(ids[i], ids[i + w])?;
            }
        }
    }
    Ok(g)
}

/// `nodes` random points in a 1000 × 1000 square, each joined to every
/// other point closer than `connect_radius`. Keys are `0..nodes`.
pub fn random_geometric_graph(
    rng: &mut impl Rng,
    nodes: usize,
    connect_radius: f64,
) -> Result<Graph, GraphError> {
    let mut g = Graph::with_capacity(nodes, nodes * 4);
    let mut placed: Vec<(NodeId, Coord)> = Vec::with_capacity(nodes);
    for key in 0..nodes {
        let c = Coord::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0));
        let id = g.add_node(key as u64, c)?;
        for &(other, oc) in placed.iter() {
            if (c - oc).length() < connect_radius {
                g.add_straight_edge(id, other)?;
            }
        }
        placed.push((id, c));
    }
    log::debug!(
        "random graph: {} nodes, {} edges",
        g.node_count(),
        g.edge_count()
    );
    Ok(g)
}

/// Look up a scenario node key by its letter.
pub fn scenario_key(name: &str) -> Option<u64> {
    let mut chars = name.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    SCENARIO_KEYS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|&(_, key)| key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgraph_search::{Algorithm, PathFinder};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scenario_shortest_path_is_three() {
        let mut g = scenario_graph().unwrap();
        let mut pf = PathFinder::default();
        pf.set_src(g.node_by_key(1).unwrap());
        pf.set_dest(g.node_by_key(4).unwrap());
        pf.exec(&mut g, Algorithm::UniformCost);
        assert_eq!(pf.path().len(), 3);
        assert_eq!(pf.path_length(), 3.0);
    }

    #[test]
    fn grid_has_expected_shape() {
        let g = grid_graph(4, 3, 2.0).unwrap();
        assert_eq!(g.node_count(), 12);
        assert_eq!(g.edge_count(), 3 * 3 + 4 * 2);
        assert!(g.edges().all(|(_, e)| e.length() == 2.0));
    }

    #[test]
    fn random_graph_respects_radius() {
        let mut rng = StdRng::seed_from_u64(3);
        let g = random_geometric_graph(&mut rng, 60, 200.0).unwrap();
        assert_eq!(g.node_count(), 60);
        assert!(g.edges().all(|(_, e)| e.length() < 200.0));
    }

    #[test]
    fn scenario_letters() {
        assert_eq!(scenario_key("a"), Some(1));
        assert_eq!(scenario_key("E"), Some(5));
        assert_eq!(scenario_key("F"), None);
        assert_eq!(scenario_key("AB"), None);
        assert_eq!(scenario_key(""), None);
    }
}
