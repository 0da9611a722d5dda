//! Graph fixtures and a brute-force reference shared by the unit tests.

use pathgraph_core::{Coord, EdgeId, Graph, NodeId};
use rand::{Rng, RngExt};

pub(crate) struct Scenario {
    pub graph: Graph,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub d: NodeId,
    /// Isolated node.
    pub e: NodeId,
}

/// A–B(1), B–C(1), A–C(5), C–D(1) on a line, plus an isolated E.
pub(crate) fn scenario() -> Scenario {
    let mut graph = Graph::new();
    let a = graph.add_node(1, Coord::new(0.0, 0.0)).unwrap();
    let b = graph.add_node(2, Coord::new(1.0, 0.0)).unwrap();
    let c = graph.add_node(3, Coord::new(2.0, 0.0)).unwrap();
    let d = graph.add_node(4, Coord::new(3.0, 0.0)).unwrap();
    let e = graph.add_node(5, Coord::new(10.0, 10.0)).unwrap();
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(b, c, 1.0).unwrap();
    graph.add_edge(a, c, 5.0).unwrap();
    graph.add_edge(c, d, 1.0).unwrap();
    Scenario {
        graph,
        a,
        b,
        c,
        d,
        e,
    }
}

/// `w` × `h` 4-connected unit grid; ids are row-major.
pub(crate) fn grid(w: usize, h: usize) -> (Graph, Vec<NodeId>) {
    let mut g = Graph::with_capacity(w * h, 2 * w * h);
    let mut ids = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let key = (y * w + x) as u64;
            ids.push(g.add_node(key, Coord::new(x as f64, y as f64)).unwrap());
        }
    }
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            if x + 1 < w {
                g.add_straight_edge(ids[i], ids[i + 1]).unwrap();
            }
            if y + 1 < h {
                g.add_straight_edge(ids[i], ids[i + w]).unwrap();
            }
        }
    }
    (g, ids)
}

/// Random graph on `n` points in a 100 × 100 square. Each pair is joined
/// with probability `p`; edge lengths are the straight-line distance
/// stretched by a random factor in `[1, 2)`, so the Euclidean estimate stays
/// admissible.
pub(crate) fn random_graph(rng: &mut impl Rng, n: usize, p: f64) -> Graph {
    let mut g = Graph::with_capacity(n, n * n);
    let ids: Vec<NodeId> = (0..n)
        .map(|i| {
            let c = Coord::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            g.add_node(i as u64, c).unwrap()
        })
        .collect();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                let a = g.node(ids[i]).unwrap().coord();
                let b = g.node(ids[j]).unwrap().coord();
                let stretch = rng.random_range(1.0..2.0);
                g.add_edge(ids[i], ids[j], (a - b).length() * stretch).unwrap();
            }
        }
    }
    g
}

/// All-pairs shortest distances (Floyd–Warshall).
pub(crate) fn all_pairs(g: &Graph) -> Vec<Vec<f64>> {
    let n = g.node_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for (_, e) in g.edges() {
        let (a, b) = (e.src().0, e.dest().0);
        if e.length() < dist[a][b] {
            dist[a][b] = e.length();
            dist[b][a] = e.length();
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

/// Edges of the connected component containing `start`.
pub(crate) fn component_edges(g: &Graph, start: NodeId) -> Vec<EdgeId> {
    let mut seen = vec![false; g.node_count()];
    let mut stack = vec![start];
    seen[start.0] = true;
    let mut edges = Vec::new();
    while let Some(n) = stack.pop() {
        for &e in g.node(n).unwrap().edges() {
            let other = g.edge(e).unwrap().other(n);
            if !edges.contains(&e) {
                edges.push(e);
            }
            if !seen[other.0] {
                seen[other.0] = true;
                stack.push(other);
            }
        }
    }
    edges.sort();
    edges
}
