use std::collections::BinaryHeap;

use pathgraph_core::NodeId;

use crate::record::{Entry, Link, SearchRecord, Termination, VisitedEdge};
use crate::traits::SpatialView;

/// Greedy best-first search from `src` towards `dest`.
///
/// Always expands the frontier node whose estimate to `dest` is smallest,
/// ignoring the length travelled so far. It finds *a* path whenever one
/// exists, not necessarily the shortest.
///
/// A node keeps the parent it was first discovered from. Nodes already
/// expanded are skipped on pop, which plays the role of the stale-entry
/// check of the cost-ordered searches.
pub fn best_first<V: SpatialView + ?Sized>(view: &V, src: NodeId, dest: NodeId) -> SearchRecord {
    let mut rec = SearchRecord::new(view.node_count());
    if !view.contains(src) || !view.contains(dest) {
        log::warn!("best-first: endpoint out of range ({src} -> {dest})");
        return rec;
    }

    let mut closed = vec![false; rec.len()];
    rec.score[src.0] = view.estimate(src, dest);

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    open.push(Entry {
        node: src,
        priority: rec.score[src.0],
    });

    let mut nbuf = Vec::new();

    rec.termination = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search Termination::Exhausted;
        };
        let ci = current.node;

        if ci == dest {
            break 'search Termination::Reached;
        }

        if closed[ci.0] {
            continue;
        }
        closed[ci.0] = true;
        rec.expansions += 1;

        nbuf.clear();
        view.adjacent(ci, &mut nbuf);

        for adj in nbuf.iter() {
            let ni = adj.node;
            if closed.get(ni.0).copied().unwrap_or(true) {
                continue;
            }

            // First discovery wins.
            if rec.parent[ni.0].is_none() && ni != src {
                rec.parent[ni.0] = Some(Link {
                    node: ci,
                    edge: adj.edge,
                    length: adj.length,
                });
            }

            let h = view.estimate(ni, dest);
            log::trace!("best-first: {ci} -> {ni} h={h}");
            rec.score[ni.0] = h;
            rec.visited.push(VisitedEdge {
                edge: adj.edge,
                from: ci,
                to: ni,
                length: adj.length,
            });
            open.push(Entry {
                node: ni,
                priority: h,
            });
        }
    };

    log::debug!(
        "best-first: {:?} after {} expansions, {} edges visited",
        rec.termination,
        rec.expansions,
        rec.visited.len()
    );
    rec
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_graphs::scenario;
    use pathgraph_core::{Coord, Graph};

    #[test]
    fn reaches_destination_on_scenario() {
        let s = scenario();
        let rec = best_first(&s.graph, s.a, s.d);
        assert_eq!(rec.termination(), Termination::Reached);
        assert_eq!(rec.parent(s.d).map(|l| l.node), Some(s.c));
    }

    #[test]
    fn greedy_takes_the_direct_long_edge() {
        // A reaches C directly (5) before ever expanding B, so C keeps A as
        // its parent even though A-B-C is shorter.
        let s = scenario();
        let rec = best_first(&s.graph, s.a, s.d);
        assert_eq!(rec.parent(s.c).map(|l| l.node), Some(s.a));
    }

    #[test]
    fn first_discovery_keeps_parent() {
        //     x
        //   /   \
        // s       t ---- dest
        //   \   /
        //     y
        // Pop order is s, y, t, dest. `x` is discovered from `s` and again
        // from `t`; the second discovery must not override its parent.
        let mut g = Graph::new();
        let s = g.add_node(0, Coord::new(0.0, 0.0)).unwrap();
        let x = g.add_node(1, Coord::new(1.0, 5.0)).unwrap();
        let y = g.add_node(2, Coord::new(1.0, -1.0)).unwrap();
        let t = g.add_node(3, Coord::new(2.0, 0.0)).unwrap();
        let dest = g.add_node(4, Coord::new(10.0, 0.0)).unwrap();
        g.add_straight_edge(s, x).unwrap();
        g.add_straight_edge(s, y).unwrap();
        g.add_straight_edge(x, t).unwrap();
        g.add_straight_edge(y, t).unwrap();
        g.add_straight_edge(t, dest).unwrap();

        let rec = best_first(&g, s, dest);
        assert_eq!(rec.termination(), Termination::Reached);
        assert_eq!(rec.parent(t).map(|l| l.node), Some(y));
        assert_eq!(rec.parent(dest).map(|l| l.node), Some(t));
        assert_eq!(rec.parent(x).map(|l| l.node), Some(s));
        assert!(rec.visited().iter().any(|v| v.from == t && v.to == x));
        assert_eq!(rec.expansions(), 3);
    }

    #[test]
    fn rediscovery_is_still_logged() {
        let s = scenario();
        let rec = best_first(&s.graph, s.a, s.e);
        assert_eq!(rec.termination(), Termination::Exhausted);
        // B is reached from A and again from C; both edges are logged.
        let into_b: Vec<NodeId> = rec
            .visited()
            .iter()
            .filter(|v| v.to == s.b)
            .map(|v| v.from)
            .collect();
        assert_eq!(into_b, vec![s.a, s.c]);
        assert_eq!(rec.parent(s.b).map(|l| l.node), Some(s.a));
    }

    #[test]
    fn source_equals_destination_stops_immediately() {
        let s = scenario();
        let rec = best_first(&s.graph, s.b, s.b);
        assert_eq!(rec.termination(), Termination::Reached);
        assert_eq!(rec.parent(s.b), None);
        assert!(rec.visited().is_empty());
    }
}
