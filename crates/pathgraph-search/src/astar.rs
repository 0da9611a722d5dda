use std::collections::BinaryHeap;

use pathgraph_core::NodeId;

use crate::record::{Entry, Link, SearchRecord, Termination, VisitedEdge};
use crate::traits::SpatialView;

/// A* search from `src` towards `dest`.
///
/// The frontier is ordered by `g + h`, where `g` is the accumulated length
/// and `h` is [`SpatialView::estimate`]. The result is a shortest path as
/// long as the estimate never exceeds the remaining graph distance.
///
/// Outdated frontier entries (a node pushed again with a lower score) are
/// skipped on pop, the same way [`uniform_cost`](crate::uniform_cost) does.
/// A node that is improved after its expansion is pushed again and
/// re-expanded, so an inconsistent estimate costs time, not correctness.
pub fn astar<V: SpatialView + ?Sized>(view: &V, src: NodeId, dest: NodeId) -> SearchRecord {
    let mut rec = SearchRecord::new(view.node_count());
    if !view.contains(src) || !view.contains(dest) {
        log::warn!("astar: endpoint out of range ({src} -> {dest})");
        return rec;
    }

    rec.dist[src.0] = 0.0;
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

        // Skip stale entries.
        if current.priority > rec.score[ci.0] {
            continue;
        }

        if ci == dest {
            break 'search Termination::Reached;
        }

        rec.expansions += 1;
        let current_g = rec.dist[ci.0];

        nbuf.clear();
        view.adjacent(ci, &mut nbuf);

        for adj in nbuf.iter() {
            let ni = adj.node;
            let Some(&known) = rec.dist.get(ni.0) else {
                continue;
            };
            let tentative_g = current_g + adj.length;
            if tentative_g >= known {
                continue;
            }

            let f = tentative_g + view.estimate(ni, dest);
            log::trace!("astar: {ci} -> {ni} g={tentative_g} f={f}");
            rec.dist[ni.0] = tentative_g;
            rec.score[ni.0] = f;
            rec.parent[ni.0] = Some(Link {
                node: ci,
                edge: adj.edge,
                length: adj.length,
            });
            rec.visited.push(VisitedEdge {
                edge: adj.edge,
                from: ci,
                to: ni,
                length: adj.length,
            });
            open.push(Entry {
                node: ni,
                priority: f,
            });
        }
    };

    log::debug!(
        "astar: {:?} after {} expansions, {} edges visited",
        rec.termination,
        rec.expansions,
        rec.visited.len()
    );
    rec
}
