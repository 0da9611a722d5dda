use std::collections::BinaryHeap;

use pathgraph_core::NodeId;

use crate::record::{Entry, Link, SearchRecord, Termination, VisitedEdge};
use crate::traits::GraphView;

/// Uniform-cost (Dijkstra) search from `src` towards `dest`.
///
/// Finds a minimum-total-length path whenever `dest` is reachable. The
/// frontier has no decrease-key, so improved nodes are pushed again and the
/// outdated entries are skipped when popped. The run ends the first time
/// `dest` is popped; with non-negative lengths its distance is final then.
///
/// Every improving relaxation is logged as a visited edge.
pub fn uniform_cost<V: GraphView + ?Sized>(view: &V, src: NodeId, dest: NodeId) -> SearchRecord {
    let mut rec = SearchRecord::new(view.node_count());
    if !view.contains(src) || !view.contains(dest) {
        log::warn!("uniform-cost: endpoint out of range ({src} -> {dest})");
        return rec;
    }

    rec.dist[src.0] = 0.0;
    rec.score[src.0] = 0.0;

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    open.push(Entry {
        node: src,
        priority: 0.0,
    });

    let mut nbuf = Vec::new();

    rec.termination = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search Termination::Exhausted;
        };
        let ci = current.node;

        // Skip stale entries.
        if current.priority > rec.dist[ci.0] {
            continue;
        }

        if ci == dest {
            break 'search Termination::Reached;
        }

        rec.expansions += 1;
        let current_dist = rec.dist[ci.0];

        nbuf.clear();
        view.adjacent(ci, &mut nbuf);

        for adj in nbuf.iter() {
            let ni = adj.node;
            let Some(&known) = rec.dist.get(ni.0) else {
                continue;
            };
            let tentative = current_dist + adj.length;
            if tentative >= known {
                continue;
            }

            log::trace!("uniform-cost: {ci} -> {ni} improves to {tentative}");
            rec.dist[ni.0] = tentative;
            rec.score[ni.0] = tentative;
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
                priority: tentative,
            });
        }
    };

    log::debug!(
        "uniform-cost: {:?} after {} expansions, {} edges visited",
        rec.termination,
        rec.expansions,
        rec.visited.len()
    );
    rec
}
