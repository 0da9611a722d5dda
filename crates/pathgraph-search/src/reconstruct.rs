//! Turning a parent map into drawable path segments.

use pathgraph_core::{Color, Coord, EdgeId, NodeId, Theme};

use crate::record::{SearchRecord, VisitedEdge};
use crate::traits::{SpatialView, StyledView};

/// A directed line between two nodes, ready to be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: NodeId,
    pub to: NodeId,
    pub edge: EdgeId,
    pub start: Coord,
    pub end: Coord,
    pub length: f64,
    pub color: Color,
    pub thickness: f32,
}

/// Build the source → destination segment list from `rec`.
///
/// Returns an empty list when `dest` has no parent, which covers both an
/// unreachable destination and `src == dest`. The backward walk also stops
/// on a missing link or after `node_count` steps, so a malformed parent map
/// cannot loop forever; the partial chain is still returned.
pub fn reconstruct<V: SpatialView + ?Sized>(
    view: &V,
    rec: &SearchRecord,
    src: NodeId,
    dest: NodeId,
    theme: &Theme,
) -> Vec<Segment> {
    if rec.parent(dest).is_none() {
        return Vec::new();
    }

    let line = theme.path_line();
    let mut reversed = Vec::new();
    let mut current = dest;

    while current != src && reversed.len() < rec.len() {
        let Some(link) = rec.parent(current) else {
            log::warn!("reconstruct: chain broken at {current}");
            break;
        };
        reversed.push(Segment {
            from: link.node,
            to: current,
            edge: link.edge,
            start: view.coord(link.node),
            end: view.coord(current),
            length: link.length,
            color: line.color,
            thickness: line.thickness,
        });
        current = link.node;
    }

    reversed.reverse();
    reversed
}

/// Recolour every node touched by `segments` as being on the path.
pub fn mark_path<V: StyledView + ?Sized>(view: &mut V, segments: &[Segment], theme: &Theme) {
    for seg in segments {
        for n in [seg.from, seg.to] {
            let style = theme.on_path_style(view.node_style(n));
            view.set_node_style(n, style);
        }
    }
}

/// Lines for the edges examined during a run.
pub fn visited_lines<V: SpatialView + ?Sized>(
    view: &V,
    visited: &[VisitedEdge],
    theme: &Theme,
) -> Vec<Segment> {
    let line = theme.visited_line();
    visited
        .iter()
        .map(|v| Segment {
            from: v.from,
            to: v.to,
            edge: v.edge,
            start: view.coord(v.from),
            end: view.coord(v.to),
            length: v.length,
            color: line.color,
            thickness: line.thickness,
        })
        .collect()
}

/// Total length of a segment list.
pub fn path_length(segments: &[Segment]) -> f64 {
    segments.iter().map(|s| s.length).sum()
}
