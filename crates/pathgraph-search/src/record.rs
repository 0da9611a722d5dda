//! Per-run bookkeeping shared by every strategy.

use std::cmp::Ordering;

use pathgraph_core::{EdgeId, NodeId};

/// Distance of a node not reached (yet).
pub const UNREACHED: f64 = f64::INFINITY;

/// Parent pointer: the node a search arrived from, and through which edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub node: NodeId,
    pub edge: EdgeId,
    pub length: f64,
}

/// An edge examined during a search, oriented in the direction it was
/// traversed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitedEdge {
    pub edge: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub length: f64,
}

/// How a search loop ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The destination was popped from the frontier.
    Reached,
    /// The frontier ran dry first.
    Exhausted,
}

/// Everything a single search invocation learned.
///
/// Created fresh by each strategy call and consumed by the reconstructor;
/// nothing in here survives into the next run.
#[derive(Clone, Debug)]
pub struct SearchRecord {
    /// Best known distance from the source. Unused by best-first search.
    pub(crate) dist: Vec<f64>,
    /// Frontier priority last assigned to each node.
    pub(crate) score: Vec<f64>,
    pub(crate) parent: Vec<Option<Link>>,
    pub(crate) visited: Vec<VisitedEdge>,
    pub(crate) expansions: usize,
    pub(crate) termination: Termination,
}

impl SearchRecord {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            dist: vec![UNREACHED; len],
            score: vec![UNREACHED; len],
            parent: vec![None; len],
            visited: Vec::new(),
            expansions: 0,
            termination: Termination::Exhausted,
        }
    }

    /// Parent link of `n`, if the search ever assigned one.
    #[inline]
    pub fn parent(&self, n: NodeId) -> Option<Link> {
        self.parent.get(n.0).copied().flatten()
    }

    /// Best known distance from the source, [`UNREACHED`] if none.
    #[inline]
    pub fn distance(&self, n: NodeId) -> f64 {
        self.dist.get(n.0).copied().unwrap_or(UNREACHED)
    }

    /// Frontier priority last assigned to `n`, [`UNREACHED`] if none.
    #[inline]
    pub fn score(&self, n: NodeId) -> f64 {
        self.score.get(n.0).copied().unwrap_or(UNREACHED)
    }

    /// Edges examined, in the order they were logged.
    #[inline]
    pub fn visited(&self) -> &[VisitedEdge] {
        &self.visited
    }

    /// Number of nodes popped from the frontier and expanded.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    #[inline]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Frontier entries
// ---------------------------------------------------------------------------

/// Frontier entry, ordered so that `BinaryHeap` pops the smallest priority
/// first. Ties go to the lower node id.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) node: NodeId,
    pub(crate) priority: f64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}
