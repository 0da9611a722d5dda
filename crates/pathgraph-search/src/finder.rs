//! Run controller: one source/destination query per [`PathFinder::exec`].

use std::fmt;
use std::str::FromStr;

use pathgraph_core::{NodeId, Theme};

use crate::record::{SearchRecord, Termination};
use crate::reconstruct::{Segment, mark_path, path_length, reconstruct, visited_lines};
use crate::traits::StyledView;
use crate::{astar, best_first, uniform_cost};

/// Which strategy [`PathFinder::exec`] dispatches to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Only reset display state, search nothing.
    #[default]
    None,
    /// Dijkstra.
    UniformCost,
    AStar,
    /// Greedy best-first.
    BestFirst,
}

impl Algorithm {
    /// The three strategies that actually search.
    pub const ALL: [Algorithm; 3] = [Self::UniformCost, Self::AStar, Self::BestFirst];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::UniformCost => "dijkstra",
            Self::AStar => "astar",
            Self::BestFirst => "best-first",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "dijkstra" | "uniform-cost" | "ucs" => Ok(Self::UniformCost),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "best-first" | "bestfs" | "greedy" => Ok(Self::BestFirst),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected none, dijkstra, astar or best-first)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Whether a query can be run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FinderState {
    /// Source or destination unset.
    Idle,
    /// Both endpoints set; [`PathFinder::exec`] will run.
    Configured,
}

/// What the last [`PathFinder::exec`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub expansions: usize,
    /// `None` when the algorithm was [`Algorithm::None`].
    pub termination: Option<Termination>,
}

/// Orchestrates a single path query and keeps its output for a renderer.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    theme: Theme,
    src: Option<NodeId>,
    dest: Option<NodeId>,
    path: Vec<Segment>,
    visited: Vec<Segment>,
    last_run: Option<RunSummary>,
}

impl PathFinder {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn set_src(&mut self, n: NodeId) {
        self.src = Some(n);
    }

    #[inline]
    pub fn set_dest(&mut self, n: NodeId) {
        self.dest = Some(n);
    }

    #[inline]
    pub fn src(&self) -> Option<NodeId> {
        self.src
    }

    #[inline]
    pub fn dest(&self) -> Option<NodeId> {
        self.dest
    }

    pub fn state(&self) -> FinderState {
        match (self.src, self.dest) {
            (Some(_), Some(_)) => FinderState::Configured,
            _ => FinderState::Idle,
        }
    }

    /// Run `algorithm` from the configured source to the configured
    /// destination.
    ///
    /// Does nothing unless both endpoints are set and belong to `graph`.
    /// Otherwise the previous path and visited log are discarded, every
    /// display attribute is reset, the endpoints are highlighted and exactly
    /// one strategy runs. [`Algorithm::None`] stops after the reset.
    pub fn exec<G: StyledView + ?Sized>(&mut self, graph: &mut G, algorithm: Algorithm) {
        let (Some(src), Some(dest)) = (self.src, self.dest) else {
            log::debug!("exec: source or destination unset, nothing to do");
            return;
        };
        if !graph.contains(src) || !graph.contains(dest) {
            log::warn!("exec: endpoint not in graph ({src} -> {dest})");
            return;
        }

        self.path.clear();
        self.visited.clear();

        graph.reset_styles(&self.theme);
        graph.set_node_style(src, self.theme.source_style());
        graph.set_node_style(dest, self.theme.destination_style());

        let rec = match algorithm {
            Algorithm::None => {
                self.last_run = Some(RunSummary {
                    algorithm,
                    expansions: 0,
                    termination: None,
                });
                return;
            }
            Algorithm::UniformCost => uniform_cost(&*graph, src, dest),
            Algorithm::AStar => astar(&*graph, src, dest),
            Algorithm::BestFirst => best_first(&*graph, src, dest),
        };

        self.finish(graph, algorithm, src, dest, rec);
    }

    fn finish<G: StyledView + ?Sized>(
        &mut self,
        graph: &mut G,
        algorithm: Algorithm,
        src: NodeId,
        dest: NodeId,
        rec: SearchRecord,
    ) {
        self.visited = visited_lines(&*graph, rec.visited(), &self.theme);
        self.path = reconstruct(&*graph, &rec, src, dest, &self.theme);
        mark_path(graph, &self.path, &self.theme);

        self.last_run = Some(RunSummary {
            algorithm,
            expansions: rec.expansions(),
            termination: Some(rec.termination()),
        });
        log::info!(
            "{algorithm}: {src} -> {dest}, {} segments, length {:.3}, {} edges visited",
            self.path.len(),
            self.path_length(),
            self.visited.len()
        );
    }

    /// Clear the output, restore the endpoints' default display style and
    /// unset them.
    pub fn reset<G: StyledView + ?Sized>(&mut self, graph: &mut G) {
        self.path.clear();
        self.visited.clear();
        self.last_run = None;

        let default = self.theme.node_default();
        for n in [self.src.take(), self.dest.take()].into_iter().flatten() {
            if graph.contains(n) {
                graph.set_node_style(n, default);
            }
        }
    }

    /// Source → destination segments of the last run. Empty when nothing
    /// was found or `src == dest`.
    #[inline]
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    /// Lines for every edge logged during the last run.
    #[inline]
    pub fn visited_edges(&self) -> &[Segment] {
        &self.visited
    }

    #[inline]
    pub fn path_length(&self) -> f64 {
        path_length(&self.path)
    }

    #[inline]
    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    /// Lines in the order a renderer should draw them: visited edges first
    /// (only with `show_visited`), then the path on top.
    pub fn draw_lines(&self, show_visited: bool) -> impl Iterator<Item = &Segment> {
        let visited: &[Segment] = if show_visited { &self.visited } else { &[] };
        visited.iter().chain(self.path.iter())
    }
}
