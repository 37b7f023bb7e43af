use crate::graph::Graph;
use crate::search::ShortestPaths;

/// Single-source, single-target shortest-path search over a [`Graph`].
pub trait ShortestPathSolver {
    /// Search from `source` toward `target`.
    ///
    /// Implementations may stop as soon as `target` is finalized. An
    /// unreachable target is reported through [`ShortestPaths::found`], not
    /// as an error.
    fn solve(&mut self, graph: &Graph, source: usize, target: usize) -> ShortestPaths;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Cost of traversing an edge, for weighted searches.
pub trait EdgeCost {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: usize, to: usize) -> u32;
}

/// Every edge costs 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitCost;

impl EdgeCost for UnitCost {
    #[inline]
    fn cost(&self, _from: usize, _to: usize) -> u32 {
        1
    }
}
