use crate::reconstruct::reconstruct;
use labyrinth_core::MazeError;

/// Distance and predecessor tables produced by one solve call.
///
/// A distance of `None` means the vertex was not reached, so no finite value
/// is reserved as "infinity".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    target: usize,
    distance: Vec<Option<u32>>,
    predecessor: Vec<Option<usize>>,
    expanded: usize,
}

impl ShortestPaths {
    /// Fresh tables for `vertex_count` vertices, nothing reached.
    pub(crate) fn new(vertex_count: usize, source: usize, target: usize) -> Self {
        Self {
            source,
            target,
            distance: vec![None; vertex_count],
            predecessor: vec![None; vertex_count],
            expanded: 0,
        }
    }

    /// Record `v` as reached at distance `d` through `pred`.
    #[inline]
    pub(crate) fn reach(&mut self, v: usize, d: u32, pred: Option<usize>) {
        self.distance[v] = Some(d);
        self.predecessor[v] = pred;
    }

    #[inline]
    pub(crate) fn mark_expanded(&mut self) {
        self.expanded += 1;
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether the target was reached.
    pub fn found(&self) -> bool {
        self.target_distance().is_some()
    }

    /// Number of edges on a shortest path to the target.
    pub fn target_distance(&self) -> Option<u32> {
        self.distance(self.target)
    }

    /// Distance of `v` from the source, if reached.
    ///
    /// Vertices beyond an early-terminated search frontier may be unreached
    /// even when connected.
    pub fn distance(&self, v: usize) -> Option<u32> {
        self.distance.get(v).copied().flatten()
    }

    /// Vertex preceding `v` on a shortest path from the source.
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessor.get(v).copied().flatten()
    }

    pub fn distances(&self) -> &[Option<u32>] {
        &self.distance
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessor
    }

    /// Number of vertices the search expanded before stopping.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Vertices from source to target along the predecessor chain.
    ///
    /// Empty when the target was not reached.
    pub fn path(&self) -> Result<Vec<usize>, MazeError> {
        reconstruct(&self.predecessor, self.source, self.target)
    }
}

// ---------------------------------------------------------------------------
// Internal heap entry for Dijkstra
// ---------------------------------------------------------------------------

/// Vertex keyed by tentative distance, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dist: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest distance first; ties
        // break on the lower vertex id to keep runs deterministic.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
