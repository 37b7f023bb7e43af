//! Graph construction and shortest-path search for carved mazes.
//!
//! - **Graph building** from a [`Grid`](labyrinth_core::Grid) ([`Graph::from_grid`])
//! - **BFS** unit-weight shortest paths ([`Bfs`]), the default solver
//! - **Dijkstra** heap-based shortest paths ([`Dijkstra`]) with pluggable [`EdgeCost`]
//! - **Path reconstruction** from predecessor tables ([`reconstruct`], [`mark_path`])
//! - **Connected components** of open cells ([`Components`])
//!
//! Both solvers implement [`ShortestPathSolver`] and return a fresh
//! [`ShortestPaths`] table per call; nothing is shared between calls.

mod bfs;
mod cc;
mod dijkstra;
mod graph;
mod reconstruct;
mod search;
mod traits;

pub use bfs::Bfs;
pub use cc::Components;
pub use dijkstra::Dijkstra;
pub use graph::Graph;
pub use reconstruct::{mark_path, reconstruct};
pub use search::ShortestPaths;
pub use traits::{EdgeCost, ShortestPathSolver, UnitCost};

/// Which [`ShortestPathSolver`] to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SolverKind {
    #[default]
    Bfs,
    Dijkstra,
}

impl SolverKind {
    /// Build a fresh solver of this kind.
    pub fn solver(self) -> Box<dyn ShortestPathSolver> {
        match self {
            SolverKind::Bfs => Box::new(Bfs::new()),
            SolverKind::Dijkstra => Box::new(Dijkstra::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Bfs => "bfs",
            SolverKind::Dijkstra => "dijkstra",
        }
    }
}

impl std::str::FromStr for SolverKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(SolverKind::Bfs),
            "dijkstra" => Ok(SolverKind::Dijkstra),
            other => Err(format!("unknown solver {other:?}, expected bfs or dijkstra")),
        }
    }
}
