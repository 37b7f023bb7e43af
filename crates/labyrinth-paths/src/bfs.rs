use std::collections::VecDeque;

use crate::graph::Graph;
use crate::search::ShortestPaths;
use crate::traits::ShortestPathSolver;

/// Breadth-first search. The default solver for unit-weight mazes.
///
/// The first time a vertex is discovered its distance is final, so each
/// vertex enters the queue at most once.
#[derive(Debug, Default)]
pub struct Bfs {
    queue: VecDeque<usize>,
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShortestPathSolver for Bfs {
    fn solve(&mut self, graph: &Graph, source: usize, target: usize) -> ShortestPaths {
        let mut sp = ShortestPaths::new(graph.vertex_count(), source, target);
        if source >= graph.vertex_count() {
            return sp;
        }

        self.queue.clear();
        sp.reach(source, 0, None);
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            sp.mark_expanded();
            if u == target {
                break;
            }
            let Some(du) = sp.distance(u) else {
                continue;
            };
            for &v in graph.neighbors(u) {
                if sp.distance(v).is_some() {
                    continue;
                }
                sp.reach(v, du + 1, Some(u));
                self.queue.push_back(v);
            }
        }

        log::trace!(
            "bfs {source} -> {target}: distance {:?}, expanded {}",
            sp.target_distance(),
            sp.expanded()
        );
        sp
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}
