use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::search::{NodeRef, ShortestPaths};
use crate::traits::{EdgeCost, ShortestPathSolver, UnitCost};

/// Dijkstra's algorithm over a binary min-heap.
///
/// With [`UnitCost`] it yields the same distances as [`Bfs`](crate::Bfs);
/// other [`EdgeCost`] implementations allow weighted graphs.
#[derive(Debug, Default)]
pub struct Dijkstra<C: EdgeCost = UnitCost> {
    cost: C,
    open: BinaryHeap<NodeRef>,
    closed: Vec<bool>,
}

impl Dijkstra {
    /// Unit-cost Dijkstra.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: EdgeCost> Dijkstra<C> {
    /// Dijkstra with a custom edge cost.
    pub fn with_cost(cost: C) -> Self {
        Self {
            cost,
            open: BinaryHeap::new(),
            closed: Vec::new(),
        }
    }
}

impl<C: EdgeCost> ShortestPathSolver for Dijkstra<C> {
    fn solve(&mut self, graph: &Graph, source: usize, target: usize) -> ShortestPaths {
        let n = graph.vertex_count();
        let mut sp = ShortestPaths::new(n, source, target);
        if source >= n {
            return sp;
        }

        self.open.clear();
        self.closed.clear();
        self.closed.resize(n, false);

        sp.reach(source, 0, None);
        self.open.push(NodeRef {
            idx: source,
            dist: 0,
        });

        while let Some(current) = self.open.pop() {
            let u = current.idx;
            // Stale entry: already settled, or superseded by a shorter one.
            if self.closed[u] || sp.distance(u) != Some(current.dist) {
                continue;
            }
            self.closed[u] = true;
            sp.mark_expanded();
            if u == target {
                break;
            }

            for &v in graph.neighbors(u) {
                if self.closed[v] {
                    continue;
                }
                let tentative = current.dist.saturating_add(self.cost.cost(u, v));
                if sp.distance(v).is_some_and(|dv| tentative >= dv) {
                    continue;
                }
                sp.reach(v, tentative, Some(u));
                self.open.push(NodeRef {
                    idx: v,
                    dist: tentative,
                });
            }
        }

        log::trace!(
            "dijkstra {source} -> {target}: distance {:?}, expanded {}",
            sp.target_distance(),
            sp.expanded()
        );
        sp
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bfs;

    fn diamond() -> Graph {
        let mut g = Graph::new(6);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(0, 4);
        g.add_edge(4, 3);
        g
    }

    #[test]
    fn finds_shortest() {
        let g = diamond();
        let sp = Dijkstra::new().solve(&g, 0, 3);
        assert!(sp.found());
        assert_eq!(sp.target_distance(), Some(2));
        assert_eq!(sp.path().unwrap(), vec![0, 4, 3]);
    }

    #[test]
    fn unreachable_target() {
        let g = diamond();
        let sp = Dijkstra::new().solve(&g, 1, 5);
        assert!(!sp.found());
        assert!(sp.path().unwrap().is_empty());
    }

    #[test]
    fn matches_bfs_on_every_pair() {
        let mut g = Graph::new(9);
        // 3x3 lattice with the centre removed.
        for (u, v) in [(0, 1), (1, 2), (2, 5), (5, 8), (8, 7), (7, 6), (6, 3), (3, 0)] {
            g.add_edge(u, v);
        }
        let mut bfs = Bfs::new();
        let mut dij = Dijkstra::new();
        for s in 0..9 {
            for t in 0..9 {
                let a = bfs.solve(&g, s, t);
                let b = dij.solve(&g, s, t);
                assert_eq!(a.found(), b.found(), "{s} -> {t}");
                assert_eq!(a.target_distance(), b.target_distance(), "{s} -> {t}");
            }
        }
    }

    struct Toll;

    impl EdgeCost for Toll {
        fn cost(&self, from: usize, to: usize) -> u32 {
            // The shortcut through vertex 4 is expensive.
            if from == 4 || to == 4 { 10 } else { 1 }
        }
    }

    #[test]
    fn weighted_cost_changes_route() {
        let g = diamond();
        let sp = Dijkstra::with_cost(Toll).solve(&g, 0, 3);
        assert_eq!(sp.target_distance(), Some(3));
        assert_eq!(sp.path().unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn stops_when_target_extracted() {
        let mut g = Graph::new(10);
        for v in 0..9 {
            g.add_edge(v, v + 1);
        }
        let sp = Dijkstra::new().solve(&g, 0, 2);
        assert_eq!(sp.target_distance(), Some(2));
        assert_eq!(sp.expanded(), 3);
    }
}
