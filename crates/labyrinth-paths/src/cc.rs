//! Connected-component labelling of open cells.

use labyrinth_core::Grid;

use crate::graph::Graph;

/// Component labels for the open cells of a grid.
#[derive(Debug, Clone)]
pub struct Components {
    labels: Vec<Option<usize>>,
    count: usize,
}

impl Components {
    /// Label every open cell of `grid` using the edges of `graph`.
    ///
    /// Two open cells share a label if a path of edges joins them. Wall
    /// cells stay unlabelled.
    pub fn of_open_cells(graph: &Graph, grid: &Grid) -> Self {
        let n = graph.vertex_count();
        let mut labels: Vec<Option<usize>> = vec![None; n];
        let mut stack = Vec::new();
        let mut label = 0usize;

        for (p, state) in grid.iter() {
            if !state.is_open() {
                continue;
            }
            let Some(start) = grid.index(p) else {
                continue;
            };
            if start >= n || labels[start].is_some() {
                continue;
            }

            // Iterative DFS from `start`.
            stack.clear();
            stack.push(start);
            labels[start] = Some(label);

            while let Some(u) = stack.pop() {
                for &v in graph.neighbors(u) {
                    if labels[v].is_none() {
                        labels[v] = Some(label);
                        stack.push(v);
                    }
                }
            }

            label += 1;
        }

        Self {
            labels,
            count: label,
        }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Label of vertex `v`, or `None` for walls and out-of-range vertices.
    pub fn label(&self, v: usize) -> Option<usize> {
        self.labels.get(v).copied().flatten()
    }

    /// Whether `u` and `v` are open and connected.
    pub fn connected(&self, u: usize, v: usize) -> bool {
        match (self.label(u), self.label(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::Point;

    #[test]
    fn separate_rooms() {
        let grid: Grid = "\
#######
#..#..#
#######"
            .parse()
            .unwrap();
        let g = Graph::from_grid(&grid);
        let cc = Components::of_open_cells(&g, &grid);
        assert_eq!(cc.count(), 2);

        let a = grid.index(Point::new(1, 1)).unwrap();
        let b = grid.index(Point::new(2, 1)).unwrap();
        let c = grid.index(Point::new(5, 1)).unwrap();
        assert!(cc.connected(a, b));
        assert!(!cc.connected(a, c));
        assert_eq!(cc.label(0), None);
    }

    #[test]
    fn single_component() {
        let grid: Grid = "\
# S # # #
# . . . #
# # # . #
# . . . #
# # # E #"
            .parse()
            .unwrap();
        let g = Graph::from_grid(&grid);
        let cc = Components::of_open_cells(&g, &grid);
        assert_eq!(cc.count(), 1);
    }
}
