use labyrinth_core::Grid;

/// Undirected, unweighted graph over maze cells.
///
/// Vertex ids are flat grid indices (`row * width + column`). Every cell gets
/// a vertex, so wall cells are simply vertices with no edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edges: usize,
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            edges: 0,
        }
    }

    /// Build the adjacency of a carved grid.
    ///
    /// For every open cell, each open orthogonal neighbour with a larger id
    /// contributes one undirected edge, so each pair is visited once. The
    /// same grid always yields the same graph.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut graph = Self::new(grid.len());

        for (p, state) in grid.iter() {
            if !state.is_open() {
                continue;
            }
            let Some(u) = grid.index(p) else {
                continue;
            };
            for n in p.neighbors_4() {
                if !grid.is_open(n) {
                    continue;
                }
                let Some(v) = grid.index(n) else {
                    continue;
                };
                if u < v {
                    graph.add_edge(u, v);
                }
            }
        }

        log::debug!(
            "graph: {} vertices, {} edges from {} open cells",
            graph.vertex_count(),
            graph.edge_count(),
            grid.open_count()
        );
        graph
    }

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Returns `false` (and leaves the graph untouched) for self-loops,
    /// duplicate edges and out-of-range vertices.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v || u >= self.adj.len() || v >= self.adj.len() || self.has_edge(u, v) {
            return false;
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edges += 1;
        true
    }

    /// Whether `{u, v}` is an edge.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(u).is_some_and(|ns| ns.contains(&v))
    }

    /// Neighbours of `v`. Empty for out-of-range vertices.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}
