//! One maze run: generate, build the graph, solve, mark the path.

use labyrinth_core::{Grid, MazeError, Point};
use labyrinth_gen::{MazeGen, Openings, ShuffledDirections};
use labyrinth_paths::{Components, Graph, ShortestPathSolver, mark_path};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::MazeConfig;

/// Result of solving a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A shortest path from entrance to exit, entrance first.
    Solved { path: Vec<Point>, length: u32 },
    /// The exit cannot be reached from the entrance.
    NoPathFound,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }
}

/// A carved maze and its openings.
#[derive(Debug, Clone)]
pub struct Labyrinth {
    grid: Grid,
    openings: Openings,
}

impl Labyrinth {
    /// Carve a new maze with a random direction order drawn from `rng`.
    pub fn generate<R: Rng>(width: i32, height: i32, rng: R) -> Result<Self, MazeError> {
        let mut mg = MazeGen::new(width, height, rng)?;
        let openings = mg.generate(&ShuffledDirections)?;
        Ok(Self {
            grid: mg.into_grid(),
            openings,
        })
    }

    /// Carve a maze as `config` describes, seeded if it names a seed.
    pub fn from_config(config: &MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        match config.seed {
            Some(seed) => {
                log::info!("generating {}x{} maze with seed {seed}", config.width, config.height);
                Self::generate(config.width, config.height, StdRng::seed_from_u64(seed))
            }
            None => {
                log::info!("generating {}x{} maze", config.width, config.height);
                Self::generate(config.width, config.height, rand::rng())
            }
        }
    }

    /// Wrap an existing grid. The openings must lie inside it.
    pub fn from_parts(grid: Grid, openings: Openings) -> Result<Self, MazeError> {
        for p in [openings.start, openings.end] {
            grid.get(p)?;
        }
        Ok(Self { grid, openings })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn openings(&self) -> Openings {
        self.openings
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Find a shortest path from the entrance to the exit and mark it on the
    /// grid. The grid is left untouched when there is no path.
    pub fn solve(&mut self, solver: &mut dyn ShortestPathSolver) -> Result<Outcome, MazeError> {
        let graph = Graph::from_grid(&self.grid);
        let components = Components::of_open_cells(&graph, &self.grid);
        log::debug!("{} connected region(s) of open cells", components.count());

        let source = self.vertex(self.openings.start)?;
        let target = self.vertex(self.openings.end)?;
        let sp = solver.solve(&graph, source, target);
        log::debug!(
            "{} expanded {} of {} vertices",
            solver.name(),
            sp.expanded(),
            graph.vertex_count()
        );

        let Some(length) = sp.target_distance() else {
            log::info!("no path from {} to {}", self.openings.start, self.openings.end);
            return Ok(Outcome::NoPathFound);
        };

        let vertices = sp.path()?;
        mark_path(&mut self.grid, &vertices)?;
        let path = vertices
            .iter()
            .filter_map(|&v| self.grid.point(v))
            .collect();
        log::info!("shortest path has {length} steps");
        Ok(Outcome::Solved { path, length })
    }

    fn vertex(&self, p: Point) -> Result<usize, MazeError> {
        self.grid.index(p).ok_or(MazeError::OutOfBounds {
            point: p,
            size: self.grid.size(),
        })
    }
}
