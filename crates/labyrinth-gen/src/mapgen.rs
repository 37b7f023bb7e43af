//! Perfect maze generation.
//!
//! [`MazeGen::carve`] runs a randomized depth-first backtracker over the odd
//! lattice of a wall-filled [`Grid`]: from the current cell it tries the
//! four cells two steps away, and for every one still walled it opens the
//! connector between them and descends. A cell is only entered while it is
//! still a wall, so each connector is opened once and the open cells form a
//! spanning tree.
//!
//! The walk keeps its own stack of frames instead of recursing, so depth is
//! limited by memory rather than the call stack.

use labyrinth_core::{CellState, Grid, MazeError, Point};
use rand::Rng;

use crate::directions::{Direction, DirectionOrder};

/// Where carving starts.
pub const ROOT: Point = Point::new(1, 1);

/// Entrance and exit chosen for a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Openings {
    /// Cell on the top row holding [`CellState::Start`].
    pub start: Point,
    /// Cell on the bottom row holding [`CellState::End`].
    pub end: Point,
}

/// One pending cell of the depth-first walk.
struct Frame {
    cell: Point,
    dirs: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new(cell: Point, dirs: [Direction; 4]) -> Self {
        Self {
            cell,
            dirs,
            next: 0,
        }
    }

    fn next_dir(&mut self) -> Option<Direction> {
        let d = self.dirs.get(self.next).copied()?;
        self.next += 1;
        Some(d)
    }
}

/// Maze generator operating on a [`Grid`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator over a fresh wall-filled grid.
    pub fn new(width: i32, height: i32, rng: R) -> Result<Self, MazeError> {
        Ok(Self::with_grid(Grid::new(width, height)?, rng))
    }

    /// Create a generator with the given grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Give up the generator and keep the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Carve a perfect maze starting at [`ROOT`], then place the entrance
    /// and exit at random.
    pub fn generate(&mut self, order: &impl DirectionOrder) -> Result<Openings, MazeError> {
        self.carve(order)?;
        self.place_openings()
    }

    /// Carve passages from [`ROOT`].
    ///
    /// Directions are tried in the order `order` gives for each cell.
    /// Returns the number of cells turned into [`CellState::Path`].
    pub fn carve(&mut self, order: &impl DirectionOrder) -> Result<usize, MazeError> {
        self.grid.set(ROOT, CellState::Path)?;
        let mut carved = 1usize;
        let mut max_depth = 1usize;
        let mut stack = vec![Frame::new(ROOT, order.order(&mut self.rng))];

        while let Some(top) = stack.last_mut() {
            let Some(dir) = top.next_dir() else {
                stack.pop();
                continue;
            };
            let cell = top.cell;
            let target = cell + dir.delta() * 2;
            if self.grid.at(target) != Some(CellState::Wall) {
                continue;
            }

            self.grid.set(cell.midpoint(target), CellState::Path)?;
            self.grid.set(target, CellState::Path)?;
            carved += 2;
            log::trace!("carve {cell} -> {target}");

            stack.push(Frame::new(target, order.order(&mut self.rng)));
            max_depth = max_depth.max(stack.len());
        }

        log::debug!(
            "carved {carved} cells in a {}x{} grid, max depth {max_depth}",
            self.grid.width(),
            self.grid.height()
        );
        Ok(carved)
    }

    /// Choose the entrance on the top row and the exit on the bottom row,
    /// each uniformly among the odd columns.
    ///
    /// A grid narrower than three cells has no odd interior column, and one
    /// shorter than two rows has no separate bottom row; both fail with
    /// [`MazeError::InvalidDimensions`].
    pub fn place_openings(&mut self) -> Result<Openings, MazeError> {
        self.check_room_for_openings()?;
        let odd_columns = self.grid.width() / 2;
        let start_col = self.rng.random_range(0..odd_columns) * 2 + 1;
        let end_col = self.rng.random_range(0..odd_columns) * 2 + 1;
        self.place_openings_at(start_col, end_col)
    }

    /// Put the entrance at column `start_col` of the top row and the exit at
    /// column `end_col` of the bottom row.
    ///
    /// Columns must be odd and inside the border. Any earlier entrance or
    /// exit is walled up again, so the grid always holds exactly one of each.
    pub fn place_openings_at(
        &mut self,
        start_col: i32,
        end_col: i32,
    ) -> Result<Openings, MazeError> {
        self.check_room_for_openings()?;
        let openings = Openings {
            start: Point::new(start_col, 0),
            end: Point::new(end_col, self.grid.height() - 1),
        };
        for p in [openings.start, openings.end] {
            if p.x % 2 != 1 || p.x >= self.grid.width() - 1 {
                return Err(MazeError::InvalidOpening { point: p });
            }
        }

        let stale: Vec<Point> = self
            .grid
            .iter()
            .filter(|(_, c)| c.is_opening())
            .map(|(p, _)| p)
            .collect();
        for p in stale {
            self.grid.set(p, CellState::Wall)?;
        }

        self.grid.set(openings.start, CellState::Start)?;
        self.grid.set(openings.end, CellState::End)?;
        log::debug!("entrance {}, exit {}", openings.start, openings.end);
        Ok(openings)
    }

    fn check_room_for_openings(&self) -> Result<(), MazeError> {
        let (width, height) = (self.grid.width(), self.grid.height());
        if width < 3 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(())
    }
}
