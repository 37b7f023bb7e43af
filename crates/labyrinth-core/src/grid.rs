//! Maze grid storage.
//!
//! [`Grid`] owns a row-major buffer of [`CellState`] values. Cell addresses
//! map to flat indices (and graph vertex ids) by `row * width + column`.
//!
//! The text form produced by [`Display`](std::fmt::Display) is one character
//! per cell followed by a space, one row per line:
//!
//! ```text
//! # S # # #
//! # . . . #
//! # # # . #
//! # . . . #
//! # # # E #
//! ```

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::MazeError;
use crate::geom::{Point, Range};

/// Smallest legal side length for a generated maze.
pub const MIN_SIDE: i32 = 5;

/// Whether `width` x `height` can hold a carved maze: both odd, at least
/// [`MIN_SIDE`], and with a cell count that fits in an `i32`.
pub fn valid_dimensions(width: i32, height: i32) -> bool {
    width >= MIN_SIDE
        && height >= MIN_SIDE
        && width % 2 == 1
        && height % 2 == 1
        && width.checked_mul(height).is_some()
}

/// A rectangular grid of [`CellState`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of walls.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] unless both sides are odd
    /// and at least [`MIN_SIDE`]. Two-step carving relies on this so that it
    /// never lands on the border and always leaves a wall between parallel
    /// corridors. Grids whose cell count overflows `i32` are rejected the same
    /// way, which keeps every flat index representable.
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        if !valid_dimensions(width, height) {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self::filled(width, height, CellState::Wall))
    }

    fn filled(width: i32, height: i32, state: CellState) -> Self {
        Self {
            cells: vec![state; width as usize * height as usize],
            bounds: Range::with_size(width, height),
        }
    }

    /// The bounding range of the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells, which is also the number of graph vertices.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index (vertex id) of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width() + p.x) as usize)
    }

    /// Point addressed by a flat index, or `None` if out of bounds.
    #[inline]
    pub fn point(&self, idx: usize) -> Option<Point> {
        if idx >= self.cells.len() {
            return None;
        }
        let w = self.width() as usize;
        Some(Point::new((idx % w) as i32, (idx / w) as i32))
    }

    fn out_of_bounds(&self, p: Point) -> MazeError {
        MazeError::OutOfBounds {
            point: p,
            size: self.size(),
        }
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Get the cell at a point.
    ///
    /// Unlike [`at`](Self::at), an out-of-range point is an error.
    pub fn get(&self, p: Point) -> Result<CellState, MazeError> {
        self.at(p).ok_or_else(|| self.out_of_bounds(p))
    }

    /// Set the cell at a point. Out-of-range points are an error, never
    /// clamped.
    pub fn set(&mut self, p: Point, state: CellState) -> Result<(), MazeError> {
        let i = self.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        self.cells[i] = state;
        Ok(())
    }

    /// Whether the cell at `p` is walkable. Points outside the grid are not.
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellState::is_open)
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Count how many cells equal the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Count walkable cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// First point (row-major) holding `state`.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells
            .iter()
            .position(|&c| c == state)
            .and_then(|i| self.point(i))
    }

    /// Iterate over `(Point, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width().max(1) as usize)
    }

    /// Text form of the grid. Rendering the same state twice yields identical
    /// text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{} ", c.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parse the text form. Spaces between cells are optional, blank lines
    /// at either end are ignored. Dimensions are not checked against
    /// [`valid_dimensions`] so hand-made fixtures of any shape can be loaded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (y, line) in s.trim_matches('\n').lines().enumerate() {
            let mut row_len = 0usize;
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let state = CellState::from_char(ch).ok_or(MazeError::InvalidCell {
                    ch,
                    point: Point::new(row_len as i32, y as i32),
                })?;
                cells.push(state);
                row_len += 1;
            }
            match width {
                None => width = Some(row_len),
                Some(w) if w != row_len => return Err(MazeError::InconsistentRows { row: y }),
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyGrid);
        }
        Ok(Self {
            cells,
            bounds: Range::with_size(width as i32, height as i32),
        })
    }
}
