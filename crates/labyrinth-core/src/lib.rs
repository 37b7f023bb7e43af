//! **labyrinth-core**: core types for maze generation and solving.
//!
//! This crate provides the foundational types used across the *labyrinth*
//! workspace: geometry primitives, cell states, the owned maze grid, and the
//! shared error taxonomy.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use error::MazeError;
pub use geom::{Point, Range};
pub use grid::{Grid, MIN_SIDE, valid_dimensions};
