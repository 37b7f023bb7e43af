//! Maze generation for labyrinth: randomized depth-first carving and
//! entrance/exit placement.

pub mod directions;
pub mod mapgen;

pub use directions::{Direction, DirectionOrder, FixedDirections, ShuffledDirections};
pub use mapgen::{MazeGen, Openings, ROOT};
