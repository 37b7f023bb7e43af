//! Error taxonomy shared by every stage of a maze run.

use thiserror::Error;

use crate::geom::Point;

/// Failures raised while building, generating or solving a maze.
///
/// An unreachable exit is not an error: solvers report it as a normal
/// outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Width or height is even or smaller than [`MIN_SIDE`](crate::MIN_SIDE),
    /// or the cell count does not fit in an `i32`.
    #[error("invalid maze dimensions {width}x{height}: both must be odd integers >= 5 with a product that fits in an i32")]
    InvalidDimensions { width: i32, height: i32 },
    /// A cell address fell outside the grid. Always a logic defect.
    #[error("cell {point} is outside the {}x{} grid", .size.x, .size.y)]
    OutOfBounds { point: Point, size: Point },
    /// An entrance or exit that is not on an odd interior column of the top
    /// or bottom row.
    #[error("opening {point} must sit on an odd column of the top or bottom row")]
    InvalidOpening { point: Point },
    /// The predecessor chain from the target never reached the source.
    #[error("corrupt predecessor chain: vertex {target} did not reach the source within {steps} steps")]
    CorruptPathState { target: usize, steps: usize },
    /// Unknown character in a text grid.
    #[error("invalid cell character {ch:?} at {point}")]
    InvalidCell { ch: char, point: Point },
    /// A text grid row has a different width from the first row.
    #[error("row {row} has a different width from the first row")]
    InconsistentRows { row: usize },
    /// A text grid with no cells.
    #[error("grid text contains no cells")]
    EmptyGrid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = MazeError::InvalidDimensions {
            width: 4,
            height: 5,
        };
        assert_eq!(
            e.to_string(),
            "invalid maze dimensions 4x5: both must be odd integers >= 5 with a product that fits in an i32"
        );
        let e = MazeError::OutOfBounds {
            point: Point::new(7, 1),
            size: Point::new(5, 5),
        };
        assert_eq!(e.to_string(), "cell (7, 1) is outside the 5x5 grid");
    }
}
