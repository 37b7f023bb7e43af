use labyrinth_core::MazeError;
use thiserror::Error;

/// Failures surfaced to the command-line user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("invalid input {0:?}: expected an integer")]
    InvalidInput(String),
    #[error("input ended before the maze {0} was given")]
    MissingInput(&'static str),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
