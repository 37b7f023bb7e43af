//! **labyrinth**: generate a perfect maze, find the shortest way from its
//! entrance on the top row to its exit on the bottom row, and print both.
//!
//! The pipeline is `Grid` → [`MazeGen`](labyrinth_gen::MazeGen) →
//! [`Graph`](labyrinth_paths::Graph) → [`ShortestPathSolver`](labyrinth_paths::ShortestPathSolver)
//! → path marked back onto the grid. [`run`] drives it for the command-line
//! binary.

pub mod config;
pub mod error;
pub mod maze;
pub mod render;

use std::io::Write;

pub use config::{MazeConfig, Options};
pub use error::CliError;
pub use maze::{Labyrinth, Outcome};

/// Generate, print, solve and print again.
pub fn run(config: &MazeConfig, out: &mut impl Write) -> Result<Outcome, CliError> {
    let mut lab = Labyrinth::from_config(config)?;

    writeln!(out, "\nGenerated Maze:")?;
    write!(out, "{}", render::render(lab.grid(), config.color))?;

    let mut solver = config.solver.solver();
    let outcome = lab.solve(solver.as_mut())?;
    match &outcome {
        Outcome::Solved { .. } => {
            writeln!(out, "\nPath found! Reconstructing path...")?;
            writeln!(out, "\nMaze with Solution Path:")?;
            write!(out, "{}", render::render(lab.grid(), config.color))?;
        }
        Outcome::NoPathFound => {
            writeln!(out, "\nNo path found from start to end.")?;
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_paths::SolverKind;

    #[test]
    fn run_prints_both_mazes() {
        let cfg = MazeConfig::new(7, 7).with_seed(12);
        let mut out = Vec::new();
        let outcome = run(&cfg, &mut out).unwrap();
        assert!(outcome.is_solved());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\nGenerated Maze:\n"));
        assert!(text.contains("\nPath found! Reconstructing path...\n"));
        let (before, after) = text.split_once("\nMaze with Solution Path:\n").unwrap();
        assert!(!before.contains('*'));
        assert!(after.contains('*'));
        // Seven rows, each seven cells of "c ".
        assert_eq!(after.lines().count(), 7);
        assert!(after.lines().all(|l| l.len() == 14));
    }

    #[test]
    fn run_is_reproducible_with_a_seed() {
        let cfg = MazeConfig::new(21, 9)
            .with_seed(77)
            .with_solver(SolverKind::Dijkstra);
        let mut a = Vec::new();
        let mut b = Vec::new();
        run(&cfg, &mut a).unwrap();
        run(&cfg, &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn run_rejects_bad_dimensions() {
        let mut out = Vec::new();
        let err = run(&MazeConfig::new(5, 4), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Maze(_)));
        assert!(out.is_empty());
    }
}
