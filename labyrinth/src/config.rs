//! Run configuration.
//!
//! `labyrinth [-W N] [-H N] [--seed N] [--solver bfs|dijkstra] [--color]`
//!
//! Dimensions missing from the command line are asked for on stdin.

use std::io::{BufRead, Write};

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use labyrinth_core::{MazeError, valid_dimensions};
use labyrinth_paths::SolverKind;

use crate::error::CliError;

pub fn command() -> Command {
    Command::new("labyrinth")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a perfect maze and mark its shortest path")
        .arg(
            Arg::new("width")
                .short('W')
                .long("width")
                .value_name("N")
                .help("Maze width in cells (odd, >= 5); prompted for if omitted")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("height")
                .short('H')
                .long("height")
                .value_name("N")
                .help("Maze height in cells (odd, >= 5); prompted for if omitted")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for a reproducible maze")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("solver")
                .long("solver")
                .value_name("NAME")
                .help("Shortest-path algorithm: bfs or dijkstra")
                .default_value("bfs")
                .value_parser(|s: &str| s.parse::<SolverKind>()),
        )
        .arg(
            Arg::new("color")
                .short('c')
                .long("color")
                .help("Color the maze for terminal display")
                .action(ArgAction::SetTrue),
        )
}

/// Command-line options before missing dimensions are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub seed: Option<u64>,
    pub solver: SolverKind,
    pub color: bool,
}

impl Options {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            width: m.get_one::<i32>("width").copied(),
            height: m.get_one::<i32>("height").copied(),
            seed: m.get_one::<u64>("seed").copied(),
            solver: m.get_one::<SolverKind>("solver").copied().unwrap_or_default(),
            color: m.get_flag("color"),
        }
    }

    /// Fill in missing dimensions by prompting on `output` and reading
    /// `input`, then validate.
    pub fn resolve(
        self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<MazeConfig, CliError> {
        let width = match self.width {
            Some(w) => w,
            None => prompt_dimension("width", input, output)?,
        };
        let height = match self.height {
            Some(h) => h,
            None => prompt_dimension("height", input, output)?,
        };
        let config = MazeConfig {
            width,
            height,
            seed: self.seed,
            solver: self.solver,
            color: self.color,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Ask for one dimension, the way the interactive program always has.
pub fn prompt_dimension(
    name: &'static str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<i32, CliError> {
    write!(output, "Enter the {name} of the maze (odd, >= 5): ")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::MissingInput(name));
    }
    let text = line.trim();
    text.parse()
        .map_err(|_| CliError::InvalidInput(text.to_string()))
}

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub width: i32,
    pub height: i32,
    /// Fixed seed; `None` draws from OS entropy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub solver: SolverKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: bool,
}

impl MazeConfig {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            seed: None,
            solver: SolverKind::default(),
            color: false,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Reject dimensions the generator cannot carve.
    pub fn validate(&self) -> Result<(), MazeError> {
        if valid_dimensions(self.width, self.height) {
            Ok(())
        } else {
            Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_defaults_when_fields_missing() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"width": 7, "height": 9}"#).unwrap();
        assert_eq!(cfg, MazeConfig::new(7, 9));
        let json = serde_json::to_string(&cfg.clone().with_seed(3)).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, Some(3));
    }
}
