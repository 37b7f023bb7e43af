//! Terminal rendering.
//!
//! The plain form is [`Grid`]'s `Display`. The colored form prints the same
//! characters wrapped in ANSI styling so the solution stands out.

use crossterm::style::{StyledContent, Stylize};
use labyrinth_core::{CellState, Grid};

fn styled(state: CellState) -> StyledContent<char> {
    let ch = state.to_char();
    match state {
        CellState::Wall => ch.dark_grey(),
        CellState::Path => ch.grey(),
        CellState::Start => ch.green().bold(),
        CellState::End => ch.red().bold(),
        CellState::SolutionMark => ch.yellow().bold(),
    }
}

/// Render the grid, colored when `color` is set.
pub fn render(grid: &Grid, color: bool) -> String {
    if !color {
        return grid.render();
    }
    let mut out = String::with_capacity(grid.len() * 12);
    for row in grid.rows() {
        for &c in row {
            out.push_str(&format!("{} ", styled(c)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop `ESC [ ... m` sequences.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    const SOLVED: &str = "\
# S # # #
# * * * #
# # # * #
# . . * #
# # # E #";

    #[test]
    fn plain_matches_display() {
        let grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(render(&grid, false), grid.to_string());
    }

    #[test]
    fn colored_keeps_characters() {
        let grid: Grid = SOLVED.parse().unwrap();
        assert_eq!(strip_ansi(&render(&grid, true)), grid.render());
    }
}
