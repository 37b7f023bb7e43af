//! The [`CellState`] type: what occupies a single maze cell.

use std::fmt;

/// State of one maze cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Wall,
    Path,
    Start,
    End,
    SolutionMark,
}

impl CellState {
    /// Every state, in wire-format order.
    pub const ALL: [CellState; 5] = [
        CellState::Wall,
        CellState::Path,
        CellState::Start,
        CellState::End,
        CellState::SolutionMark,
    ];

    /// Whether a walker may stand on this cell. Only walls block.
    #[inline]
    pub const fn is_open(self) -> bool {
        !matches!(self, CellState::Wall)
    }

    /// Whether this cell is the entrance or the exit.
    #[inline]
    pub const fn is_opening(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }

    /// Character used by the text grid format.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Path => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::SolutionMark => '*',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellState::Wall),
            '.' => Some(CellState::Path),
            'S' => Some(CellState::Start),
            'E' => Some(CellState::End),
            '*' => Some(CellState::SolutionMark),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wall_is_closed() {
        for s in CellState::ALL {
            assert_eq!(s.is_open(), s != CellState::Wall);
        }
    }

    #[test]
    fn char_mapping_is_bijective() {
        for s in CellState::ALL {
            assert_eq!(CellState::from_char(s.to_char()), Some(s));
        }
        assert_eq!(CellState::from_char('x'), None);
    }

    #[test]
    fn default_is_wall() {
        assert_eq!(CellState::default(), CellState::Wall);
    }
}
