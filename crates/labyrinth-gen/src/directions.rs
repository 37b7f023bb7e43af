//! Cardinal directions and the order in which the carver tries them.

use labyrinth_core::Point;
use rand::Rng;
use rand::seq::SliceRandom;

/// One of the four cardinal directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, clockwise from up.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }
}

/// Chooses the order in which a cell's four directions are tried.
pub trait DirectionOrder {
    /// Return the four directions in the order the carver should try them.
    fn order(&self, rng: &mut impl Rng) -> [Direction; 4];
}

/// Uniformly random order, drawn fresh for every cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffledDirections;

impl DirectionOrder for ShuffledDirections {
    fn order(&self, rng: &mut impl Rng) -> [Direction; 4] {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        dirs
    }
}

/// The same order for every cell. Ignores the random source.
#[derive(Debug, Clone, Copy)]
pub struct FixedDirections(pub [Direction; 4]);

impl Default for FixedDirections {
    fn default() -> Self {
        Self(Direction::ALL)
    }
}

impl DirectionOrder for FixedDirections {
    fn order(&self, _rng: &mut impl Rng) -> [Direction; 4] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deltas_are_unit_steps() {
        for d in Direction::ALL {
            let p = d.delta();
            assert_eq!(p.x.abs() + p.y.abs(), 1);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut dirs = ShuffledDirections.order(&mut rng).to_vec();
            dirs.sort_by_key(|d| Direction::ALL.iter().position(|a| a == d));
            assert_eq!(dirs, Direction::ALL.to_vec());
        }
    }

    #[test]
    fn shuffle_reaches_every_first_direction() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let first = ShuffledDirections.order(&mut rng)[0];
            seen[Direction::ALL.iter().position(|&d| d == first).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn fixed_order_is_constant() {
        let mut rng = StdRng::seed_from_u64(0);
        let order = FixedDirections([
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Up,
        ]);
        assert_eq!(order.order(&mut rng), order.order(&mut rng));
        assert_eq!(FixedDirections::default().order(&mut rng), Direction::ALL);
    }
}
