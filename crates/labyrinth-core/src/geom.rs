//! Cell addresses and grid bounds.
//!
//! A [`Point`] addresses one maze cell as (column, row). A [`Range`] is the
//! half-open rectangle a grid covers; walking it yields points in the same
//! row-major order the grid stores its cells in.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A cell address. `x` is the column and grows right, `y` is the row and
/// grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Orthogonal neighbours, clockwise from the one above.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        let Point { x, y } = self;
        [
            Point::new(x, y - 1),
            Point::new(x + 1, y),
            Point::new(x, y + 1),
            Point::new(x - 1, y),
        ]
    }

    /// The cell halfway to `other`. Between two lattice cells two steps
    /// apart this is the wall cell that carving knocks out.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        (self + other) / 2
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major, matching vertex ids.
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, k: i32) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl Div<i32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, k: i32) -> Point {
        Point::new(self.x / k, self.y / k)
    }
}

/// Half-open rectangle: `min` is inside, `max` is one past the last column
/// and row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Bounds of a `width` x `height` grid anchored at the origin.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            min: Point::default(),
            max: Point::new(width.max(0), height.max(0)),
        }
    }

    /// Width as `x`, height as `y`.
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.size().x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.size().y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Whether `p` is inside and touches an edge of the rectangle.
    #[inline]
    pub fn on_border(self, p: Point) -> bool {
        let last = self.max - Point::new(1, 1);
        self.contains(p) && (p.x == self.min.x || p.y == self.min.y || p.x == last.x || p.y == last.y)
    }

    /// Every point of the range in row-major order.
    pub fn iter(self) -> RangeIter {
        let cols = self.width().max(0) as usize;
        let rows = self.height().max(0) as usize;
        RangeIter {
            origin: self.min,
            cols,
            next: 0,
            end: cols * rows,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major walk over a [`Range`], driven by a flat cell counter.
#[derive(Clone, Debug)]
pub struct RangeIter {
    origin: Point,
    cols: usize,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        let offset = Point::new((i % self.cols) as i32, (i / self.cols) as i32);
        Some(self.origin + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3, 5);
        let b = Point::new(1, 1);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(a - b, Point::new(2, 4));
        assert_eq!(b * 2, Point::new(2, 2));
        assert_eq!(Point::new(6, 4) / 2, Point::new(3, 2));
    }

    #[test]
    fn midpoint_is_the_wall_between_lattice_cells() {
        assert_eq!(Point::new(1, 1).midpoint(Point::new(3, 1)), Point::new(2, 1));
        assert_eq!(Point::new(3, 3).midpoint(Point::new(3, 1)), Point::new(3, 2));
        assert_eq!(Point::new(3, 1).midpoint(Point::new(1, 1)), Point::new(2, 1));
    }

    #[test]
    fn neighbors_clockwise_from_up() {
        assert_eq!(
            Point::new(2, 2).neighbors_4(),
            [
                Point::new(2, 1),
                Point::new(3, 2),
                Point::new(2, 3),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn points_sort_like_vertex_ids() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 2), Point::new(1, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(2, 1), Point::new(0, 2)]);
    }

    #[test]
    fn range_size_and_contains() {
        let r = Range::with_size(5, 7);
        assert_eq!(r.min, Point::new(0, 0));
        assert_eq!(r.size(), Point::new(5, 7));
        assert!(r.contains(Point::new(4, 6)));
        assert!(!r.contains(Point::new(5, 6)));
        assert!(!r.contains(Point::new(0, -1)));
        assert_eq!(Range::with_size(-3, 2).iter().len(), 0);
    }

    #[test]
    fn border_detection() {
        let r = Range::with_size(5, 5);
        assert!(r.on_border(Point::new(0, 2)));
        assert!(r.on_border(Point::new(3, 4)));
        assert!(!r.on_border(Point::new(2, 2)));
        assert!(!r.on_border(Point::new(5, 0)));
    }

    #[test]
    fn iter_row_major() {
        let mut it = Range::with_size(3, 2).iter();
        assert_eq!(it.len(), 6);
        assert_eq!(it.next(), Some(Point::new(0, 0)));
        assert_eq!(it.len(), 5);
        let rest: Vec<_> = it.collect();
        assert_eq!(rest[1], Point::new(2, 0));
        assert_eq!(rest[2], Point::new(0, 1));
        assert_eq!(rest.last(), Some(&Point::new(2, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
