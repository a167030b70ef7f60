use crate::coordinate::{self, Coordinate, MAX_COORDINATE};
use rand::Rng;
use std::fmt;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    pub fn from_signed(x: i32, y: i32) -> Self {
        Self {
            x: coordinate::from_signed(x),
            y: coordinate::from_signed(y),
        }
    }

    pub fn to_signed(&self) -> (i32, i32) {
        (coordinate::to_signed(self.x), coordinate::to_signed(self.y))
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Largest per-axis difference between the two points.
    pub fn chebyshev_distance(&self, other: &Point) -> Coordinate {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x.abs_diff(other.x) as f64;
        let dy = self.y.abs_diff(other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle with inclusive bounds on both axes.
///
/// Callers must keep `x0 <= x1` and `y0 <= y1`; this is checked in debug builds
/// only. Because bounds are inclusive, a region never wraps and a single-point
/// region (`x0 == x1`, `y0 == y1`) is valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Region {
    pub x0: Coordinate,
    pub y0: Coordinate,
    pub x1: Coordinate,
    pub y1: Coordinate,
}

impl Region {
    pub fn new(x0: Coordinate, y0: Coordinate, x1: Coordinate, y1: Coordinate) -> Self {
        debug_assert!(
            x0 <= x1 && y0 <= y1,
            "inverted region ({}, {}) - ({}, {})",
            x0,
            y0,
            x1,
            y1
        );
        Self { x0, y0, x1, y1 }
    }

    pub const fn full() -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: MAX_COORDINATE,
            y1: MAX_COORDINATE,
        }
    }

    pub fn point(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    /// Smallest region holding both corners, in any order.
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x0: a.x.min(b.x),
            y0: a.y.min(b.y),
            x1: a.x.max(b.x),
            y1: a.y.max(b.y),
        }
    }

    /// Square of side `2 * half_extent + 1` centred on `center`, clipped to the coordinate range.
    pub fn around(center: Point, half_extent: Coordinate) -> Self {
        Self {
            x0: center.x.saturating_sub(half_extent),
            y0: center.y.saturating_sub(half_extent),
            x1: center.x.saturating_add(half_extent),
            y1: center.y.saturating_add(half_extent),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    pub fn width(&self) -> Coordinate {
        self.x1 - self.x0
    }

    pub fn height(&self) -> Coordinate {
        self.y1 - self.y0
    }

    pub fn min(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    pub fn max(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Split coordinates: the low half of an axis is `[lo, mid]`, the high half `[mid + 1, hi]`.
    #[inline(always)]
    pub fn center(&self) -> Point {
        Point::new(
            self.x0 + (self.x1 - self.x0) / 2,
            self.y0 + (self.y1 - self.y0) / 2,
        )
    }

    /// A region spanning a single coordinate on either axis cannot be split further.
    pub fn is_divisible(&self) -> bool {
        self.x0 < self.x1 && self.y0 < self.y1
    }

    #[inline(always)]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    pub fn contains_region(&self, other: &Region) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }

    #[inline(always)]
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    pub fn expand_to_include(&mut self, point: Point) {
        self.x0 = self.x0.min(point.x);
        self.y0 = self.y0.min(point.y);
        self.x1 = self.x1.max(point.x);
        self.y1 = self.y1.max(point.y);
    }

    pub fn expand_to_include_region(&mut self, other: &Region) {
        self.x0 = self.x0.min(other.x0);
        self.y0 = self.y0.min(other.y0);
        self.x1 = self.x1.max(other.x1);
        self.y1 = self.y1.max(other.y1);
    }

    /// Grow every side by `amount`, saturating at the edges of the coordinate range.
    pub fn expand(&mut self, amount: Coordinate) {
        self.x0 = self.x0.saturating_sub(amount);
        self.y0 = self.y0.saturating_sub(amount);
        self.x1 = self.x1.saturating_add(amount);
        self.y1 = self.y1.saturating_add(amount);
    }

    /// Quadrant index of `point`: bit 0 set for the high x half, bit 1 for the high y half.
    #[inline(always)]
    pub fn quadrant_of(&self, point: Point) -> usize {
        let center = self.center();
        ((point.x > center.x) as usize) | (((point.y > center.y) as usize) << 1)
    }

    pub fn quadrant(&self, index: usize) -> Region {
        debug_assert!(index < 4);
        let center = self.center();
        let (x0, x1) = if index & 1 == 0 {
            (self.x0, center.x)
        } else {
            (center.x + 1, self.x1)
        };
        let (y0, y1) = if index & 2 == 0 {
            (self.y0, center.y)
        } else {
            (center.y + 1, self.y1)
        };
        Region { x0, y0, x1, y1 }
    }

    pub fn split(&self) -> [Region; 4] {
        [
            self.quadrant(0),
            self.quadrant(1),
            self.quadrant(2),
            self.quadrant(3),
        ]
    }

    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.gen_range(self.x0..=self.x1),
            rng.gen_range(self.y0..=self.y1),
        )
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] - [{}, {}]", self.x0, self.y0, self.x1, self.y1)
    }
}
