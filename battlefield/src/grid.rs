use common::shapes::{Point, Region};
use common::{Coordinate, MAX_COORDINATE};
use nalgebra::Vector3;

/// A grid position. [`NULL_POINT`] marks an object that is not indexed.
pub type GridPoint = Point;

pub const NULL_POINT: GridPoint = Point::ORIGIN;

/// Maps world coordinates (metres) onto the full coordinate range.
///
/// The world origin lands on the centre of the range. The mapped span is the
/// configured extent widened by `margin` on each side, so objects slightly
/// outside the nominal extent remain representable.
#[derive(Debug, Clone)]
pub struct GridMapper {
    extent: f64,
    margin: f64,
    grid_to_global_scale: f64,
    global_to_grid_scale: f64,
    grid_offset: f64,
    hysteresis_distance: f64,
    hysteresis: Coordinate,
}

impl GridMapper {
    pub const DEFAULT_MARGIN: f64 = 0.2;

    pub fn new(extent: f64, hysteresis_distance: f64, margin: f64) -> Self {
        let max = MAX_COORDINATE as f64;
        let grid_to_global_scale = (1.0 + 2.0 * margin) * extent / max;
        let global_to_grid_scale = 1.0 / grid_to_global_scale;
        let hysteresis = (hysteresis_distance * global_to_grid_scale)
            .round()
            .clamp(0.0, max) as Coordinate;
        Self {
            extent,
            margin,
            grid_to_global_scale,
            global_to_grid_scale,
            grid_offset: max / 2.0,
            hysteresis_distance,
            hysteresis,
        }
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Metres per grid unit.
    pub fn grid_to_global_scale(&self) -> f64 {
        self.grid_to_global_scale
    }

    pub fn global_to_grid_scale(&self) -> f64 {
        self.global_to_grid_scale
    }

    pub fn hysteresis_distance(&self) -> f64 {
        self.hysteresis_distance
    }

    /// The hysteresis threshold in grid units.
    pub fn hysteresis(&self) -> Coordinate {
        self.hysteresis
    }

    #[inline]
    fn unclamped(&self, global: f64) -> f64 {
        (global * self.global_to_grid_scale + self.grid_offset).round()
    }

    /// Rounded and clamped to the coordinate range.
    pub fn global_to_grid(&self, global: f64) -> Coordinate {
        self.unclamped(global).clamp(0.0, MAX_COORDINATE as f64) as Coordinate
    }

    pub fn grid_to_global(&self, grid: Coordinate) -> f64 {
        (grid as f64 - self.grid_offset) * self.grid_to_global_scale
    }

    /// Returns [`NULL_POINT`] when either axis falls outside the mapped range.
    pub fn grid_point(&self, position: &Vector3<f64>) -> GridPoint {
        let x = self.unclamped(position.x);
        let y = self.unclamped(position.y);
        let max = MAX_COORDINATE as f64;
        if !(x >= 0.0 && x <= max && y >= 0.0 && y <= max) {
            return NULL_POINT;
        }
        Point::new(x as Coordinate, y as Coordinate)
    }

    pub fn global_position(&self, point: GridPoint) -> Vector3<f64> {
        Vector3::new(
            self.grid_to_global(point.x),
            self.grid_to_global(point.y),
            0.0,
        )
    }

    /// Grid region covering the square of half-width `radius` around a world position.
    pub fn world_region(&self, x: f64, y: f64, radius: f64) -> Region {
        Region::from_points(
            Point::new(self.global_to_grid(x - radius), self.global_to_grid(y - radius)),
            Point::new(self.global_to_grid(x + radius), self.global_to_grid(y + radius)),
        )
    }

    /// True when the move exceeds the hysteresis on either axis, or when the
    /// object enters or leaves the indexed area.
    pub fn has_moved(&self, old: GridPoint, new: GridPoint) -> bool {
        if (old == NULL_POINT) != (new == NULL_POINT) {
            return true;
        }
        old.chebyshev_distance(&new) > self.hysteresis
    }
}
