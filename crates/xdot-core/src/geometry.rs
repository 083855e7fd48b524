//! Geometric primitives for xdot scenes.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in scene space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Transform`] - The affine mapping from layout coordinates to scene coordinates
//!
//! # Coordinate System
//!
//! Scenes use a coordinate system consistent with SVG and screen surfaces:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Layout engines emit coordinates with the origin at the bottom-left and the
//! Y axis growing upward. [`Transform`] converts between the two once the
//! graph bounding box is known.

/// A 2D point in scene coordinate space.
///
/// # Examples
///
/// ```
/// # use xdot_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(13.0, 24.0);
///
/// assert_eq!(p1.distance_squared(p2), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point's coordinates to this point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point's coordinates from this point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Returns the squared euclidean distance between two points.
    ///
    /// Hit-testing compares squared distances against a squared radius, which
    /// avoids a square root per query.
    pub fn distance_squared(self, other: Point) -> f32 {
        let delta = other.sub_point(self);
        delta.x * delta.x + delta.y * delta.y
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if either dimension is zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size.
    ///
    /// Negative sizes are folded so that the minimum coordinates never exceed
    /// the maximum ones.
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width.abs() / 2.0;
        let half_height = size.height.abs() / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if the point lies inside the bounds. Edges are inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use xdot_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_center(Point::new(10.0, 10.0), Size::new(4.0, 4.0));
    /// assert!(bounds.contains(Point::new(12.0, 8.0)));
    /// assert!(!bounds.contains(Point::new(12.1, 10.0)));
    /// ```
    pub fn contains(self, point: Point) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }
}

/// Affine mapping from layout coordinates into scene coordinates.
///
/// `apply(x, y) = ((x + x_offset) * x_scale, (y + y_offset) * y_scale)`
///
/// The default transform is the identity, which is what a graph without a
/// bounding box falls back to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    x_offset: f32,
    y_offset: f32,
    x_scale: f32,
    y_scale: f32,
}

impl Transform {
    /// Builds the transform for a layout bounding box `xmin,ymin,xmax,ymax`.
    ///
    /// The box origin is moved to the top-left corner and the Y axis is
    /// flipped so that it grows downward.
    ///
    /// # Examples
    ///
    /// ```
    /// # use xdot_core::geometry::{Point, Transform};
    /// let transform = Transform::from_bounding_box(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(transform.apply(0.0, 0.0), Point::new(0.0, 50.0));
    /// assert_eq!(transform.apply(100.0, 50.0), Point::new(100.0, 0.0));
    /// ```
    pub fn from_bounding_box(x_min: f32, _y_min: f32, _x_max: f32, y_max: f32) -> Self {
        Self {
            x_offset: -x_min,
            y_offset: -y_max,
            x_scale: 1.0,
            y_scale: -1.0,
        }
    }

    /// Maps a layout coordinate pair into scene space.
    pub fn apply(&self, x: f32, y: f32) -> Point {
        Point::new(
            (x + self.x_offset) * self.x_scale,
            (y + self.y_offset) * self.y_scale,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            x_scale: 1.0,
            y_scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance_squared() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.distance_squared(Point::new(1.0, 1.0)), 2.0);
        assert_eq!(origin.distance_squared(origin), 0.0);
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(50.0, 20.0), Size::new(54.0, 36.0));
        assert_eq!(bounds.min_x(), 23.0);
        assert_eq!(bounds.max_x(), 77.0);
        assert_eq!(bounds.min_y(), 2.0);
        assert_eq!(bounds.max_y(), 38.0);
        assert_eq!(bounds.center(), Point::new(50.0, 20.0));
        assert_eq!(bounds.width(), 54.0);
        assert_eq!(bounds.height(), 36.0);
    }

    #[test]
    fn test_bounds_contains_is_inclusive() {
        let bounds = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(2.0, 2.0));
        assert!(bounds.contains(Point::new(-1.0, -1.0)));
        assert!(bounds.contains(Point::new(1.0, 1.0)));
        assert!(!bounds.contains(Point::new(1.0, 1.01)));
    }

    #[test]
    fn test_transform_bounding_box() {
        let transform = Transform::from_bounding_box(0.0, 0.0, 100.0, 50.0);
        assert_eq!(transform.apply(0.0, 0.0), Point::new(0.0, 50.0));
        assert_eq!(transform.apply(100.0, 50.0), Point::new(100.0, 0.0));
    }

    #[test]
    fn test_transform_offset_origin() {
        let transform = Transform::from_bounding_box(10.0, 20.0, 110.0, 70.0);
        assert_eq!(transform.apply(10.0, 70.0), Point::new(0.0, 0.0));
        assert_eq!(transform.apply(110.0, 20.0), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_transform_default_is_identity() {
        let transform = Transform::default();
        assert_eq!(transform.apply(3.5, -7.0), Point::new(3.5, -7.0));
    }
}
