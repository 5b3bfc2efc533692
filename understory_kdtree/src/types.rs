// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::ops::Add;

/// A point the tree can split on.
///
/// Dimensionality is a compile-time constant. The tree splits on axis
/// `depth % DIM`, so implementors only need to expose their coordinates by index.
pub trait KdPoint: Copy + PartialEq + Debug {
    /// Coordinate type shared by all axes.
    type Scalar: Copy + PartialOrd + Debug;

    /// Number of axes.
    const DIM: usize;

    /// Coordinate on `axis`. Callers only pass `axis < DIM`.
    fn coord(&self, axis: usize) -> Self::Scalar;
}

/// A point in the plane.
///
/// Equality is structural and the derived ordering is lexicographic by `(x, y)`.
/// The tree itself never relies on that ordering; it only compares one axis at a time.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2D<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a point from its coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Debug> Debug for Point2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point2D").field(&self.x).field(&self.y).finish()
    }
}

impl<T> From<(T, T)> for Point2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: Copy + PartialOrd + Debug> KdPoint for Point2D<T> {
    type Scalar = T;

    const DIM: usize = 2;

    #[inline]
    fn coord(&self, axis: usize) -> T {
        debug_assert!(axis < Self::DIM, "axis {axis} out of range for a 2D point");
        if axis == 0 { self.x } else { self.y }
    }
}

/// Axis-aligned rectangle given by its `lower` and `upper` corners.
///
/// The corners are expected to satisfy `lower <= upper` on every axis, but this is
/// not checked. An inverted rectangle is used literally by [`Rect::contains`] and by
/// range pruning, which usually means it matches nothing. Use
/// [`Rect::is_well_formed`] if you need to check.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect<P> {
    /// Corner with the smallest coordinates.
    pub lower: P,
    /// Corner with the largest coordinates.
    pub upper: P,
}

impl<P> Rect<P> {
    /// Create a rectangle from its corners.
    pub const fn new(lower: P, upper: P) -> Self {
        Self { lower, upper }
    }
}

impl<P: Debug> Debug for Rect<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rect")
            .field(&self.lower)
            .field(&self.upper)
            .finish()
    }
}

impl<P: KdPoint> Rect<P> {
    /// Whether `point` lies inside the rectangle. Both corners are inclusive.
    pub fn contains(&self, point: P) -> bool {
        (0..P::DIM).all(|axis| {
            let v = point.coord(axis);
            le(self.lower.coord(axis), v) && le(v, self.upper.coord(axis))
        })
    }

    /// Whether `lower <= upper` holds on every axis. Assumes no NaN.
    pub fn is_well_formed(&self) -> bool {
        (0..P::DIM).all(|axis| le(self.lower.coord(axis), self.upper.coord(axis)))
    }
}

impl<T> Rect<Point2D<T>> {
    /// Create a planar rectangle from corner coordinates.
    pub const fn from_coords(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            lower: Point2D::new(min_x, min_y),
            upper: Point2D::new(max_x, max_y),
        }
    }
}

impl<T: Copy + Add<Output = T>> Rect<Point2D<T>> {
    /// Create a planar rectangle from its lower corner and size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self::from_coords(x, y, x + w, y + h)
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Point> for Point2D<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(feature = "kurbo")]
impl From<Point2D<f64>> for kurbo::Point {
    fn from(p: Point2D<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect<Point2D<f64>> {
    /// Maps `(x0, y0)` to `lower` and `(x1, y1)` to `upper` without normalizing.
    fn from(r: kurbo::Rect) -> Self {
        Self::from_coords(r.x0, r.y0, r.x1, r.y1)
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
