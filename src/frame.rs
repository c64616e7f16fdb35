//! Immutable 2D coordinate frames.
//!
//! A [`Frame`] maps local coordinates into its parent space (ultimately the device)
//! with a rotation-only linear part and an origin offset:
//!
//! ```text
//! parent = origin + linear * local
//! ```
//!
//! Frames are derived from one another by value. Every derivation returns a new
//! frame, so a diagram script can keep a root frame around and branch off rotated
//! or translated children without any shared state.
//!
//! # Example
//! ```
//! use kinframe::frame::Frame;
//! use nalgebra::Point2;
//!
//! let root = Frame::identity().translate(300.0, -200.0);
//! let rail = root.translate(-50.0, 0.0).rotate(-55.0);
//!
//! assert_eq!(root.point(0.0, 0.0), Point2::new(300, 200));
//! assert_eq!(rail.point(0.0, 0.0), Point2::new(250, 200));
//! ```

use crate::float_types::{Real, tolerance};
use crate::polar::{Polar, rotation};
use nalgebra::{Matrix2, Point2, Vector2};
use std::fmt;

/// An affine map from a local 2D space into its parent space.
///
/// The columns of `linear` are the local basis vectors expressed in parent units.
/// Frames reachable from [`Frame::identity`] through [`Frame::translate`] and
/// [`Frame::rotate`] always have an orthonormal linear part with determinant +1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    origin: Vector2<Real>,
    linear: Matrix2<Real>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity()
    }
}

impl Frame {
    /// The root frame: origin at (0, 0), identity linear part.
    pub fn identity() -> Self {
        Self {
            origin: Vector2::zeros(),
            linear: Matrix2::identity(),
        }
    }

    /// Origin of this frame in parent units.
    pub const fn origin(&self) -> Vector2<Real> {
        self.origin
    }

    /// Linear part of this frame; its columns are the local basis vectors.
    pub const fn linear(&self) -> Matrix2<Real> {
        self.linear
    }

    /// Returns a frame whose origin is moved `dx` along the local first basis vector
    /// and `dy` along the local second one.
    ///
    /// The offset is expressed in this frame's own (possibly rotated) basis, so
    /// `rail.translate(30.0, 0.0)` walks 30 units along whatever direction `rail`
    /// points in.
    #[must_use]
    pub fn translate(&self, dx: Real, dy: Real) -> Self {
        Self {
            origin: self.origin + self.linear * Vector2::new(dx, dy),
            linear: self.linear,
        }
    }

    /// Returns a frame sharing this origin, rotated by `angle_deg`.
    ///
    /// Positive angles turn clockwise on the device, matching
    /// [`polar::offset`](crate::polar::offset).
    #[must_use]
    pub fn rotate(&self, angle_deg: Real) -> Self {
        Self {
            origin: self.origin,
            linear: rotation(angle_deg) * self.linear,
        }
    }

    /// Maps a local point into parent space without rounding or flipping.
    pub fn local_to_parent(&self, x: Real, y: Real) -> Point2<Real> {
        Point2::from(self.origin + self.linear * Vector2::new(x, y))
    }

    /// Projects a local point to integer device coordinates.
    ///
    /// Each axis is rounded half away from zero in parent space, then the y axis is
    /// negated because device y grows downward. Non-finite values are not reported:
    /// NaN lands on 0 and infinities saturate to the `i32` range.
    pub fn point(&self, x: Real, y: Real) -> Point2<i32> {
        let p = self.local_to_parent(x, y);
        Point2::new(p.x.round() as i32, (-p.y.round()) as i32)
    }

    /// Projects the local polar offset (`radius`, `angle_deg`) to device coordinates.
    pub fn polar(&self, radius: Real, angle_deg: Real) -> Point2<i32> {
        self.project_polar(Polar::new(radius, angle_deg))
    }

    /// Projects a local [`Polar`] offset to device coordinates.
    pub fn project_polar(&self, p: Polar) -> Point2<i32> {
        let v = Vector2::from(p);
        self.point(v.x, v.y)
    }

    /// Whether the basis columns are unit length, perpendicular and right-handed,
    /// within [`tolerance`].
    pub fn is_orthonormal(&self) -> bool {
        let eps = tolerance();
        let c0 = self.linear.column(0);
        let c1 = self.linear.column(1);
        (c0.norm() - 1.0).abs() < eps
            && (c1.norm() - 1.0).abs() < eps
            && c0.dot(&c1).abs() < eps
            && (self.linear.determinant() - 1.0).abs() < eps
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.linear;
        write!(
            f,
            "<x=(+{:.3} +{:.3} +{:.3}) y=(+{:.3} +{:.3} +{:.3})>",
            m[(0, 0)],
            m[(0, 1)],
            self.origin.x,
            m[(1, 0)],
            m[(1, 1)],
            self.origin.y,
        )
    }
}
