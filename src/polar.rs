//! Polar offsets and the angle-sign convention shared by every rotation in the crate.
//!
//! Angles are in degrees and grow *clockwise* as seen on the device: the angle is
//! negated before the usual counter-clockwise `cos`/`sin`, which compensates for the
//! y-axis flip applied when a [`Frame`](crate::frame::Frame) projects to device space.

use crate::float_types::{PI, Real};
use nalgebra::{Matrix2, Vector2};

/// Local cartesian offset of the polar pair (`radius`, `angle_deg`).
#[inline]
pub fn offset(radius: Real, angle_deg: Real) -> Vector2<Real> {
    let phi = -angle_deg * PI / 180.0;
    let (sin, cos) = phi.sin_cos();
    Vector2::new(radius * cos, radius * sin)
}

/// Rotation by `angle_deg` under the same convention as [`offset`].
///
/// The first column is `offset(1, angle_deg)`, so a frame rotated by `a` sees its
/// local x axis exactly where an unrotated frame sees polar angle `a`.
#[inline]
pub fn rotation(angle_deg: Real) -> Matrix2<Real> {
    let u = offset(1.0, angle_deg);
    Matrix2::new(
        u.x, -u.y, //
        u.y, u.x,
    )
}

/// A (radius, angle in degrees) pair relative to some origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub radius: Real,
    pub angle: Real,
}

impl Polar {
    pub const fn new(radius: Real, angle: Real) -> Self {
        Self { radius, angle }
    }
}

impl From<Polar> for Vector2<Real> {
    #[inline]
    fn from(p: Polar) -> Self {
        offset(p.radius, p.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::tolerance;

    fn close(a: Vector2<Real>, b: Vector2<Real>) -> bool {
        (a - b).norm() < tolerance()
    }

    #[test]
    fn zero_angle_lies_on_x_axis() {
        assert!(close(offset(10.0, 0.0), Vector2::new(10.0, 0.0)));
    }

    #[test]
    fn positive_angle_turns_toward_negative_y() {
        // negative cartesian y becomes positive device y after the flip: clockwise on screen
        assert!(close(offset(10.0, 90.0), Vector2::new(0.0, -10.0)));
        assert!(close(offset(2.0, -90.0), Vector2::new(0.0, 2.0)));
        assert!(close(offset(1.0, 180.0), Vector2::new(-1.0, 0.0)));
    }

    #[test]
    fn radius_scales_linearly() {
        for angle in [0.0, 30.0, 137.5, -210.0] {
            assert!(close(offset(3.0, angle), offset(1.0, angle) * 3.0));
        }
    }

    #[test]
    fn rotation_first_column_matches_offset() {
        for angle in [-270.0, -55.0, 0.0, 12.5, 90.0, 125.0, 359.0] {
            let r = rotation(angle);
            assert!(close(r.column(0).into_owned(), offset(1.0, angle)));
        }
    }

    #[test]
    fn rotation_is_proper() {
        for angle in [-125.0, 0.0, 33.0, 210.0] {
            let r = rotation(angle);
            assert!((r.determinant() - 1.0).abs() < tolerance());
            let should_be_identity = r.transpose() * r;
            assert!((should_be_identity - Matrix2::identity()).norm() < tolerance());
        }
    }

    #[test]
    fn rotations_compose_additively() {
        let composed = rotation(40.0) * rotation(-15.0);
        assert!((composed - rotation(25.0)).norm() < tolerance());
    }

    #[test]
    fn polar_converts_through_offset() {
        let v: Vector2<Real> = Polar::new(10.0, 150.0).into();
        assert!(close(v, offset(10.0, 150.0)));
    }
}
