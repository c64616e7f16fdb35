//! Fixed-shape arrowheads.

use crate::canvas::Canvas;
use crate::float_types::Real;
use crate::frame::Frame;
use crate::polar::Polar;
use nalgebra::Point2;

/// Length of each wing, in local units.
pub const WING_LENGTH: Real = 10.0;

/// Angle between each wing and the shaft, in degrees.
pub const WING_SPREAD: Real = 30.0;

/// Wing ends relative to the tip, in a frame whose x axis is the heading.
pub const WINGS: [Polar; 2] = [
    Polar::new(WING_LENGTH, 180.0 + WING_SPREAD),
    Polar::new(WING_LENGTH, 180.0 - WING_SPREAD),
];

/// Device points of an arrowhead at `frame`'s origin pointing along `heading` degrees:
/// first wing, tip, second wing.
pub fn arrow_head_points(frame: &Frame, heading: Real) -> [Point2<i32>; 3] {
    let f = frame.rotate(heading);
    log::trace!("arrow head frame {f}");
    let [a, b] = WINGS;
    [f.project_polar(a), f.point(0.0, 0.0), f.project_polar(b)]
}

/// Draws an open arrowhead at `frame`'s origin pointing along `heading` degrees.
pub fn arrow_head<C: Canvas>(canvas: &mut C, frame: &Frame, heading: Real) {
    let [a, tip, b] = arrow_head_points(frame, heading);
    canvas.polyline(&[a.x, tip.x, b.x], &[a.y, tip.y, b.y]);
}
