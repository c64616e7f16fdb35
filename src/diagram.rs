//! The inverse-kinematics linkage schematic.
//!
//! Two cross-rails pivot on the X axis at `x1` and `x2` and meet above it at the
//! platform point `P`. The picture labels the pivots, the platform intercepts
//! `Px`/`Py`, the platform height `h` and the pivot offsets `b1`/`b2`.

use crate::arrow::arrow_head;
use crate::canvas::Canvas;
use crate::float_types::Real;
use crate::frame::Frame;
use crate::style::{BACKGROUND, GUIDE, JOINT, MECHANISM, text_style};
use nalgebra::{Point2, point};

/// Page geometry of the diagram.
///
/// Sizes are unsigned, but device coordinates are `i32`: values beyond
/// [`DiagramConfig::MAX_EXTENT`] are clamped to it when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagramConfig {
    pub width: u32,
    pub height: u32,
    /// Corner radius of the background rectangle.
    pub corner_radius: u32,
}

impl DiagramConfig {
    /// Largest size representable in device coordinates.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    fn device(value: u32) -> i32 {
        i32::try_from(value).unwrap_or(i32::MAX)
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            corner_radius: 15,
        }
    }
}

/// Draws the linkage schematic onto `c`, centred on the page described by `config`.
pub fn inverse_kinematics<C: Canvas>(c: &mut C, config: &DiagramConfig) {
    let width = DiagramConfig::device(config.width);
    let height = DiagramConfig::device(config.height);
    let corner = DiagramConfig::device(config.corner_radius);
    c.rounded_rect(0, 0, width, height, corner, corner, BACKGROUND);

    let e0 = Frame::identity();
    log::debug!("e0={e0}");

    let org = e0.translate(width as Real / 2.0, -(height as Real) / 2.0);
    log::debug!("org={org}");

    let label = text_style("middle");

    c.group(GUIDE, |c| axes(c, &org, &label));
    c.group(MECHANISM, |c| platform(c, &org, &label));
    c.group(MECHANISM, |c| rails(c, &org, &label));
    c.group(MECHANISM, |c| dimensions(c, &org, &label));
}

fn line<C: Canvas>(c: &mut C, f: &Frame, from: Point2<Real>, to: Point2<Real>) {
    let a = f.point(from.x, from.y);
    let b = f.point(to.x, to.y);
    c.line(a.x, a.y, b.x, b.y);
}

fn text<C: Canvas>(c: &mut C, f: &Frame, at: Point2<Real>, s: &str, style: &str) {
    let p = f.point(at.x, at.y);
    c.text(p.x, p.y, s, style);
}

fn joint<C: Canvas>(c: &mut C, f: &Frame, at: Point2<Real>) {
    let p = f.point(at.x, at.y);
    c.circle(p.x, p.y, 5, JOINT);
}

fn axes<C: Canvas>(c: &mut C, org: &Frame, label: &str) {
    line(c, org, point![-280.0, 0.0], point![280.0, 0.0]);
    arrow_head(c, &org.translate(280.0, 0.0), 0.0);
    text(c, org, point![270.0, 15.0], "X", label);

    line(c, org, point![0.0, -180.0], point![0.0, 180.0]);
    arrow_head(c, &org.translate(0.0, 180.0), -90.0);
    text(c, org, point![15.0, 180.0], "Y", label);
}

fn platform<C: Canvas>(c: &mut C, org: &Frame, label: &str) {
    let u = org.translate(30.0, 0.0);
    line(c, &u, point![0.0, -10.0], point![0.0, 10.0]);
    text(c, &u, point![0.0, -25.0], "Px", label);

    let u = org.translate(0.0, 114.0);
    line(c, &u, point![-10.0, 0.0], point![10.0, 0.0]);
    text(c, &u, point![-25.0, 0.0], "Py", label);

    joint(c, org, point![30.0, 114.0]);
    text(c, org, point![50.0, 115.0], "P", label);
}

fn rails<C: Canvas>(c: &mut C, org: &Frame, label: &str) {
    let u = org.translate(-50.0, 0.0).rotate(-55.0);
    log::debug!("rail 1={u}");
    line(c, &u, point![-180.0, 0.0], point![180.0, 0.0]);
    joint(c, &u, point![0.0, 0.0]);
    text(c, org, point![-65.0, 15.0], "x1", label);
    text(c, org, point![-105.0, -120.0], "R1", label);

    let v = org.translate(110.0, 0.0).rotate(-125.0);
    log::debug!("rail 2={v}");
    line(c, &v, point![-180.0, 0.0], point![180.0, 0.0]);
    joint(c, &v, point![0.0, 0.0]);
    text(c, org, point![125.0, 15.0], "x2", label);
    text(c, org, point![165.0, -120.0], "R2", label);
}

fn dimensions<C: Canvas>(c: &mut C, org: &Frame, label: &str) {
    line(c, org, point![30.0, 15.0], point![30.0, 105.0]);
    text(c, org, point![40.0, 55.0], "h", label);

    line(c, org, point![-40.0, 0.0], point![25.0, 0.0]);
    text(c, org, point![-10.0, 15.0], "b1", label);

    line(c, org, point![35.0, 0.0], point![100.0, 0.0]);
    text(c, org, point![60.0, 15.0], "b2", label);
}
