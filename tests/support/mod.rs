//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use kinframe::{Canvas, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Deterministic sample values covering zero, both signs, fractions and large magnitudes.
pub const SAMPLES: [Real; 9] = [0.0, 1.0, -1.0, 0.5, -2.5, 10.0, -37.25, 123.456, -600.0];

/// Deterministic sample angles in degrees.
pub const ANGLES: [Real; 10] = [0.0, 30.0, -45.0, 55.0, 90.0, -125.0, 180.0, 210.0, 359.5, -720.0];

/// One recorded call on a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line(i32, i32, i32, i32),
    Circle { cx: i32, cy: i32, r: i32, style: String },
    Text { x: i32, y: i32, text: String, style: String },
    Polyline(Vec<(i32, i32)>),
    RoundedRect { x: i32, y: i32, w: i32, h: i32, rx: i32, ry: i32, style: String },
    BeginGroup(String),
    EndGroup,
}

/// A [`Canvas`] that keeps every command in order, for assertions.
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polylines(&self) -> Vec<&[(i32, i32)]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline(points) => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<(i32, i32, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(i32, i32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { cx, cy, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::Line(x1, y1, x2, y2));
    }

    fn circle(&mut self, cx: i32, cy: i32, radius: i32, style: &str) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            r: radius,
            style: style.to_owned(),
        });
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_owned(),
            style: style.to_owned(),
        });
    }

    fn polyline(&mut self, xs: &[i32], ys: &[i32]) {
        let points = xs.iter().copied().zip(ys.iter().copied()).collect();
        self.commands.push(DrawCommand::Polyline(points));
    }

    fn rounded_rect(&mut self, x: i32, y: i32, w: i32, h: i32, rx: i32, ry: i32, style: &str) {
        self.commands.push(DrawCommand::RoundedRect {
            x,
            y,
            w,
            h,
            rx,
            ry,
            style: style.to_owned(),
        });
    }

    fn begin_group(&mut self, style: &str) {
        self.commands.push(DrawCommand::BeginGroup(style.to_owned()));
    }

    fn end_group(&mut self) {
        self.commands.push(DrawCommand::EndGroup);
    }
}
