//! [`Canvas`] backend producing SVG documents with the [`svg`](::svg) crate.

use super::IoError;
use crate::canvas::Canvas;
use ::svg::Document;
use ::svg::Node;
use ::svg::node::element::{Circle, Group, Line, Polyline, Rectangle, Text};
use std::io::Write;
use std::path::Path;

/// Accumulates drawing commands into an SVG [`Document`].
///
/// Groups opened with [`Canvas::begin_group`] are kept on a stack and attached to
/// their parent when closed.
#[derive(Debug)]
pub struct SvgCanvas {
    document: Document,
    groups: Vec<Group>,
}

impl SvgCanvas {
    /// Starts a `width` x `height` document.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            document: Document::new().set("width", width).set("height", height),
            groups: Vec::new(),
        }
    }

    /// Number of groups currently open.
    pub fn depth(&self) -> usize {
        self.groups.len()
    }

    fn push<T>(&mut self, node: T)
    where
        T: Into<Box<dyn Node>>,
    {
        match self.groups.last_mut() {
            Some(group) => group.append(node),
            None => self.document.append(node),
        }
    }

    /// Closes any group left open and returns the document.
    pub fn finish(mut self) -> Document {
        if !self.groups.is_empty() {
            log::warn!("closing {} unterminated group(s)", self.groups.len());
        }
        while let Some(group) = self.groups.pop() {
            self.push(group);
        }
        self.document
    }

    /// Serializes the finished document.
    pub fn to_svg_string(self) -> String {
        self.finish().to_string()
    }

    /// Writes the finished document to `path`.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), IoError> {
        ::svg::save(path, &self.finish())?;
        Ok(())
    }

    /// Writes the finished document to `target`.
    pub fn write_to<W: Write>(self, target: W) -> Result<(), IoError> {
        ::svg::write(target, &self.finish())?;
        Ok(())
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.push(
            Line::new()
                .set("x1", x1)
                .set("y1", y1)
                .set("x2", x2)
                .set("y2", y2),
        );
    }

    fn circle(&mut self, cx: i32, cy: i32, radius: i32, style: &str) {
        self.push(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", radius)
                .set("style", style),
        );
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: &str) {
        self.push(Text::new(text).set("x", x).set("y", y).set("style", style));
    }

    fn polyline(&mut self, xs: &[i32], ys: &[i32]) {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| format!("{x},{y}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.push(Polyline::new().set("points", points));
    }

    fn rounded_rect(&mut self, x: i32, y: i32, width: i32, height: i32, rx: i32, ry: i32, style: &str) {
        self.push(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", width)
                .set("height", height)
                .set("rx", rx)
                .set("ry", ry)
                .set("style", style),
        );
    }

    fn begin_group(&mut self, style: &str) {
        self.groups.push(Group::new().set("style", style));
    }

    fn end_group(&mut self) {
        match self.groups.pop() {
            Some(group) => self.push(group),
            None => log::warn!("end_group called with no open group"),
        }
    }
}
