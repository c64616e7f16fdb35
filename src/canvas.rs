//! Drawing surface trait.
//!
//! Diagram code projects its geometry through a [`Frame`](crate::frame::Frame) and
//! hands the resulting device coordinates to a [`Canvas`]. Implement this trait to
//! draw to your target (SVG, a test recorder, a raster backend, ...).
//!
//! # Coordinate System
//!
//! All coordinates are integer device coordinates:
//! - Origin at top-left
//! - X increases rightward
//! - Y increases downward

/// Sequential sink for drawing commands.
///
/// Style strings are passed through untouched; their syntax belongs to the backend
/// (CSS declarations for SVG).
pub trait Canvas {
    /// Draw a straight segment from (x1, y1) to (x2, y2).
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Draw a circle centred on (cx, cy).
    fn circle(&mut self, cx: i32, cy: i32, radius: i32, style: &str);

    /// Draw `text` anchored at (x, y).
    fn text(&mut self, x: i32, y: i32, text: &str, style: &str);

    /// Draw an open polyline through the points `(xs[i], ys[i])`.
    ///
    /// Extra entries in the longer slice are ignored.
    fn polyline(&mut self, xs: &[i32], ys: &[i32]);

    /// Draw a rectangle with rounded corners.
    #[allow(clippy::too_many_arguments)]
    fn rounded_rect(&mut self, x: i32, y: i32, width: i32, height: i32, rx: i32, ry: i32, style: &str);

    /// Open a group; everything drawn until the matching [`Canvas::end_group`]
    /// inherits `style`.
    fn begin_group(&mut self, style: &str);

    /// Close the innermost open group.
    fn end_group(&mut self);

    /// Draw whatever `draw` emits inside a group styled with `style`.
    fn group<F>(&mut self, style: &str, draw: F)
    where
        Self: Sized,
        F: FnOnce(&mut Self),
    {
        self.begin_group(style);
        draw(self);
        self.end_group();
    }
}
