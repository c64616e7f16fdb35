//! Composable **2D coordinate frames** for scripting technical diagrams.
//!
//! Diagram code describes geometry in local frames ("a line from (-40, 0) to
//! (25, 0) in this frame") and lets a [`Frame`] take care of rotations,
//! translations and the flip from y-up cartesian space to y-down device space.
//! Projected integer coordinates are then handed to any [`Canvas`].
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: [`io::svg::SvgCanvas`], a `Canvas` writing SVG documents
//! - **cli**: the `kinframe` binary rendering the inverse-kinematics schematic
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod arrow;
pub mod canvas;
pub mod diagram;
pub mod float_types;
pub mod frame;
pub mod io;
pub mod polar;
pub mod style;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use canvas::Canvas;
pub use frame::Frame;
