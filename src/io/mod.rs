//! Output backends.
//!
//! Backends are behind cargo feature-flags; currently only `svg-io`.

#[cfg(feature = "svg-io")]
pub mod svg;

/// Errors raised while writing a finished drawing.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),
}
