//! Scalar type and numeric tolerance for frame geometry.

#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Archimedes' constant (π) at `Real` precision.
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π) at `Real` precision.
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

#[cfg(feature = "f32")]
const DEFAULT_TOLERANCE: Real = 1e-4;
#[cfg(feature = "f64")]
const DEFAULT_TOLERANCE: Real = 1e-6;

/// Tolerance for approximate geometric checks such as [`Frame::is_orthonormal`].
///
/// `KINFRAME_TOLERANCE`, when set at build time and parseable as `Real`, replaces the
/// precision-dependent default. It never drops below `Real::EPSILON`.
///
/// [`Frame::is_orthonormal`]: crate::frame::Frame::is_orthonormal
pub fn tolerance() -> Real {
    option_env!("KINFRAME_TOLERANCE")
        .and_then(|raw| raw.parse::<Real>().ok())
        .map_or(DEFAULT_TOLERANCE, |value| value.max(Real::EPSILON))
}
