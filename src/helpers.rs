//! Small numeric helpers shared by the model functions.

use std::f64::consts::PI;

use crate::config::SPEED_OF_LIGHT;


/// Converts an angle in degrees to radians.
///
/// Evaluates `theta / 180 * pi` in that order. This differs from
/// [`f64::to_radians`] in the last bit for many inputs, which matters when
/// results are compared against reference values.
#[inline]
pub fn radians(theta: f64) -> f64 {
    theta / 180.0 * PI
}

/// Normalizes an rms surface height in meters by the radar wavelength.
///
/// **Context**: The model takes roughness as a fraction of the wavelength,
/// while field campaigns report rms height in meters at a known frequency.
///
/// **How it Works**: Divides the height by `c / frequency`.
pub fn fractional_rms_height(rms_height: f64, frequency: f64) -> f64 {
    rms_height * frequency / SPEED_OF_LIGHT
}
