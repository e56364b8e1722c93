use num_complex::Complex64;

pub const FREE_SPACE_PERMITTIVITY: Complex64 = Complex64 {
    // upper medium relative permittivity when none is given
    re: 1.0,
    im: 0.0,
};
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // m/s

/// Gain of the roughness attenuation factor `g`.
pub const G_GAIN: f64 = 0.7;
/// Rate applied to `k_rms^G_EXPONENT` inside `g`.
pub const G_RATE: f64 = 0.65;
/// Exponent of `k_rms` inside `g`. Requires `k_rms >= 0` for a real result.
pub const G_EXPONENT: f64 = 1.8;
/// Gain of the cross-polarized ratio `q`.
pub const Q_GAIN: f64 = 0.23;
