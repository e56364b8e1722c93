//! Oh et al. (1992) empirical backscatter model for bare soil.
//!
//! This module combines the smooth-surface Fresnel reflectivities with the
//! empirical roughness terms of the Oh model to predict co- and
//! cross-polarized backscatter from a randomly rough soil surface.
//!
//! The model provides:
//! - Roughness attenuation `g` from the normalized rms height
//! - Co-polarized ratio `p = hh / vv` through its square root `root_p`
//! - Cross-polarized ratio `q = vh / vv`
//! - The three backscatter coefficients for a single input tuple
//!
//! # Reference
//!
//! Oh, Y., Sarabandi, K., Ulaby, F. T. (1992). An empirical model and an
//! inversion technique for radar scattering from bare soil surfaces.
//! IEEE Trans. Geosci. Remote Sens., 30(2), 370-381.
//!
//! # Domain
//!
//! Nothing is validated. A negative `f_rms` gives `NaN` through the
//! fractional power in `g`, a negative angle gives `NaN` through `root_p`,
//! and a zero normal-incidence reflectivity drives the `root_p` exponent to
//! infinity. All of these propagate to the caller as IEEE values.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::config::{FREE_SPACE_PERMITTIVITY, G_EXPONENT, G_GAIN, G_RATE, Q_GAIN};
use crate::helpers::radians;
use crate::reflectivity::{gamma_h, gamma_v};
use crate::result::Sigma0;

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < TOL * b.abs().max(1.0), "a: {}, b: {}", a, b);
    }

    #[test]
    fn lossy_soil_c_band() {
        let sigma0 = surface_backscatter(40.0, Complex64::new(15.0, -3.0), 0.3, 5.3e9);
        assert_close(sigma0.vv, 0.20779424282609113);
        assert_close(sigma0.vh, 0.024101198015306437);
        assert_close(sigma0.hh, 0.17945910496357495);
    }

    #[test]
    fn lossy_soil_under_dielectric_layer() {
        let sigma0 = surface_backscatter_with_top(
            40.0,
            Complex64::new(15.0, -3.0),
            0.3,
            5.3e9,
            Complex64::new(2.0, -0.1),
        );
        assert_close(sigma0.vv, 0.12868810084284135);
        assert_close(sigma0.vh, 0.011799236469306848);
        assert_close(sigma0.hh, 0.11744924168553048);
    }

    #[test]
    fn terms_c_band() {
        let gamma0 = gamma_h(Complex64::new(15.0, -3.0), 0.0);
        let terms = OhTerms::new(40.0, gamma0, k_rms(0.3));
        assert_close(gamma0, 0.35350429547168943);
        assert_close(terms.g, 0.6084769196624055);
        assert_close(terms.root_p, 0.9293215183707175);
        assert_close(terms.q, 0.1159858795292871);
        assert_close(terms.p(), terms.root_p * terms.root_p);
    }

    #[test]
    fn vacuum_top_is_default() {
        let eps = Complex64::new(8.0, -1.5);
        let default = surface_backscatter(33.0, eps, 0.12, 1.4e9);
        let explicit =
            surface_backscatter_with_top(33.0, eps, 0.12, 1.4e9, Complex64::new(1.0, 0.0));
        assert_eq!(default, explicit);
    }

    #[test]
    fn frequency_is_ignored() {
        let eps = Complex64::new(15.0, -3.0);
        let l_band = surface_backscatter(40.0, eps, 0.3, 1.4e9);
        let c_band = surface_backscatter(40.0, eps, 0.3, 5.3e9);
        assert_eq!(l_band, c_band);
    }

    #[test]
    fn normal_incidence_co_pol_equal() {
        // (2 * 0 / pi)^x = 0, so root_p = 1
        let sigma0 = surface_backscatter(0.0, Complex64::new(15.0, -3.0), 0.3, 5.3e9);
        assert_eq!(sigma0.hh, sigma0.vv);
        assert_close(sigma0.vv, 0.43019840959208483);
    }

    #[test]
    fn smooth_surface_has_no_backscatter() {
        let sigma0 = surface_backscatter(40.0, Complex64::new(15.0, -3.0), 0.0, 5.3e9);
        assert_eq!(sigma0, Sigma0::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn matched_media_have_no_cross_pol() {
        // gamma0 = 0 gives an infinite root_p exponent, which 0 < base < 1 absorbs
        let sigma0 = surface_backscatter(40.0, Complex64::new(3.0, -0.5), 0.2, 5.3e9);
        let matched = surface_backscatter_with_top(
            40.0,
            Complex64::new(3.0, -0.5),
            0.2,
            5.3e9,
            Complex64::new(3.0, -0.5),
        );
        assert!(sigma0.vh > 0.0);
        assert_eq!(matched.vh, 0.0);
        assert!(matched.vv.is_finite());
    }

    #[test]
    fn negative_roughness_is_nan() {
        let sigma0 = surface_backscatter(40.0, Complex64::new(15.0, -3.0), -0.1, 5.3e9);
        assert!(sigma0.vv.is_nan());
        assert!(sigma0.vh.is_nan());
        assert!(sigma0.hh.is_nan());
    }

    #[test]
    fn negative_angle_is_nan() {
        let sigma0 = surface_backscatter(-10.0, Complex64::new(15.0, -3.0), 0.3, 5.3e9);
        assert!(sigma0.vv.is_nan());
    }
}

/// Converts a wavelength-normalized rms height to the `k·s` roughness used
/// by the model.
#[inline]
pub fn k_rms(f_rms: f64) -> f64 {
    (2.0 * PI) * f_rms
}

/// Empirical roughness terms of the Oh model.
///
/// **Context**: The Oh model expresses the departure of a rough surface from
/// specular behaviour through three fitted terms, which also give the co- and
/// cross-polarized ratios directly.
///
/// **How it Works**: `g` attenuates the smooth-surface reflectivity sum with
/// increasing roughness, `root_p` is the square root of the hh/vv ratio and
/// `q` is the vh/vv ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhTerms {
    pub g: f64,
    pub root_p: f64,
    pub q: f64,
}

impl OhTerms {
    /// Evaluates the terms for an incidence angle in degrees, the
    /// normal-incidence reflectivity `gamma0` and the roughness `k_rms`.
    pub fn new(theta: f64, gamma0: f64, k_rms: f64) -> Self {
        let theta = radians(theta);

        let g = G_GAIN * (1.0 - (-G_RATE * k_rms.powf(G_EXPONENT)).exp());
        let root_p = 1.0 - (2.0 * theta / PI).powf(1.0 / (3.0 * gamma0)) * (-k_rms).exp();
        let q = Q_GAIN * gamma0.sqrt() * (1.0 - (-k_rms).exp());

        Self { g, root_p, q }
    }

    /// Co-polarized ratio `hh / vv`.
    pub fn p(&self) -> f64 {
        self.root_p * self.root_p
    }

    /// Applies the terms to the reflectivities at the incidence angle.
    ///
    /// `ct` is the cosine of the incidence angle.
    pub fn backscatter(&self, ct: f64, gamma_h: f64, gamma_v: f64) -> Sigma0 {
        let vv = self.g * (ct * (ct * ct)) * (gamma_v + gamma_h) / self.root_p;
        Sigma0 {
            vv,
            vh: self.q * vv,
            hh: self.root_p * self.root_p * vv,
        }
    }
}

/// Computes bare-soil backscatter below free space.
///
/// Shorthand for [`surface_backscatter_with_top`] with the upper medium set to
/// [`FREE_SPACE_PERMITTIVITY`].
///
/// # Example
/// ```rust
/// use num_complex::Complex64;
/// use sigma0::oh::surface_backscatter;
///
/// let sigma0 = surface_backscatter(40.0, Complex64::new(15.0, -3.0), 0.3, 5.3e9);
/// assert!(sigma0.hh <= sigma0.vv);
/// ```
pub fn surface_backscatter(theta: f64, eps_low: Complex64, f_rms: f64, frequency: f64) -> Sigma0 {
    surface_backscatter_with_top(theta, eps_low, f_rms, frequency, FREE_SPACE_PERMITTIVITY)
}

/// Computes bare-soil backscatter with the Oh et al. (1992) model.
///
/// **Context**: Radar backscatter from bare soil depends on the soil
/// dielectric contrast and on surface roughness. The Oh model fits both
/// effects with closed-form expressions around the Fresnel reflectivities.
///
/// **How it Works**: Forms the effective permittivity `eps_low / eps_top`,
/// evaluates the H reflectivity at normal incidence and both reflectivities
/// at `theta` (degrees), derives the [`OhTerms`] from `f_rms` (rms height
/// over wavelength) and scales the reflectivity sum into the three channels.
///
/// `_frequency` (Hz) is part of the published signature but does not enter
/// the equations: roughness arrives already normalized by the wavelength.
pub fn surface_backscatter_with_top(
    theta: f64,
    eps_low: Complex64,
    f_rms: f64,
    _frequency: f64,
    eps_top: Complex64,
) -> Sigma0 {
    let k_rms = k_rms(f_rms);
    let eps_eff = eps_low / eps_top;

    let gamma0 = gamma_h(eps_eff, 0.0);
    let gamh = gamma_h(eps_eff, theta);
    let gamv = gamma_v(eps_eff, theta);

    let ct = radians(theta).cos();

    OhTerms::new(theta, gamma0, k_rms).backscatter(ct, gamh, gamv)
}
