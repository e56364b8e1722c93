//! Fresnel power reflectivities at a planar dielectric boundary.
//!
//! This module implements the incoherent (power) Fresnel reflectivities for
//! horizontally and vertically polarized waves incident on a flat interface
//! between two media. They are the smooth-surface terms that the Oh model
//! scales by its empirical roughness factors.
//!
//! The reflectivity calculations provide:
//! - Horizontal (s, perpendicular) polarization reflectivity
//! - Vertical (p, parallel) polarization reflectivity
//! - Complex relative permittivity support for lossy soils
//!
//! # Conventions
//!
//! - The permittivity is relative: lower medium over upper medium.
//! - Angles are in degrees, measured from the surface normal.
//! - The square root is the principal complex branch.
//! - No input is validated. A zero denominator yields NaN, not an error.

use num_complex::Complex64;

use crate::helpers::radians;

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn matched_media_do_not_reflect() {
        let eps = Complex64::new(1.0, 0.0);
        assert_eq!(gamma_h(eps, 0.0), 0.0);
        assert_eq!(gamma_v(eps, 0.0), 0.0);
        // sqrt(1 - sin^2) only matches cos to rounding
        for theta in [15.0, 40.0, 75.0] {
            assert!(gamma_h(eps, theta) < 1e-20, "theta: {}", theta);
            assert!(gamma_v(eps, theta) < 1e-20, "theta: {}", theta);
        }
    }

    #[test]
    fn normal_incidence_lossless() {
        // ((1 - n) / (1 + n))^2 with n = sqrt(4) = 2
        let eps = Complex64::new(4.0, 0.0);
        let expected = 1.0 / 9.0;
        assert!((gamma_h(eps, 0.0) - expected).abs() < TOL);
        assert!((gamma_v(eps, 0.0) - expected).abs() < TOL);
    }

    #[test]
    fn brewster_angle_vanishes_for_v() {
        let eps = Complex64::new(4.0, 0.0);
        let brewster = 2.0_f64.atan().to_degrees();
        let gamv = gamma_v(eps, brewster);
        assert!(gamv < 1e-20, "gamv: {}", gamv);
        assert!(gamma_h(eps, brewster) > 0.3);
    }

    #[test]
    fn lossy_soil_40_degrees() {
        let eps = Complex64::new(15.0, -3.0);
        let gamh = gamma_h(eps, 40.0);
        let gamv = gamma_v(eps, 40.0);
        assert!((gamh - 0.4492754911929527).abs() < TOL, "gamh: {}", gamh);
        assert!((gamv - 0.2567062920724294).abs() < TOL, "gamv: {}", gamv);
    }

    #[test]
    fn zero_permittivity_at_normal_incidence_is_nan_for_v() {
        // eps * cos - sqrt(eps) = 0 over 0
        let gamv = gamma_v(Complex64::new(0.0, 0.0), 0.0);
        assert!(gamv.is_nan(), "gamv: {}", gamv);
    }
}

/// Computes the Fresnel power reflectivity for horizontal polarization.
///
/// **Context**: A horizontally polarized wave has its electric field parallel
/// to the surface. Its smooth-surface reflectivity is one of the two
/// polarization-dependent terms feeding the Oh backscatter equations.
///
/// **How it Works**: Evaluates
/// `|(cos θ - √(ε - sin²θ)) / (cos θ + √(ε - sin²θ))|²`
/// with θ converted from degrees.
///
/// # Example
/// ```rust
/// use num_complex::Complex64;
/// let gamh = sigma0::reflectivity::gamma_h(Complex64::new(15.0, -3.0), 40.0);
/// assert!(gamh > 0.0 && gamh < 1.0);
/// ```
pub fn gamma_h(eps: Complex64, theta: f64) -> f64 {
    let theta_rad = radians(theta);
    let ct = theta_rad.cos();
    let root = (eps - theta_rad.sin().powi(2)).sqrt();
    ((ct - root) / (ct + root)).norm().powi(2)
}

/// Computes the Fresnel power reflectivity for vertical polarization.
///
/// **Context**: A vertically polarized wave has its electric field in the
/// plane of incidence. Its reflectivity drops to zero at the Brewster angle
/// for lossless media, so it diverges from [`gamma_h`] away from normal
/// incidence.
///
/// **How it Works**: Same as [`gamma_h`] with the cosine term scaled by the
/// permittivity:
/// `|(ε cos θ - √(ε - sin²θ)) / (ε cos θ + √(ε - sin²θ))|²`.
pub fn gamma_v(eps: Complex64, theta: f64) -> f64 {
    let theta_rad = radians(theta);
    let ct = theta_rad.cos();
    let root = (eps - theta_rad.sin().powi(2)).sqrt();
    ((eps * ct - root) / (eps * ct + root)).norm().powi(2)
}
