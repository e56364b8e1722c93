//! Bare-soil radar backscatter with the Oh et al. (1992) empirical model.
//!
//! The crate evaluates the published closed-form equations for a single
//! input tuple: incidence angle, soil permittivity, normalized rms roughness
//! and optionally the permittivity of the medium above the soil.
//!
//! ```rust
//! use num_complex::Complex64;
//! use sigma0::{surface_backscatter, Polarization};
//!
//! let sigma0 = surface_backscatter(40.0, Complex64::new(15.0, -3.0), 0.3, 5.3e9);
//! println!("vv: {:.2} dB", sigma0.db(Polarization::VV));
//! ```

pub mod config;
pub mod helpers;
pub mod oh;
pub mod reflectivity;
pub mod result;
pub mod settings;

pub use oh::{surface_backscatter, surface_backscatter_with_top, OhTerms};
pub use reflectivity::{gamma_h, gamma_v};
pub use result::{Polarization, Sigma0};
