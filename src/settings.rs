use anyhow::{anyhow, ensure, Context, Result};
use config::{Config, Environment, File, FileFormat};
use num_complex::Complex64;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::FREE_SPACE_PERMITTIVITY;
use crate::oh::{self, surface_backscatter_with_top};
use crate::result::Sigma0;


/// Inputs for a single model evaluation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Incidence angle in degrees.
    pub theta: f64,
    /// Relative permittivity of the soil.
    pub eps_low: Complex64,
    /// Rms height divided by the wavelength.
    pub f_rms: f64,
    /// Radar frequency in hertz.
    pub frequency: f64,
    /// Relative permittivity of the upper medium.
    #[serde(default = "default_eps_top")]
    pub eps_top: Complex64,
}

fn default_eps_top() -> Complex64 {
    FREE_SPACE_PERMITTIVITY
}

impl Settings {
    pub fn k_rms(&self) -> f64 {
        oh::k_rms(self.f_rms)
    }

    pub fn eps_eff(&self) -> Complex64 {
        self.eps_low / self.eps_top
    }

    /// Runs the Oh model on these inputs.
    pub fn evaluate(&self) -> Sigma0 {
        surface_backscatter_with_top(
            self.theta,
            self.eps_low,
            self.f_rms,
            self.frequency,
            self.eps_top,
        )
    }

    /// Checks that every input is a finite number and the frequency is positive.
    ///
    /// Physical ranges of the angle and roughness are not enforced; the model
    /// is evaluated as given.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.theta.is_finite(), "Incidence angle must be finite, got {}", self.theta);
        ensure!(self.f_rms.is_finite(), "Fractional rms height must be finite, got {}", self.f_rms);
        ensure!(
            self.frequency.is_finite() && self.frequency > 0.0,
            "Frequency must be greater than 0, got {}",
            self.frequency
        );
        ensure!(
            self.eps_low.is_finite(),
            "Lower medium permittivity must be finite, got {}",
            self.eps_low
        );
        ensure!(
            self.eps_top.is_finite(),
            "Upper medium permittivity must be finite, got {}",
            self.eps_top
        );
        Ok(())
    }
}

/// Loads settings from `config/default.toml` under the project root, overlaid
/// by `config/local.toml` if present and then by `SIGMA0_*` environment
/// variables.
pub fn load_default_config() -> Result<Settings> {
    let root = retrieve_project_root()?;
    let config_dir = root.join("config");

    let default_config_file = config_dir.join("default.toml");
    let local_config_file = config_dir.join("local.toml");

    if local_config_file.exists() {
        tracing::info!(path = %local_config_file.display(), "using local configuration");
    } else {
        tracing::info!(path = %default_config_file.display(), "using default configuration");
    }

    let builder = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .add_source(File::from(local_config_file).required(false))
        .add_source(Environment::with_prefix("sigma0"));

    finish(builder)
}

/// Loads settings from a single TOML file, overlaid by `SIGMA0_*`
/// environment variables.
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "using configuration");

    let builder = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(Environment::with_prefix("sigma0"));

    finish(builder)
}

/// Parses settings from a TOML string. The environment is not consulted.
pub fn load_config_str(toml: &str) -> Result<Settings> {
    let builder = Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
    finish(builder)
}

fn finish(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Settings> {
    let settings: Settings = builder
        .build()
        .context("Error loading configuration")?
        .try_deserialize()
        .context("Error deserializing configuration")?;

    settings.validate()?;

    tracing::debug!(?settings, "configuration loaded");

    Ok(settings)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the SIGMA0_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
fn retrieve_project_root() -> Result<PathBuf> {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        return Ok(PathBuf::from(manifest_dir));
    }
    if let Ok(path) = env::var("SIGMA0_ROOT_DIR") {
        return Ok(PathBuf::from(path));
    }

    let exe_path = env::current_exe().context("Failed to get current executable path")?;
    let mut current_dir = exe_path.parent();
    while let Some(dir) = current_dir {
        tracing::debug!(dir = %dir.display(), "looking for config directory");
        if dir.join("config").is_dir() {
            return Ok(dir.to_path_buf());
        }
        current_dir = dir.parent();
    }

    Err(anyhow!(
        "Could not find project root directory. Set SIGMA0_ROOT_DIR to a directory containing config/"
    ))
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - Incidence Angle: {:.6} deg
  - Soil Permittivity: {:.6} + {:.6}i
  - Upper Medium Permittivity: {:.6} + {:.6}i
  - Fractional RMS Height: {:.6}
  - Frequency: {:.6e} Hz
  ",
            self.theta,
            self.eps_low.re,
            self.eps_low.im,
            self.eps_top.re,
            self.eps_top.im,
            self.f_rms,
            self.frequency,
        )
    }
}
