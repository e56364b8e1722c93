//! Backscatter coefficients per polarization channel.
//!
//! The model produces one linear backscatter coefficient for each of the
//! three channels it covers. They are stored in a fixed-field record rather
//! than a keyed map since the channel set is closed.

use std::{fmt, ops::Index, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};


/// Radar transmit/receive polarization combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarization {
    VV,
    VH,
    HH,
}

impl Polarization {
    pub const ALL: [Polarization; 3] = [Polarization::VV, Polarization::VH, Polarization::HH];

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarization::VV => "vv",
            Polarization::VH => "vh",
            Polarization::HH => "hh",
        }
    }
}

impl fmt::Display for Polarization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Polarization {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vv" => Ok(Polarization::VV),
            "vh" => Ok(Polarization::VH),
            "hh" => Ok(Polarization::HH),
            other => Err(anyhow!(
                "Unknown polarization: '{}'. Expected one of 'vv', 'vh', 'hh'",
                other
            )),
        }
    }
}

/// Linear backscatter coefficients (σ⁰) for the three modelled channels.
///
/// **Context**: The Oh model returns co-polarized (vv, hh) and
/// cross-polarized (vh) backscatter as power ratios. Downstream inversion
/// works on these linear values; decibels are only for presentation.
///
/// **How it Works**: Plain `Copy` record with one field per channel. Serializes
/// to a map with exactly the keys `vv`, `vh` and `hh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sigma0 {
    pub vv: f64,
    pub vh: f64,
    pub hh: f64,
}

impl Sigma0 {
    pub fn new(vv: f64, vh: f64, hh: f64) -> Self {
        Self { vv, vh, hh }
    }

    /// Returns the linear coefficient of one channel.
    pub fn channel(&self, pol: Polarization) -> f64 {
        match pol {
            Polarization::VV => self.vv,
            Polarization::VH => self.vh,
            Polarization::HH => self.hh,
        }
    }

    /// Returns one channel in decibels. Zero maps to negative infinity.
    pub fn db(&self, pol: Polarization) -> f64 {
        10.0 * self.channel(pol).log10()
    }

    /// Iterates over `(channel, value)` pairs in vv, vh, hh order.
    pub fn iter(&self) -> impl Iterator<Item = (Polarization, f64)> + '_ {
        Polarization::ALL.into_iter().map(move |pol| (pol, self.channel(pol)))
    }
}

impl Index<Polarization> for Sigma0 {
    type Output = f64;

    fn index(&self, pol: Polarization) -> &f64 {
        match pol {
            Polarization::VV => &self.vv,
            Polarization::VH => &self.vh,
            Polarization::HH => &self.hh,
        }
    }
}

impl fmt::Display for Sigma0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sigma0:")?;
        for (pol, value) in self.iter() {
            writeln!(f, "  {}: {:.6e} ({:.3} dB)", pol, value, self.db(pol))?;
        }
        Ok(())
    }
}
