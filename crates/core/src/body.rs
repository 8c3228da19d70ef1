//! Central-body constants injected into every kernel and service call.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{MU_EARTH_M3_S2, MU_MOON_M3_S2, R_EARTH_M, R_MOON_M};

/// Gravitational parameter and reference radius of the central body, in SI units.
///
/// Both values are finite and strictly positive; construct through [`PhysicalConstants::new`]
/// or one of the presets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicalConstants {
    mu_m3_s2: f64,
    radius_m: f64,
}

/// Rejected body constants.
#[derive(Debug, Error, PartialEq)]
pub enum ConstantsError {
    #[error("gravitational parameter must be finite and positive (got {0})")]
    InvalidMu(f64),
    #[error("reference radius must be finite and positive (got {0})")]
    InvalidRadius(f64),
}

impl PhysicalConstants {
    /// Build a constants value, checking that both quantities are strictly positive.
    pub fn new(mu_m3_s2: f64, radius_m: f64) -> Result<Self, ConstantsError> {
        if !(mu_m3_s2.is_finite() && mu_m3_s2 > 0.0) {
            return Err(ConstantsError::InvalidMu(mu_m3_s2));
        }
        if !(radius_m.is_finite() && radius_m > 0.0) {
            return Err(ConstantsError::InvalidRadius(radius_m));
        }
        Ok(Self { mu_m3_s2, radius_m })
    }

    /// Earth with WGS-84 gravitational parameter and equatorial radius.
    pub const fn earth() -> Self {
        Self {
            mu_m3_s2: MU_EARTH_M3_S2,
            radius_m: R_EARTH_M,
        }
    }

    /// The Moon with its mean radius.
    pub const fn moon() -> Self {
        Self {
            mu_m3_s2: MU_MOON_M3_S2,
            radius_m: R_MOON_M,
        }
    }

    /// Standard gravitational parameter μ (m³/s²).
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu_m3_s2
    }

    /// Reference body radius R (m).
    #[inline]
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    /// Orbital radius (m) for an altitude in kilometres above the reference surface.
    #[inline]
    pub fn radius_at_height_km(&self, height_km: f64) -> f64 {
        self.radius_m + crate::units::km_to_m(height_km)
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::earth()
    }
}
