//! Caller-side validation of raw orbit samples.
//!
//! The evaluation service trusts its inputs; front-ends run these checks first, abort on
//! errors, and surface warnings without blocking.

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in a raw sample.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputIssue {
    #[error("height must be a finite number (got {0})")]
    NonFiniteHeight(f64),
    #[error("speed must be a finite number (got {0})")]
    NonFiniteSpeed(f64),
    #[error("height must be >= 0 km (got {0} km)")]
    NegativeHeight(f64),
    #[error("speed must be > 0 km/s (got {0} km/s)")]
    NonPositiveSpeed(f64),
    #[error(
        "height {height_km} km is below {limit_km} km; the atmosphere is not modelled and re-entry is likely"
    )]
    BelowAtmosphere { height_km: f64, limit_km: f64 },
}

impl InputIssue {
    pub fn severity(&self) -> Severity {
        match self {
            InputIssue::BelowAtmosphere { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Check a sample. `atmosphere_limit_km` is `None` for airless bodies.
pub fn validate_orbit_input(
    height_km: f64,
    speed_kms: f64,
    atmosphere_limit_km: Option<f64>,
) -> Vec<InputIssue> {
    let mut issues = validate_height(height_km, atmosphere_limit_km);
    if !speed_kms.is_finite() {
        issues.push(InputIssue::NonFiniteSpeed(speed_kms));
    } else if speed_kms <= 0.0 {
        issues.push(InputIssue::NonPositiveSpeed(speed_kms));
    }
    issues
}

/// Check an altitude on its own, as used for circular transfer endpoints.
pub fn validate_height(height_km: f64, atmosphere_limit_km: Option<f64>) -> Vec<InputIssue> {
    let mut issues = Vec::new();
    if !height_km.is_finite() {
        issues.push(InputIssue::NonFiniteHeight(height_km));
        return issues;
    }
    if height_km < 0.0 {
        issues.push(InputIssue::NegativeHeight(height_km));
    }
    if let Some(limit_km) = atmosphere_limit_km {
        if height_km < limit_km {
            let issue = InputIssue::BelowAtmosphere {
                height_km,
                limit_km,
            };
            warn!("{issue}");
            issues.push(issue);
        }
    }
    issues
}

/// True when any issue blocks evaluation.
pub fn has_errors(issues: &[InputIssue]) -> bool {
    issues.iter().any(|i| i.severity() == Severity::Error)
}
