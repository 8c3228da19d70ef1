//! Resolve the central body for a run from a catalog, with a built-in Earth fallback.

use std::path::Path;

use kepler_config::{ConfigError, find_body, load_bodies};
use kepler_core::PhysicalConstants;
use kepler_core::constants::EARTH_ATMOSPHERE_LIMIT_KM;
use tracing::{debug, warn};

/// Central body chosen for a run.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySelection {
    pub name: String,
    pub constants: PhysicalConstants,
    pub atmosphere_limit_km: Option<f64>,
}

impl BodySelection {
    /// WGS-84 Earth with the standard 120 km atmosphere warning.
    pub fn earth() -> Self {
        Self {
            name: "Earth".to_string(),
            constants: PhysicalConstants::earth(),
            atmosphere_limit_km: Some(EARTH_ATMOSPHERE_LIMIT_KM),
        }
    }
}

/// Look `name` up in the catalog at `catalog`.
///
/// A missing catalog path still resolves `earth` to the built-in constants, so the tools run
/// from any working directory.
pub fn select_body(catalog: &Path, name: &str) -> Result<BodySelection, ConfigError> {
    if !catalog.exists() && name.eq_ignore_ascii_case("earth") {
        warn!(
            catalog = %catalog.display(),
            "body catalog not found; using built-in Earth constants"
        );
        return Ok(BodySelection::earth());
    }

    let bodies = load_bodies(catalog)?;
    let body = find_body(&bodies, name)?;
    let constants = body.constants()?;
    debug!(
        body = %body.name,
        mu_m3_s2 = constants.mu(),
        radius_m = constants.radius_m(),
        "selected central body"
    );
    Ok(BodySelection {
        name: body.name,
        constants,
        atmosphere_limit_km: body.atmosphere_limit_km,
    })
}
