//! Configuration models and loaders for central-body catalogs.

use std::fs::File;
use std::path::{Path, PathBuf};

use kepler_core::units::{km_to_m, km3_to_m3};
use kepler_core::{ConstantsError, PhysicalConstants};
use serde::Deserialize;
use thiserror::Error;

/// Central body entry parsed from a catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mu_km3_s2: f64,
    pub radius_km: f64,
    /// Altitude below which the atmosphere warning fires. Absent for airless bodies.
    #[serde(default)]
    pub atmosphere_limit_km: Option<f64>,
}

impl BodyConfig {
    /// Convert to SI constants, rejecting non-positive values.
    pub fn constants(&self) -> Result<PhysicalConstants, ConfigError> {
        PhysicalConstants::new(km3_to_m3(self.mu_km3_s2), km_to_m(self.radius_km)).map_err(
            |source| ConfigError::InvalidBody {
                name: self.name.clone(),
                source,
            },
        )
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("body '{0}' not found in catalog")]
    NotFound(String),
    #[error("body '{name}' has invalid constants: {source}")]
    InvalidBody {
        name: String,
        #[source]
        source: ConstantsError,
    },
}

/// Load body configurations from a directory of TOML files, a single TOML file, or a YAML list.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Case-insensitive lookup by body name.
pub fn find_body(bodies: &[BodyConfig], name: &str) -> Result<BodyConfig, ConfigError> {
    bodies
        .iter()
        .find(|b| b.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
