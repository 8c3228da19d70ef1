//! Two-body orbit evaluation, classification, and Hohmann transfer planning.
//!
//! The numeric work lives in the workspace crates; this facade re-exports them so the
//! command-line front-ends (and other consumers) share one import path, and adds the
//! small amount of glue those front-ends have in common.

pub mod body;
pub mod logging;

pub use kepler_analysis as analysis;
pub use kepler_config as config;
pub use kepler_core as base;
pub use kepler_export as export;
pub use kepler_geometry as geometry;
pub use kepler_impulsive as impulsive;
pub use kepler_orbits as orbits;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
