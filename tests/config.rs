use std::path::Path;

use kepler_calculator::body::{BodySelection, select_body};
use kepler_calculator::config::{ConfigError, find_body, load_bodies};

#[test]
fn shipped_catalog_contains_reference_bodies() {
    let bodies = load_bodies("configs/bodies").expect("body catalog");
    assert!(bodies.len() >= 3);
    let earth = find_body(&bodies, "earth").expect("earth");
    assert_eq!(earth.atmosphere_limit_km, Some(120.0));
    let constants = earth.constants().expect("earth constants");
    assert!((constants.mu() - 3.986_004_418e14).abs() < 1.0);
    assert!((constants.radius_m() - 6_378_137.0).abs() < 1e-6);

    let moon = find_body(&bodies, "MOON").expect("moon");
    assert_eq!(moon.atmosphere_limit_km, None);
}

#[test]
fn select_body_reads_catalog() {
    let moon = select_body(Path::new("configs/bodies"), "Moon").expect("moon");
    assert_eq!(moon.name, "Moon");
    assert!((moon.constants.radius_m() - 1_737_400.0).abs() < 1e-6);
}

#[test]
fn missing_catalog_falls_back_to_earth_only() {
    let missing = Path::new("does/not/exist");
    assert_eq!(select_body(missing, "EARTH").unwrap(), BodySelection::earth());
    assert!(matches!(select_body(missing, "mars"), Err(ConfigError::Io(_))));
}

#[test]
fn unknown_body_is_reported() {
    let err = select_body(Path::new("configs/bodies"), "Vulcan").unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(ref name) if name == "Vulcan"));
}
