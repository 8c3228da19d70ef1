use kepler_calculator::analysis::{evaluate_orbit, plan_hohmann_transfer};
use kepler_calculator::base::PhysicalConstants;
use kepler_calculator::geometry::{
    GeometryPoint, OrbitGeometry, generate_orbit_geometry, generate_reference_body_geometry,
    orbit_geometry, transfer_geometry,
};

#[test]
fn circular_geometry_has_constant_radius() {
    let a_m = 7_000_000.0;
    let points: Vec<GeometryPoint> = generate_orbit_geometry(a_m, 0.0, 720).collect();
    assert_eq!(points.len(), 720);
    for p in &points {
        assert!((p.radius_km() - 7_000.0).abs() < 1e-6, "r = {}", p.radius_km());
    }
}

#[test]
fn sequence_is_restartable() {
    let first: Vec<_> = generate_orbit_geometry(8.0e6, 0.3, 64).collect();
    let second: Vec<_> = generate_orbit_geometry(8.0e6, 0.3, 64).collect();
    assert_eq!(first, second);

    let iter = generate_orbit_geometry(8.0e6, 0.3, 64);
    let cloned: Vec<_> = iter.clone().collect();
    assert_eq!(cloned, iter.collect::<Vec<_>>());
}

#[test]
fn ellipse_apsides_on_x_axis() {
    let (a_m, e) = (10_000_000.0, 0.5);
    let points: Vec<_> = generate_orbit_geometry(a_m, e, 8).collect();
    assert_eq!(points.len(), 8);
    // θ = 0 is periapsis, θ = π (index 4 of 8) is apoapsis.
    assert!((points[0].x_km - 5_000.0).abs() < 1e-6);
    assert!(points[0].y_km.abs() < 1e-9);
    assert!((points[4].x_km + 15_000.0).abs() < 1e-6);
}

#[test]
fn reference_body_circle_uses_body_radius() {
    let moon = PhysicalConstants::moon();
    let outline = generate_reference_body_geometry(&moon, 360);
    assert_eq!(outline.len(), 360);
    for p in outline {
        assert!((p.radius_km() - 1_737.4).abs() < 1e-6);
    }
}

#[test]
fn escape_orbit_has_no_geometry() {
    let result = evaluate_orbit(400.0, 12.0, &PhysicalConstants::earth());
    assert!(matches!(
        orbit_geometry(&result, 720),
        OrbitGeometry::NotApplicable
    ));
    assert!(orbit_geometry(&result, 720).points().is_none());
}

#[test]
fn evaluated_orbit_geometry_starts_at_periapsis() {
    let result = evaluate_orbit(400.0, 8.5, &PhysicalConstants::earth());
    let conic = *result.conic().unwrap();
    let points: Vec<_> = match orbit_geometry(&result, 360) {
        OrbitGeometry::Closed(points) => points.collect(),
        OrbitGeometry::NotApplicable => panic!("bound orbit must have geometry"),
    };
    assert_eq!(points.len(), 360);
    assert!((points[0].x_km - conic.periapsis_m / 1_000.0).abs() < 1e-3);
    let max_r = points.iter().map(|p| p.radius_km()).fold(0.0, f64::max);
    assert!((max_r - conic.apoapsis_m / 1_000.0).abs() < 1e-3);
}

#[test]
fn transfer_ellipse_touches_both_circles() {
    let plan = plan_hohmann_transfer(400.0, 35_786.0, &PhysicalConstants::earth());
    let points: Vec<_> = transfer_geometry(&plan, 720).collect();
    assert_eq!(points.len(), 720);
    assert!((points[0].x_km - plan.r1_m / 1_000.0).abs() < 1e-3);
    assert!((points[360].x_km + plan.r2_m / 1_000.0).abs() < 1e-3);
}
