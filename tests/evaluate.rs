use kepler_calculator::analysis::{
    OrbitType, Trajectory, evaluate_orbit, evaluate_orbit_with_tolerance,
};
use kepler_calculator::base::PhysicalConstants;
use kepler_calculator::orbits::{circular_velocity, escape_velocity};

fn earth() -> PhysicalConstants {
    PhysicalConstants::new(3.986_004_418e14, 6_378_137.0).expect("earth constants")
}

#[test]
fn leo_sample_is_circle() {
    let result = evaluate_orbit(400.0, 7.67, &earth());
    assert_eq!(result.orbit_type(), OrbitType::Circle);
    let v_circ = result.circular_velocity_kms();
    assert!((v_circ - 7.669).abs() < 0.005, "v_circ = {v_circ}");
    assert!((7.67 - v_circ).abs() / v_circ < 0.003);
    let conic = result.conic().expect("circle has conic elements");
    assert!(conic.eccentricity < 0.003, "e = {}", conic.eccentricity);
}

#[test]
fn geo_sample_is_circle() {
    let result = evaluate_orbit(35_786.0, 3.07, &earth());
    assert_eq!(result.orbit_type(), OrbitType::Circle);
    let conic = result.conic().expect("circle has conic elements");
    let minutes = conic.period_s / 60.0;
    assert!((minutes - 1_436.0).abs() < 15.0, "period = {minutes} min");
}

#[test]
fn exact_circular_speed_gives_zero_eccentricity() {
    let constants = earth();
    let height_km = 1_000.0;
    let r = constants.radius_at_height_km(height_km);
    let speed_kms = circular_velocity(constants.mu(), r) / 1_000.0;

    let result = evaluate_orbit(height_km, speed_kms, &constants);
    assert_eq!(result.orbit_type(), OrbitType::Circle);
    let conic = result.conic().unwrap();
    assert!(conic.eccentricity < 1e-6, "e = {}", conic.eccentricity);
    assert!((conic.periapsis_m - r).abs() < 1.0);
    assert!((conic.apoapsis_m - r).abs() < 1.0);
    assert!((conic.periapsis_altitude_m - 1.0e6).abs() < 1.0);
}

#[test]
fn at_or_above_escape_speed_omits_conic() {
    let constants = earth();
    let r = constants.radius_at_height_km(400.0);
    let v_esc_kms = escape_velocity(constants.mu(), r) / 1_000.0;

    for speed in [v_esc_kms * 1.0001, 12.0, 20.0] {
        let result = evaluate_orbit(400.0, speed, &constants);
        assert_eq!(result.orbit_type(), OrbitType::Escape);
        assert_eq!(result.trajectory, Trajectory::Escape);
        assert!(result.conic().is_none());
        assert!(result.semi_major_axis_m < 0.0);
    }
}

#[test]
fn exactly_parabolic_sample_is_escape_with_infinite_axis() {
    // mu = 2, R = 1 m, v = 2 m/s: 2/r - v²/mu == 0 exactly.
    let toy = PhysicalConstants::new(2.0, 1.0).unwrap();
    let result = evaluate_orbit(0.0, 0.002, &toy);
    assert_eq!(result.orbit_type(), OrbitType::Escape);
    assert_eq!(result.semi_major_axis_m, f64::INFINITY);
    assert!(result.conic().is_none());
}

#[test]
fn classification_is_total_and_bound_orbits_are_consistent() {
    let constants = earth();
    let mut seen = std::collections::HashSet::new();
    for i in 1..=300 {
        let speed = i as f64 * 0.05;
        let result = evaluate_orbit(500.0, speed, &constants);
        seen.insert(result.orbit_type());
        match &result.trajectory {
            Trajectory::Circle(c) | Trajectory::EllipseHigh(c) | Trajectory::EllipseLow(c) => {
                assert!(
                    (0.0..1.0).contains(&c.eccentricity),
                    "speed {speed}: e = {}",
                    c.eccentricity
                );
                let a = result.semi_major_axis_m;
                assert!(c.periapsis_m <= a + 1e-6 && a <= c.apoapsis_m + 1e-6);
                assert!(c.period_s > 0.0);
            }
            Trajectory::Escape => assert!(speed * 1_000.0 >= result.escape_velocity_m_s),
        }
    }
    assert_eq!(seen.len(), 4, "all four orbit types reached: {seen:?}");
}

#[test]
fn ellipse_variants_follow_speed_bands() {
    let constants = earth();
    let high = evaluate_orbit(400.0, 7.0, &constants);
    assert_eq!(high.orbit_type(), OrbitType::EllipseHigh);
    let c = high.conic().unwrap();
    assert!((c.apoapsis_m - high.radius_m).abs() / high.radius_m < 1e-9);

    let low = evaluate_orbit(400.0, 9.0, &constants);
    assert_eq!(low.orbit_type(), OrbitType::EllipseLow);
    let c = low.conic().unwrap();
    assert!((c.periapsis_m - low.radius_m).abs() / low.radius_m < 1e-9);
}

#[test]
fn tolerance_widens_circle_band() {
    let constants = earth();
    assert_eq!(
        evaluate_orbit(400.0, 7.5, &constants).orbit_type(),
        OrbitType::EllipseHigh
    );
    assert_eq!(
        evaluate_orbit_with_tolerance(400.0, 7.5, &constants, 0.05).orbit_type(),
        OrbitType::Circle
    );
}

#[test]
fn wide_tolerance_keeps_escape_and_bound_invariants() {
    let constants = earth();
    let result = evaluate_orbit_with_tolerance(400.0, 11.0, &constants, 0.5);
    assert_eq!(result.orbit_type(), OrbitType::Escape);
    assert!(result.conic().is_none());

    for i in 1..=300 {
        let speed = i as f64 * 0.05;
        let result = evaluate_orbit_with_tolerance(400.0, speed, &constants, 0.5);
        if let Some(c) = result.conic() {
            assert!(
                (0.0..1.0).contains(&c.eccentricity),
                "speed {speed}: e = {}",
                c.eccentricity
            );
            assert!(c.periapsis_m <= c.apoapsis_m);
            assert!(c.period_s.is_finite());
        }
    }
}

#[test]
fn result_carries_input_and_assumptions() {
    let result = evaluate_orbit(400.0, 7.67, &earth());
    assert_eq!(result.input.height_km, 400.0);
    assert_eq!(result.input.speed_kms, 7.67);
    assert!(result.assumptions.contains("no J2"));
    assert!((result.radius_km() - 6_778.137).abs() < 1e-9);
}

#[test]
fn lunar_orbit_uses_injected_constants() {
    let result = evaluate_orbit(100.0, 1.633, &PhysicalConstants::moon());
    assert_eq!(result.orbit_type(), OrbitType::Circle);
}
