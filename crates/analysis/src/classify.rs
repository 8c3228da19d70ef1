//! Four-way classification of a tangential velocity sample.

use std::fmt;

use serde::Serialize;

/// Relative band around the circular speed that still counts as a circle.
pub const DEFAULT_CIRCULAR_TOLERANCE: f64 = 0.01;

/// Orbit type implied by a speed relative to the local circular and escape speeds.
///
/// The `ellipse_high`/`ellipse_low` tags are kept as-is for report and JSON compatibility;
/// the variant docs describe where the sample point sits on the resulting ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitType {
    /// Within the tolerance band of the local circular speed.
    Circle,
    /// Below circular speed: the sample point is the apoapsis and the orbit dips lower.
    EllipseHigh,
    /// Between circular and escape speed: the sample point is the periapsis.
    EllipseLow,
    /// At or above escape speed; no closed orbit.
    Escape,
}

impl OrbitType {
    /// Stable lowercase tag used in reports and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitType::Circle => "circle",
            OrbitType::EllipseHigh => "ellipse_high",
            OrbitType::EllipseLow => "ellipse_low",
            OrbitType::Escape => "escape",
        }
    }

    /// Whether the orbit is closed (anything except escape).
    pub fn is_bound(&self) -> bool {
        !matches!(self, OrbitType::Escape)
    }
}

impl fmt::Display for OrbitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify speed `v` against the reference speeds at the same radius.
///
/// Checks run in a fixed order. The circular band is tested first because it straddles the
/// `v < v_circ` split used by the two ellipse cases. The band never reaches escape speed, so a
/// tolerance of `√2 - 1` or more still classifies `v >= v_esc` as escape.
pub fn classify_orbit(v_m_s: f64, v_circ_m_s: f64, v_esc_m_s: f64, tolerance: f64) -> OrbitType {
    let rel = (v_m_s - v_circ_m_s).abs() / v_circ_m_s;
    if rel <= tolerance && v_m_s < v_esc_m_s {
        OrbitType::Circle
    } else if v_m_s < v_circ_m_s {
        OrbitType::EllipseHigh
    } else if v_m_s < v_esc_m_s {
        OrbitType::EllipseLow
    } else {
        OrbitType::Escape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        let (vc, ve) = (1000.0, 1000.0 * std::f64::consts::SQRT_2);
        let tol = DEFAULT_CIRCULAR_TOLERANCE;
        assert_eq!(classify_orbit(1000.0, vc, ve, tol), OrbitType::Circle);
        assert_eq!(classify_orbit(990.5, vc, ve, tol), OrbitType::Circle);
        assert_eq!(classify_orbit(989.0, vc, ve, tol), OrbitType::EllipseHigh);
        assert_eq!(classify_orbit(1011.0, vc, ve, tol), OrbitType::EllipseLow);
        assert_eq!(classify_orbit(ve, vc, ve, tol), OrbitType::Escape);
        assert_eq!(classify_orbit(5000.0, vc, ve, tol), OrbitType::Escape);
    }

    #[test]
    fn zero_tolerance_only_matches_exact_speed() {
        assert_eq!(classify_orbit(1000.0, 1000.0, 1414.0, 0.0), OrbitType::Circle);
        assert_eq!(classify_orbit(1000.001, 1000.0, 1414.0, 0.0), OrbitType::EllipseLow);
    }

    #[test]
    fn wide_tolerance_never_swallows_escape() {
        let (vc, ve) = (1000.0, 1000.0 * std::f64::consts::SQRT_2);
        assert_eq!(classify_orbit(1500.0, vc, ve, 0.5), OrbitType::Escape);
        assert_eq!(classify_orbit(ve, vc, ve, 1.0), OrbitType::Escape);
        assert_eq!(classify_orbit(1400.0, vc, ve, 0.5), OrbitType::Circle);
    }

    #[test]
    fn tags_are_snake_case() {
        assert_eq!(OrbitType::EllipseHigh.to_string(), "ellipse_high");
        assert!(!OrbitType::Escape.is_bound());
        assert!(OrbitType::Circle.is_bound());
    }
}
