//! Evaluate the conic reached from a single altitude/speed sample.

use kepler_core::PhysicalConstants;
use kepler_core::units::{kms_to_ms, m_to_km, ms_to_kms};
use kepler_orbits::{
    angular_momentum, circular_velocity, eccentricity, escape_velocity, periapsis_apoapsis, period,
    semi_major_axis,
};
use serde::Serialize;
use tracing::debug;

use crate::classify::{DEFAULT_CIRCULAR_TOLERANCE, OrbitType, classify_orbit};

/// Modelling assumptions carried on every result.
pub const MODEL_ASSUMPTIONS: &str = "central gravity only; no atmosphere, no J2";

/// Raw sample as entered by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitInput {
    /// Altitude above the reference surface (km).
    pub height_km: f64,
    /// Tangential speed (km/s).
    pub speed_kms: f64,
}

/// Shape and timing of a closed orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClosedConic {
    pub eccentricity: f64,
    pub periapsis_m: f64,
    pub apoapsis_m: f64,
    pub periapsis_altitude_m: f64,
    pub apoapsis_altitude_m: f64,
    pub period_s: f64,
}

/// The evaluated trajectory. Only the bound variants carry conic elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trajectory {
    Circle(ClosedConic),
    EllipseHigh(ClosedConic),
    EllipseLow(ClosedConic),
    Escape,
}

impl Trajectory {
    pub fn orbit_type(&self) -> OrbitType {
        match self {
            Trajectory::Circle(_) => OrbitType::Circle,
            Trajectory::EllipseHigh(_) => OrbitType::EllipseHigh,
            Trajectory::EllipseLow(_) => OrbitType::EllipseLow,
            Trajectory::Escape => OrbitType::Escape,
        }
    }

    /// Conic elements, or `None` for an escape trajectory.
    pub fn conic(&self) -> Option<&ClosedConic> {
        match self {
            Trajectory::Circle(c) | Trajectory::EllipseHigh(c) | Trajectory::EllipseLow(c) => {
                Some(c)
            }
            Trajectory::Escape => None,
        }
    }
}

/// Result of evaluating one sample. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitResult {
    pub input: OrbitInput,
    pub radius_m: f64,
    pub velocity_m_s: f64,
    pub circular_velocity_m_s: f64,
    pub escape_velocity_m_s: f64,
    /// Infinite for an exactly parabolic sample, negative for hyperbolic ones.
    pub semi_major_axis_m: f64,
    pub trajectory: Trajectory,
    pub assumptions: &'static str,
}

impl OrbitResult {
    pub fn orbit_type(&self) -> OrbitType {
        self.trajectory.orbit_type()
    }

    pub fn conic(&self) -> Option<&ClosedConic> {
        self.trajectory.conic()
    }

    pub fn radius_km(&self) -> f64 {
        m_to_km(self.radius_m)
    }

    pub fn circular_velocity_kms(&self) -> f64 {
        ms_to_kms(self.circular_velocity_m_s)
    }

    pub fn escape_velocity_kms(&self) -> f64 {
        ms_to_kms(self.escape_velocity_m_s)
    }

    pub fn semi_major_axis_km(&self) -> f64 {
        m_to_km(self.semi_major_axis_m)
    }
}

/// Evaluate a sample with the default circularity tolerance.
///
/// Caller contract: `height_km >= 0` and `speed_kms > 0`. These are not re-checked here;
/// see [`crate::input::validate_orbit_input`].
pub fn evaluate_orbit(
    height_km: f64,
    speed_kms: f64,
    constants: &PhysicalConstants,
) -> OrbitResult {
    evaluate_orbit_with_tolerance(height_km, speed_kms, constants, DEFAULT_CIRCULAR_TOLERANCE)
}

/// Evaluate a sample, treating speeds within `tolerance` (relative) of circular as a circle.
pub fn evaluate_orbit_with_tolerance(
    height_km: f64,
    speed_kms: f64,
    constants: &PhysicalConstants,
    tolerance: f64,
) -> OrbitResult {
    let mu = constants.mu();
    let r = constants.radius_at_height_km(height_km);
    let v = kms_to_ms(speed_kms);

    let v_circ = circular_velocity(mu, r);
    let v_esc = escape_velocity(mu, r);
    let orbit_type = classify_orbit(v, v_circ, v_esc, tolerance);
    let a = semi_major_axis(mu, r, v);

    let trajectory = match orbit_type {
        OrbitType::Escape => Trajectory::Escape,
        OrbitType::Circle => Trajectory::Circle(closed_conic(constants, r, v, a)),
        OrbitType::EllipseHigh => Trajectory::EllipseHigh(closed_conic(constants, r, v, a)),
        OrbitType::EllipseLow => Trajectory::EllipseLow(closed_conic(constants, r, v, a)),
    };

    debug!(
        height_km,
        speed_kms,
        orbit_type = orbit_type.as_str(),
        semi_major_axis_m = a,
        "evaluated orbit sample"
    );

    OrbitResult {
        input: OrbitInput {
            height_km,
            speed_kms,
        },
        radius_m: r,
        velocity_m_s: v,
        circular_velocity_m_s: v_circ,
        escape_velocity_m_s: v_esc,
        semi_major_axis_m: a,
        trajectory,
        assumptions: MODEL_ASSUMPTIONS,
    }
}

fn closed_conic(constants: &PhysicalConstants, r_m: f64, v_m_s: f64, a_m: f64) -> ClosedConic {
    let mu = constants.mu();
    let h = angular_momentum(r_m, v_m_s);
    let e = eccentricity(a_m, h, mu);
    let (rp, ra) = periapsis_apoapsis(a_m, e);
    ClosedConic {
        eccentricity: e,
        periapsis_m: rp,
        apoapsis_m: ra,
        periapsis_altitude_m: rp - constants.radius_m(),
        apoapsis_altitude_m: ra - constants.radius_m(),
        period_s: period(mu, a_m),
    }
}
