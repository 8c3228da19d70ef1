//! Two-body orbit formulas over (μ, radius, velocity) in SI units.
//!
//! Every function here is pure and total over its documented domain. Velocities are
//! assumed purely tangential, so the input radius is always an apsis of the resulting conic.

use std::f64::consts::PI;

/// Speed of a circular orbit at radius `r_m` (m/s).
#[inline]
pub fn circular_velocity(mu_m3_s2: f64, r_m: f64) -> f64 {
    (mu_m3_s2 / r_m).sqrt()
}

/// Parabolic escape speed at radius `r_m` (m/s).
#[inline]
pub fn escape_velocity(mu_m3_s2: f64, r_m: f64) -> f64 {
    (2.0 * mu_m3_s2 / r_m).sqrt()
}

/// Semi-major axis from the vis-viva equation, `a = 1 / (2/r - v²/μ)` (m).
///
/// An exactly parabolic state (`v² = 2μ/r`) has no finite semi-major axis; this returns
/// `f64::INFINITY` instead of dividing by zero. Hyperbolic states give a negative `a`.
pub fn semi_major_axis(mu_m3_s2: f64, r_m: f64, v_m_s: f64) -> f64 {
    let inv_a = 2.0 / r_m - v_m_s * v_m_s / mu_m3_s2;
    if inv_a == 0.0 {
        f64::INFINITY
    } else {
        1.0 / inv_a
    }
}

/// Specific angular momentum for a purely tangential velocity, `h = r·v` (m²/s).
#[inline]
pub fn angular_momentum(r_m: f64, v_m_s: f64) -> f64 {
    r_m * v_m_s
}

/// Eccentricity from semi-major axis and specific angular momentum.
///
/// `1 - h²/(aμ)` can dip just below zero for near-circular inputs; it is clamped to zero
/// before the square root.
pub fn eccentricity(a_m: f64, h_m2_s: f64, mu_m3_s2: f64) -> f64 {
    (1.0 - (h_m2_s * h_m2_s) / (a_m * mu_m3_s2)).max(0.0).sqrt()
}

/// Periapsis and apoapsis radii `(a(1-e), a(1+e))` (m).
#[inline]
pub fn periapsis_apoapsis(a_m: f64, e: f64) -> (f64, f64) {
    (a_m * (1.0 - e), a_m * (1.0 + e))
}

/// Orbital period `2π·sqrt(a³/μ)` (s). Only meaningful for bound orbits (`0 < a < ∞`).
#[inline]
pub fn period(mu_m3_s2: f64, a_m: f64) -> f64 {
    2.0 * PI * (a_m.powi(3) / mu_m3_s2).sqrt()
}
