//! Analytic estimators for impulsive transfers in the coplanar, circular limit.
//!
//! All quantities are SI: radii in metres, μ in m³/s², speeds in m/s, times in seconds.

use std::f64::consts::PI;

use kepler_orbits::circular_velocity;

/// Burn magnitudes for a Hohmann transfer between circular, coplanar orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannDeltaV {
    pub dv1_m_s: f64,
    pub dv2_m_s: f64,
    pub dv_total_m_s: f64,
}

/// Shape of the transfer ellipse tangent to both circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferEllipse {
    pub semi_major_axis_m: f64,
    pub eccentricity: f64,
}

/// Delta-v magnitudes of the two Hohmann burns between circular orbits of radii `r1_m` and `r2_m`.
///
/// Both burns are reported as magnitudes, so raising (`r2 > r1`) and lowering (`r2 < r1`)
/// manoeuvres give the same budget.
pub fn hohmann_delta_v(mu_m3_s2: f64, r1_m: f64, r2_m: f64) -> HohmannDeltaV {
    let v1 = circular_velocity(mu_m3_s2, r1_m);
    let v2 = circular_velocity(mu_m3_s2, r2_m);
    let a_t = 0.5 * (r1_m + r2_m);

    // Transfer speed at r1 (departure apsis) and r2 (arrival apsis)
    let v_p = (mu_m3_s2 * (2.0 / r1_m - 1.0 / a_t)).sqrt();
    let v_a = (mu_m3_s2 * (2.0 / r2_m - 1.0 / a_t)).sqrt();

    let dv1 = (v_p - v1).abs();
    let dv2 = (v2 - v_a).abs();

    HohmannDeltaV {
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        dv_total_m_s: dv1 + dv2,
    }
}

/// Half the period of the transfer ellipse, `π·sqrt(a_t³/μ)` (s).
pub fn hohmann_transfer_time(mu_m3_s2: f64, r1_m: f64, r2_m: f64) -> f64 {
    let a_t = 0.5 * (r1_m + r2_m);
    PI * (a_t.powi(3) / mu_m3_s2).sqrt()
}

/// Semi-major axis and eccentricity of the ellipse touching both circles.
pub fn transfer_ellipse(r1_m: f64, r2_m: f64) -> TransferEllipse {
    TransferEllipse {
        semi_major_axis_m: 0.5 * (r1_m + r2_m),
        eccentricity: (r2_m - r1_m).abs() / (r1_m + r2_m),
    }
}
