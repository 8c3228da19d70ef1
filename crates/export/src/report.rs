//! Plain-text reports for evaluated orbits and transfer plans.

use kepler_analysis::{OrbitResult, TransferPlan, Trajectory};
use kepler_core::time::seconds_to_minutes;
use kepler_core::units::{m_to_km, ms_to_kms};

/// Render an orbit evaluation as a multi-line report.
pub fn format_orbit_report(result: &OrbitResult) -> String {
    let mut lines = vec![
        "=== Orbit Report ===".to_string(),
        format!(
            "Input: height {:.0} km, speed {:.2} km/s",
            result.input.height_km, result.input.speed_kms
        ),
        format!("Type: {}", result.orbit_type()),
        format!(
            "Reference: v_circ {:.2} km/s, v_esc {:.2} km/s",
            result.circular_velocity_kms(),
            result.escape_velocity_kms()
        ),
        format!("a: {:.0} km", result.semi_major_axis_km()),
    ];

    match &result.trajectory {
        Trajectory::Circle(conic)
        | Trajectory::EllipseHigh(conic)
        | Trajectory::EllipseLow(conic) => {
            lines.push(format!(
                "Periapsis: {:.0} km   Apoapsis: {:.0} km",
                m_to_km(conic.periapsis_altitude_m),
                m_to_km(conic.apoapsis_altitude_m)
            ));
            lines.push(format!("Eccentricity: {:.4}", conic.eccentricity));
            lines.push(format!("Period: {:.1} min", seconds_to_minutes(conic.period_s)));
        }
        Trajectory::Escape => {
            lines.push(
                "Escape trajectory: no closed orbit, no periapsis/apoapsis pair".to_string(),
            );
        }
    }

    lines.push(format!("Assumptions: {}", result.assumptions));
    lines.join("\n")
}

/// Render a Hohmann plan as a multi-line report.
pub fn format_transfer_report(plan: &TransferPlan) -> String {
    [
        "=== Hohmann Transfer ===".to_string(),
        format!(
            "From: {:.0} km  ->  To: {:.0} km",
            plan.from_height_km, plan.to_height_km
        ),
        format!(
            "Circular radii: r1={:.0} km, r2={:.0} km",
            m_to_km(plan.r1_m),
            m_to_km(plan.r2_m)
        ),
        format!(
            "dv1: {:.1} m/s ({:.3} km/s)",
            plan.dv1_m_s,
            ms_to_kms(plan.dv1_m_s)
        ),
        format!(
            "dv2: {:.1} m/s ({:.3} km/s)",
            plan.dv2_m_s,
            ms_to_kms(plan.dv2_m_s)
        ),
        format!(
            "dv_total: {:.1} m/s ({:.3} km/s)",
            plan.dv_total_m_s,
            ms_to_kms(plan.dv_total_m_s)
        ),
        format!(
            "Transfer time: {:.1} min ({:.0} s)",
            plan.transfer_time_minutes(),
            plan.transfer_time_s
        ),
    ]
    .join("\n")
}
