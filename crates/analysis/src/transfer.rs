//! Hohmann transfer between two circular orbits given by their altitudes.

use kepler_core::PhysicalConstants;
use kepler_core::time::seconds_to_minutes;
use kepler_impulsive::{TransferEllipse, hohmann_delta_v, hohmann_transfer_time, transfer_ellipse};
use serde::Serialize;
use tracing::debug;

/// Whether the manoeuvre raises or lowers the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    Raise,
    Lower,
    /// Both circles coincide; no burns are needed.
    Hold,
}

/// Two-impulse coplanar manoeuvre between circular orbits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferPlan {
    pub from_height_km: f64,
    pub to_height_km: f64,
    pub r1_m: f64,
    pub r2_m: f64,
    pub dv1_m_s: f64,
    pub dv2_m_s: f64,
    pub dv_total_m_s: f64,
    pub transfer_time_s: f64,
    pub direction: TransferDirection,
}

impl TransferPlan {
    pub fn transfer_time_minutes(&self) -> f64 {
        seconds_to_minutes(self.transfer_time_s)
    }

    /// Ellipse flown between the two burns.
    pub fn transfer_ellipse(&self) -> TransferEllipse {
        transfer_ellipse(self.r1_m, self.r2_m)
    }
}

/// Plan a Hohmann transfer between circular orbits at two altitudes above the reference surface.
///
/// Both endpoints are assumed circular and coplanar; no plane change is costed.
pub fn plan_hohmann_transfer(
    from_height_km: f64,
    to_height_km: f64,
    constants: &PhysicalConstants,
) -> TransferPlan {
    let r1 = constants.radius_at_height_km(from_height_km);
    let r2 = constants.radius_at_height_km(to_height_km);
    let dv = hohmann_delta_v(constants.mu(), r1, r2);
    let tof = hohmann_transfer_time(constants.mu(), r1, r2);

    let direction = if r2 > r1 {
        TransferDirection::Raise
    } else if r2 < r1 {
        TransferDirection::Lower
    } else {
        TransferDirection::Hold
    };

    debug!(
        from_height_km,
        to_height_km,
        dv_total_m_s = dv.dv_total_m_s,
        tof_s = tof,
        "planned hohmann transfer"
    );

    TransferPlan {
        from_height_km,
        to_height_km,
        r1_m: r1,
        r2_m: r2,
        dv1_m_s: dv.dv1_m_s,
        dv2_m_s: dv.dv2_m_s,
        dv_total_m_s: dv.dv_total_m_s,
        transfer_time_s: tof,
        direction,
    }
}
