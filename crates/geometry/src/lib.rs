//! Discretised planar geometry for closed orbits, Hohmann transfer ellipses, and the central body.
//!
//! Points are in kilometres with the body centre at the origin and periapsis on the +x axis.
//! Every generator is a plain iterator over `i in 0..N` at `θ = 2π·i/N`; cloning it or
//! calling the constructor again restarts the sequence.

use std::f64::consts::TAU;

use kepler_analysis::{OrbitResult, TransferPlan};
use kepler_core::PhysicalConstants;
use kepler_core::units::m_to_km;
use serde::Serialize;

/// Largest eccentricity sampled; anything closer to a parabola is clamped down.
pub const MAX_SAMPLED_ECCENTRICITY: f64 = 1.0 - 1.0e-6;
/// Denominators `1 + e·cosθ` smaller than this are skipped.
const SINGULAR_DENOMINATOR: f64 = 1.0e-12;

/// Planar coordinate in kilometres relative to the body centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryPoint {
    pub x_km: f64,
    pub y_km: f64,
}

impl GeometryPoint {
    pub fn radius_km(&self) -> f64 {
        self.x_km.hypot(self.y_km)
    }
}

/// Samples of `r(θ) = a(1-e²)/(1 + e·cosθ)`.
///
/// Yields at most `point_count` points; singular angles are skipped, and a semi-major axis
/// that is not finite and positive yields nothing.
#[derive(Debug, Clone)]
pub struct ConicPoints {
    semi_latus_rectum_km: f64,
    eccentricity: f64,
    index: usize,
    point_count: usize,
}

impl ConicPoints {
    fn new(a_m: f64, e: f64, point_count: usize) -> Self {
        let e = e.clamp(0.0, MAX_SAMPLED_ECCENTRICITY);
        let a_km = m_to_km(a_m);
        let point_count = if a_km.is_finite() && a_km > 0.0 {
            point_count
        } else {
            0
        };
        Self {
            semi_latus_rectum_km: a_km * (1.0 - e * e),
            eccentricity: e,
            index: 0,
            point_count,
        }
    }
}

impl Iterator for ConicPoints {
    type Item = GeometryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.point_count {
            let theta = TAU * (self.index as f64 / self.point_count as f64);
            self.index += 1;
            let denom = 1.0 + self.eccentricity * theta.cos();
            if denom.abs() < SINGULAR_DENOMINATOR {
                continue;
            }
            let r_km = self.semi_latus_rectum_km / denom;
            return Some(GeometryPoint {
                x_km: r_km * theta.cos(),
                y_km: r_km * theta.sin(),
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.point_count - self.index))
    }
}

/// Circle of fixed radius sampled at the same angles as [`ConicPoints`].
#[derive(Debug, Clone)]
pub struct CirclePoints {
    radius_km: f64,
    index: usize,
    point_count: usize,
}

impl Iterator for CirclePoints {
    type Item = GeometryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.point_count {
            return None;
        }
        let theta = TAU * (self.index as f64 / self.point_count as f64);
        self.index += 1;
        Some(GeometryPoint {
            x_km: self.radius_km * theta.cos(),
            y_km: self.radius_km * theta.sin(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.point_count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CirclePoints {}

/// Geometry for an evaluated orbit: a closed curve, or nothing for escape trajectories.
#[derive(Debug, Clone)]
pub enum OrbitGeometry {
    Closed(ConicPoints),
    NotApplicable,
}

impl OrbitGeometry {
    /// The point sequence, if the orbit is closed.
    pub fn points(self) -> Option<ConicPoints> {
        match self {
            OrbitGeometry::Closed(points) => Some(points),
            OrbitGeometry::NotApplicable => None,
        }
    }
}

/// Sample a closed conic with semi-major axis `a_m` (metres) and eccentricity `e`.
pub fn generate_orbit_geometry(a_m: f64, e: f64, point_count: usize) -> ConicPoints {
    ConicPoints::new(a_m, e, point_count)
}

/// Outline of the reference body as a circle of its radius.
pub fn generate_reference_body_geometry(
    constants: &PhysicalConstants,
    point_count: usize,
) -> CirclePoints {
    CirclePoints {
        radius_km: m_to_km(constants.radius_m()),
        index: 0,
        point_count,
    }
}

/// Geometry of an evaluated orbit; escape trajectories have none.
pub fn orbit_geometry(result: &OrbitResult, point_count: usize) -> OrbitGeometry {
    match result.conic() {
        Some(conic) => OrbitGeometry::Closed(generate_orbit_geometry(
            result.semi_major_axis_m,
            conic.eccentricity,
            point_count,
        )),
        None => OrbitGeometry::NotApplicable,
    }
}

/// Geometry of a Hohmann transfer ellipse, periapsis on +x.
pub fn transfer_geometry(plan: &TransferPlan, point_count: usize) -> ConicPoints {
    let ellipse = plan.transfer_ellipse();
    generate_orbit_geometry(ellipse.semi_major_axis_m, ellipse.eccentricity, point_count)
}
