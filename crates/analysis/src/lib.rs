//! Orbit analysis: classify a tangential velocity sample, evaluate the resulting conic,
//! and plan Hohmann transfers between circular orbits.

pub mod classify;
pub mod evaluate;
pub mod input;
pub mod transfer;

pub use classify::{DEFAULT_CIRCULAR_TOLERANCE, OrbitType, classify_orbit};
pub use evaluate::{
    ClosedConic, MODEL_ASSUMPTIONS, OrbitInput, OrbitResult, Trajectory, evaluate_orbit,
    evaluate_orbit_with_tolerance,
};
pub use input::{InputIssue, Severity, has_errors, validate_height, validate_orbit_input};
pub use transfer::{TransferDirection, TransferPlan, plan_hohmann_transfer};
