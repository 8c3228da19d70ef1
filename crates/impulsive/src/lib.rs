//! Impulsive transfer utilities: classical two-impulse transfers between circular orbits.

pub mod transfers;

pub use transfers::{
    HohmannDeltaV, TransferEllipse, hohmann_delta_v, hohmann_transfer_time, transfer_ellipse,
};
