//! Export helpers: plain-text reports, timestamped file names, JSON and CSV artifacts.

use std::io;

use thiserror::Error;

pub mod files;
pub mod report;

pub use files::{
    orbit_plot_file_name, report_file_name, save_report, transfer_plot_file_name, write_json,
    write_points_csv, writer_for_path,
};
pub use report::{format_orbit_report, format_transfer_report};

/// Failures while writing artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
}
