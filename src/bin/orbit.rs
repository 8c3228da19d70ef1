use std::path::PathBuf;

use anyhow::bail;
use chrono::Local;
use clap::Parser;
use kepler_calculator::analysis::{
    InputIssue, Severity, evaluate_orbit, has_errors, validate_orbit_input,
};
use kepler_calculator::base::PhysicalConstants;
use kepler_calculator::body::select_body;
use kepler_calculator::export::{format_orbit_report, report_file_name, save_report, write_json};
use kepler_calculator::logging;
use tracing::{error, info};

/// Reference cases printed by `--demo`: (title, height km, speed km/s).
const DEMO_CASES: [(&str, f64, f64); 2] = [
    ("LEO ~400 km, near circular", 400.0, 7.67),
    ("GEO ~35786 km, circular", 35_786.0, 3.07),
];

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Classify the orbit reached from an altitude/speed sample"
)]
struct Cli {
    /// Height above the reference surface in km
    #[arg(long, allow_negative_numbers = true, required_unless_present = "demo")]
    height: Option<f64>,

    /// Tangential speed in km/s
    #[arg(long, allow_negative_numbers = true, required_unless_present = "demo")]
    speed: Option<f64>,

    /// Central body name from the catalog (case-insensitive)
    #[arg(long, default_value = "earth")]
    body: String,

    /// Body catalog: directory of TOML files or a YAML list
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Print the Earth LEO and GEO reference cases first
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Save the text report into this directory
    #[arg(long)]
    save: Option<PathBuf>,

    /// Write the result record as JSON (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    if cli.demo {
        let earth = PhysicalConstants::earth();
        for (title, height_km, speed_kms) in DEMO_CASES {
            println!("--- Demo: {title} ---");
            let result = evaluate_orbit(height_km, speed_kms, &earth);
            println!("{}\n", format_orbit_report(&result));
        }
    }

    let (Some(height_km), Some(speed_kms)) = (cli.height, cli.speed) else {
        return Ok(());
    };

    let body = select_body(&cli.catalog, &cli.body)?;
    let issues = validate_orbit_input(height_km, speed_kms, body.atmosphere_limit_km);
    report_errors(&issues);
    if has_errors(&issues) {
        bail!("aborting: invalid orbit input");
    }

    let result = evaluate_orbit(height_km, speed_kms, &body.constants);
    let report = format_orbit_report(&result);
    println!("{report}");

    if let Some(dir) = &cli.save {
        let name = report_file_name(height_km, speed_kms, Local::now().naive_local());
        let path = save_report(dir, &name, &report)?;
        info!(path = %path.display(), "saved report");
        println!("Saved: {}", path.display());
    }

    if let Some(path) = &cli.json {
        write_json(path, &result)?;
    }

    Ok(())
}

fn report_errors(issues: &[InputIssue]) {
    for issue in issues {
        if issue.severity() == Severity::Error {
            error!("{issue}");
        }
    }
}
