use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use kepler_calculator::analysis::{
    Severity, has_errors, plan_hohmann_transfer, validate_height,
};
use kepler_calculator::body::select_body;
use kepler_calculator::export::{format_transfer_report, write_json};
use kepler_calculator::logging;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Hohmann transfer between two circular orbits (coplanar, impulsive)"
)]
struct Cli {
    /// Height of the initial circular orbit in km
    #[arg(long, allow_negative_numbers = true)]
    from: f64,

    /// Height of the target circular orbit in km
    #[arg(long, allow_negative_numbers = true)]
    to: f64,

    /// Central body name from the catalog (case-insensitive)
    #[arg(long, default_value = "earth")]
    body: String,

    /// Body catalog: directory of TOML files or a YAML list
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Write the transfer plan as JSON (use '-' for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let body = select_body(&cli.catalog, &cli.body)?;

    let mut issues = validate_height(cli.from, body.atmosphere_limit_km);
    issues.extend(validate_height(cli.to, body.atmosphere_limit_km));
    if has_errors(&issues) {
        for issue in issues.iter().filter(|i| i.severity() == Severity::Error) {
            error!("{issue}");
        }
        bail!("aborting: invalid transfer heights");
    }

    let plan = plan_hohmann_transfer(cli.from, cli.to, &body.constants);
    println!("{}", format_transfer_report(&plan));

    if let Some(path) = &cli.json {
        write_json(path, &plan)?;
    }

    Ok(())
}
