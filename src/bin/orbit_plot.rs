use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};
use chrono::Local;
use clap::Parser;
use kepler_calculator::analysis::{
    Severity, evaluate_orbit, has_errors, plan_hohmann_transfer, validate_height,
    validate_orbit_input,
};
use kepler_calculator::body::select_body;
use kepler_calculator::export::{
    format_transfer_report, orbit_plot_file_name, transfer_plot_file_name,
};
use kepler_calculator::geometry::{
    GeometryPoint, OrbitGeometry, generate_reference_body_geometry, orbit_geometry,
    transfer_geometry,
};
use kepler_calculator::logging;
use plotters::prelude::*;
use tracing::{error, info};

const BODY_OUTLINE_POINTS: usize = 360;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the evaluated orbit (and optional Hohmann transfer) to PNG"
)]
struct Cli {
    /// Height above the reference surface in km
    #[arg(long, allow_negative_numbers = true)]
    height: f64,

    /// Tangential speed in km/s
    #[arg(long, allow_negative_numbers = true)]
    speed: f64,

    /// Also draw the Hohmann transfer ellipse to a circular orbit at this height (km)
    #[arg(long, allow_negative_numbers = true)]
    transfer_to: Option<f64>,

    /// Samples per revolution for orbit curves
    #[arg(long, default_value_t = 720)]
    points: usize,

    /// Central body name from the catalog (case-insensitive)
    #[arg(long, default_value = "earth")]
    body: String,

    /// Body catalog: directory of TOML files or a YAML list
    #[arg(long, default_value = "configs/bodies")]
    catalog: PathBuf,

    /// Output PNG path (defaults to a timestamped name in --output-dir)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory for timestamped output names
    #[arg(long, default_value = "data")]
    output_dir: PathBuf,

    /// Image edge length in pixels
    #[arg(long, default_value_t = 900)]
    size: u32,

    /// Skip captions, axis labels and legend (for hosts without system fonts)
    #[arg(long, default_value_t = false)]
    plain: bool,
}

struct Layer {
    label: &'static str,
    color: RGBColor,
    points: Vec<GeometryPoint>,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let body = select_body(&cli.catalog, &cli.body)?;

    let mut issues = validate_orbit_input(cli.height, cli.speed, body.atmosphere_limit_km);
    if let Some(target) = cli.transfer_to {
        issues.extend(validate_height(target, body.atmosphere_limit_km));
    }
    if has_errors(&issues) {
        for issue in issues.iter().filter(|i| i.severity() == Severity::Error) {
            error!("{issue}");
        }
        bail!("aborting: invalid orbit input");
    }

    let result = evaluate_orbit(cli.height, cli.speed, &body.constants);
    let orbit_points: Vec<GeometryPoint> = match orbit_geometry(&result, cli.points) {
        OrbitGeometry::Closed(points) => points.collect(),
        OrbitGeometry::NotApplicable => {
            info!("escape trajectory; nothing to plot");
            println!("Escape trajectory: no closed orbit, no plot written.");
            return Ok(());
        }
    };

    let mut layers = vec![
        Layer {
            label: "Central body",
            color: RGBColor(70, 130, 180),
            points: generate_reference_body_geometry(&body.constants, BODY_OUTLINE_POINTS)
                .collect(),
        },
        Layer {
            label: "Orbit",
            color: RGBColor(200, 40, 40),
            points: orbit_points,
        },
    ];

    let now = Local::now().naive_local();
    let (title, default_name, plan) = match cli.transfer_to {
        Some(target) => {
            let plan = plan_hohmann_transfer(cli.height, target, &body.constants);
            layers.push(Layer {
                label: "Transfer ellipse",
                color: RGBColor(34, 139, 34),
                points: transfer_geometry(&plan, cli.points).collect(),
            });
            (
                format!(
                    "Orbit + Hohmann transfer ({} -> circle @ {:.0} km)",
                    result.orbit_type(),
                    target
                ),
                transfer_plot_file_name(cli.height, target, now),
                Some(plan),
            )
        }
        None => (
            format!("Orbit - {}", result.orbit_type()),
            orbit_plot_file_name(cli.height, result.orbit_type(), now),
            None,
        ),
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.output_dir.join(default_name));
    render(&output, cli.size, &title, &layers, cli.plain)?;
    info!(path = %output.display(), "plot written");
    println!("Saved plot: {}", output.display());

    if let Some(plan) = plan {
        println!("\n{}", format_transfer_report(&plan));
    }

    Ok(())
}

fn render(
    path: &Path,
    size: u32,
    title: &str,
    layers: &[Layer],
    plain: bool,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = path
        .to_str()
        .ok_or_else(|| anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (size, size)).into_drawing_area();
    root.fill(&WHITE)?;

    // Square, origin-centred window so both axes share one scale.
    let extent = layers
        .iter()
        .flat_map(|layer| layer.points.iter())
        .map(|p| p.x_km.abs().max(p.y_km.abs()))
        .fold(0.0_f64, f64::max)
        * 1.1;
    if !(extent.is_finite() && extent > 0.0) {
        bail!("nothing to draw");
    }

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if !plain {
        builder
            .caption(title, caption_font)
            .x_label_area_size(50)
            .y_label_area_size(80);
    }
    let mut chart = builder.build_cartesian_2d(-extent..extent, -extent..extent)?;

    if !plain {
        chart
            .configure_mesh()
            .x_desc("x (km)")
            .y_desc("y (km)")
            .label_style(label_font.clone())
            .x_label_formatter(&|v| format!("{v:.0}"))
            .y_label_formatter(&|v| format!("{v:.0}"))
            .draw()?;
    }

    for layer in layers {
        let mut closed: Vec<(f64, f64)> =
            layer.points.iter().map(|p| (p.x_km, p.y_km)).collect();
        if let Some(first) = closed.first().copied() {
            closed.push(first);
        }
        let color = layer.color;
        let series = chart.draw_series(LineSeries::new(closed, color.stroke_width(2)))?;
        if !plain {
            series.label(layer.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
    }

    if !plain {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(label_font)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}
