//! File naming and writers for reports, JSON records, and geometry CSVs.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use kepler_analysis::OrbitType;
use kepler_geometry::GeometryPoint;
use serde::Serialize;

use crate::ExportError;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// `run_<YYYYMMDD_HHMM>_height<H>km_speed<V>kms.txt`, with the speed's decimal point as `p`.
pub fn report_file_name(height_km: f64, speed_kms: f64, at: NaiveDateTime) -> String {
    let speed = format!("{speed_kms:.2}").replace('.', "p");
    format!(
        "run_{}_height{:.0}km_speed{}kms.txt",
        at.format("%Y%m%d_%H%M"),
        height_km,
        speed
    )
}

/// `orbit_<H>km_<type>_<YYYYMMDD_HHMMSS>.png`
pub fn orbit_plot_file_name(height_km: f64, orbit_type: OrbitType, at: NaiveDateTime) -> String {
    format!(
        "orbit_{}km_{}_{}.png",
        height_km.trunc() as i64,
        orbit_type,
        at.format("%Y%m%d_%H%M%S")
    )
}

/// `orbit_transfer_from<H1>km_to<H2>km_<YYYYMMDD_HHMMSS>.png`
pub fn transfer_plot_file_name(from_km: f64, to_km: f64, at: NaiveDateTime) -> String {
    format!(
        "orbit_transfer_from{}km_to{}km_{}.png",
        from_km.trunc() as i64,
        to_km.trunc() as i64,
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Write `text` into `dir/file_name`, creating `dir` if needed. Returns the written path.
pub fn save_report(dir: &Path, file_name: &str, text: &str) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, text)?;
    Ok(path)
}

/// Pretty-print any record as JSON to a path (or stdout for `-`).
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write points as CSV with an `x_km,y_km` header.
pub fn write_points_csv<W, I>(writer: W, points: I) -> Result<(), ExportError>
where
    W: Write,
    I: IntoIterator<Item = GeometryPoint>,
{
    let mut csv = csv::Writer::from_writer(writer);
    for point in points {
        csv.serialize(point)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(8, 5, 9))
            .unwrap()
    }

    #[test]
    fn file_names_follow_pattern() {
        assert_eq!(
            report_file_name(400.0, 7.67, stamp()),
            "run_20261019_0805_height400km_speed7p67kms.txt"
        );
        assert_eq!(
            orbit_plot_file_name(35786.4, OrbitType::EllipseLow, stamp()),
            "orbit_35786km_ellipse_low_20261019_080509.png"
        );
        assert_eq!(
            transfer_plot_file_name(400.0, 35786.0, stamp()),
            "orbit_transfer_from400km_to35786km_20261019_080509.png"
        );
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_points_csv(
            &mut buf,
            [
                GeometryPoint { x_km: 1.0, y_km: 0.0 },
                GeometryPoint { x_km: 0.0, y_km: -2.5 },
            ],
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "x_km,y_km\n1.0,0.0\n0.0,-2.5\n");
    }
}
