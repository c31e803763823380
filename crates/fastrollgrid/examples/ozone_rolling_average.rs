//! Ozone rolling-average chart data.
//!
//! Ingests a station CSV export (synthesized here with a diurnal cycle and
//! a few dropped readings), computes the margin-trimmed rolling average,
//! and flags positions above the 70 ppb threshold: the series a
//! time-series chart overlays on the raw measurements.

use chrono::{DateTime, TimeDelta, Utc};
use fastrollgrid::prelude::*;
use rollgrid_io::{ReaderConfig, TimeTableReader};

const THRESHOLD_PPB: f64 = 70.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "=".repeat(72));
    println!("Ozone Rolling Average");
    println!("{}", "=".repeat(72));

    let csv_data = synthesize_station_export();
    let table = TimeTableReader::with_config(ReaderConfig {
        comment_rows: 1,
        ..ReaderConfig::default()
    })
    .read_from(csv_data.as_bytes())?;

    let station = table.comments()[0]
        .split(": ")
        .nth(1)
        .unwrap_or("unknown station")
        .to_owned();
    println!("Station: {station}");
    println!("Rows kept: {}", table.len());

    let samples = table.samples("ozone_concentration_set_1")?;
    let result = Rolling::new()
        .window_radius(6)
        .margin(TimeDelta::hours(4))
        .build()?
        .compute_samples(&samples)?;

    println!();
    println!("{}", result);

    let over: Vec<usize> = (0..result.len())
        .filter(|&i| result.get(i).map(|v| v > THRESHOLD_PPB).unwrap_or(false))
        .collect();
    println!(
        "Positions above the {THRESHOLD_PPB} ppb threshold: {} of {} computed",
        over.len(),
        result.computed()
    );

    Ok(())
}

/// Build a three-day hourly export: one comment row, header, units, data.
/// Every 17th reading is dropped and a few cells are left empty.
fn synthesize_station_export() -> String {
    let start = DateTime::<Utc>::from_timestamp(1_504_224_000, 0).unwrap(); // 2017-09-01T00:00:00Z
    let mut out = String::from(
        "# Station Name: Mountain Met Lab\nDate_Time,ozone_concentration_set_1\n,ppb\n",
    );
    for hour in 0..72i64 {
        let at = (start + TimeDelta::hours(hour)).format("%Y-%m-%dT%H:%M:%SZ");
        if hour % 17 == 5 {
            // Dropped reading: timestamp present, cell empty
            out.push_str(&format!("{at},\n"));
        } else {
            let phase = (hour as f64) * std::f64::consts::PI / 12.0;
            let value = 58.0 + 16.0 * phase.sin();
            out.push_str(&format!("{at},{value:.1}\n"));
        }
    }
    out
}
