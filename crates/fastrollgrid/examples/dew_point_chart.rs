//! Dew-point temperature chart data.
//!
//! Samples the dew-point formula over the air-temperature /
//! relative-humidity plane (the field a contour chart renders) and prints
//! the chart framing and a few reference readings.

use fastrollgrid::prelude::*;

fn main() -> Result<(), RollgridError> {
    println!("{}", "=".repeat(72));
    println!("Dew Point Temperature Chart");
    println!("{}", "=".repeat(72));

    // Axis domains: degrees C and percent relative humidity
    let air_temp = NumericRange::new(-60.0, 60.0, 1.0);
    let rel_hum = NumericRange::new(0.0, 100.0, 1.0);

    let field = Grid::new()
        .parallel(true)
        .build()?
        .sample(&air_temp, &rel_hum, formulas::dew_point_temp)?;

    let bounds = AxisBounds::from_ranges(&air_temp, &rel_hum)?;
    println!("Axis bounds: {:?}", bounds.as_array());
    println!();
    println!("{}", field);

    // A few spot readings along the 50% humidity row
    println!("Spot readings at 50% relative humidity:");
    for air in [-20.0_f64, 0.0, 20.0, 40.0] {
        let dpt = formulas::dew_point_temp(air, 50.0);
        println!(
            "  air {:>6.1} C ({:>6.1} F)  ->  dew point {:>7.2} C",
            air,
            formulas::celsius_to_fahrenheit(air),
            dpt
        );
    }

    Ok(())
}
