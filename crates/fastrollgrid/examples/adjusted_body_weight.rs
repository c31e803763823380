//! Adjusted body weight chart data.
//!
//! Samples the adjusted-body-weight formula over the weight/height plane
//! and prints the ideal-body-weight line a chart overlays as a scatter.

use fastrollgrid::prelude::*;

fn main() -> Result<(), RollgridError> {
    println!("{}", "=".repeat(72));
    println!("Adjusted Body Weight (adjBW) Chart");
    println!("{}", "=".repeat(72));

    // 105 to 350 lbs at 1 lb, 60 to 84 inches (5 ft to 7 ft) at 1 in
    let body_weight = NumericRange::new(105.0, 351.0, 1.0);
    let body_height = NumericRange::new(60.0, 85.0, 1.0);

    let field = Grid::new().build()?.sample(&body_weight, &body_height, |weight, height| {
        formulas::adjusted_body_weight_kg(height, weight)
    })?;

    println!("{}", field);

    // The ideal-weight overlay: one point per height, back in pounds
    println!("Ideal body weight by height:");
    println!("{:>12} {:>12}", "Height (in)", "IBW (lbs)");
    println!("{:-<25}", "");
    for height in body_height.values().into_iter().step_by(4) {
        let ideal_lbs = formulas::kg_to_lb(formulas::ideal_body_weight_kg(height));
        println!("{:>12.0} {:>12.1}", height, ideal_lbs);
    }

    Ok(())
}
