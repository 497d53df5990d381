//! Projection table display

use crate::services::projection::{Projection, ProjectionPoint};

use super::report::{format_whole, separator};

fn format_row(point: &ProjectionPoint, symbol: &str) -> String {
    format!(
        "{:>5}  {:>14}  {:>14}  {:>14}\n",
        point.years,
        format_whole(point.contributed, symbol),
        format_whole(point.future_value, symbol),
        format_whole(point.growth, symbol),
    )
}

/// Format a projection: the chosen horizon followed by the checkpoint table
pub fn format_projection(title: &str, projection: &Projection, symbol: &str) -> String {
    let horizon = &projection.horizon;
    let mut output = String::new();

    output.push_str(&format!("{}\n", title));
    output.push_str(&format!(
        "Monthly contribution: {}\n",
        format_whole(projection.monthly_contribution, symbol)
    ));
    output.push_str(&format!(
        "After {} years: {} ({} contributed, {} growth)\n\n",
        horizon.years,
        format_whole(horizon.future_value, symbol),
        format_whole(horizon.contributed, symbol),
        format_whole(horizon.growth, symbol),
    ));

    output.push_str(&format!(
        "{:>5}  {:>14}  {:>14}  {:>14}\n",
        "Years", "Contributed", "Value", "Growth"
    ));
    output.push_str(&format!("{}\n", separator(53)));
    for point in &projection.checkpoints {
        output.push_str(&format_row(point, symbol));
    }

    output
}
