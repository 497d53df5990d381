//! Take-home pay display

use crate::models::Frequency;
use crate::services::projection::IncomeSummary;

use super::report::{format_bps, format_percentage, format_whole};

/// Format an income summary as label/value lines
pub fn format_income_summary(summary: &IncomeSummary, symbol: &str) -> String {
    let rows = [
        ("Gross income", format_whole(summary.annual_gross, symbol)),
        ("Income tax", format_whole(summary.income_tax, symbol)),
        ("Medicare levy", format_whole(summary.medicare_levy, symbol)),
        ("Net income", format_whole(summary.net_annual, symbol)),
        ("Super (employer)", format_whole(summary.super_contribution, symbol)),
        ("Effective rate", format_percentage(summary.effective_rate_pct(), 1)),
        ("Marginal rate", format_bps(summary.marginal_rate_bps)),
    ];

    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{:<18}{:>14}\n", label, value));
    }

    output.push('\n');
    output.push_str("Take-home pay\n");
    for frequency in [Frequency::Weekly, Frequency::Fortnightly, Frequency::Monthly] {
        output.push_str(&format!(
            "  {:<16}{:>14}\n",
            frequency.as_str(),
            format_whole(summary.net_per(frequency), symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeParameters, Money, TaxSchedule};

    #[test]
    fn test_income_summary_lines() {
        let income = IncomeParameters::salary(Money::from_dollars(45_000), Frequency::Yearly);
        let summary = IncomeSummary::compute(&income, &TaxSchedule::default()).unwrap();
        let output = format_income_summary(&summary, "$");

        assert!(output.contains("$45,000"));
        assert!(output.contains("$4,288"));
        assert!(output.contains("$900"));
        // 45,000 - 4,288 - 900
        assert!(output.contains("$39,812"));
        assert!(output.contains("16%"));
    }
}
