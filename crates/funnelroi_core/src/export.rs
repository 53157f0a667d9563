//! Delimited-text (CSV) rendering of an evaluation set.
//!
//! One header row, one row for the baseline, then one row per scenario in
//! input order. Undefined numeric fields (null ROI, no payback) serialize
//! as empty fields.

use crate::model::EvaluationSet;

pub const CSV_HEADER: [&str; 14] = [
    "Name",
    "Horizon (months)",
    "Visits",
    "Forms",
    "SQLs",
    "Opportunities",
    "Wins",
    "Revenue",
    "Gross Profit",
    "Incremental Revenue",
    "Incremental Gross Profit",
    "Total Cost",
    "ROI",
    "Payback (months)",
];

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn num(value: f64) -> String {
    if value.is_finite() {
        format!("{value}")
    } else {
        String::new()
    }
}

/// Render an evaluation set as CSV text.
pub fn to_csv(horizon: u32, set: &EvaluationSet) -> String {
    let mut lines = Vec::with_capacity(set.scenarios.len() + 2);
    lines.push(
        CSV_HEADER
            .iter()
            .map(|field| quote(field))
            .collect::<Vec<_>>()
            .join(","),
    );

    let base = &set.baseline_totals;
    lines.push(
        [
            quote("Baseline"),
            horizon.to_string(),
            num(base.visits),
            num(base.forms),
            num(base.sqls),
            num(base.opps),
            num(base.wins),
            num(base.revenue),
            num(base.gross_profit),
            num(0.0),
            num(0.0),
            num(0.0),
            String::new(),
            String::new(),
        ]
        .join(","),
    );

    for result in &set.scenarios {
        lines.push(
            [
                quote(&result.name),
                horizon.to_string(),
                num(result.totals.visits),
                num(result.totals.forms),
                num(result.totals.sqls),
                num(result.totals.opps),
                num(result.totals.wins),
                num(result.totals.revenue),
                num(result.totals.gross_profit),
                num(result.incremental_revenue),
                num(result.incremental_gp),
                num(result.total_cost),
                result.roi.map(num).unwrap_or_default(),
                result
                    .payback
                    .map(|month| month.to_string())
                    .unwrap_or_default(),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}
