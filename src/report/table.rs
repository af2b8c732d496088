// ==========================================
// Termék önköltség-számítás - table rendering
// ==========================================
// Plain-text tables: one label column, one column per product, and (for
// the breakdown table) a company-wide total column. Labels come from the
// active locale catalog.
// ==========================================

use crate::domain::cost::{CostBreakdown, CostInput};
use crate::i18n::{t, t_with_args};

/// Sum of a report column.
fn column_sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Display width in characters (accented Hungarian labels are all
/// single-width, so char count is sufficient).
fn width(s: &str) -> usize {
    s.chars().count()
}

// ==========================================
// ReportRenderer
// ==========================================
pub struct ReportRenderer {
    decimal_places: usize,
}

impl ReportRenderer {
    pub fn new(decimal_places: usize) -> Self {
        ReportRenderer { decimal_places }
    }

    fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }

    /// Cost-breakdown table: one row per cost category, one column per
    /// product plus the company total.
    pub fn cost_breakdown_table(
        &self,
        products: &[String],
        input: &CostInput,
        breakdown: &CostBreakdown,
    ) -> String {
        let mut header = vec![t("report.description")];
        for name in products {
            header.push(t_with_args("report.product_column", &[("name", name)]));
        }
        header.push(t("report.company_total"));

        let rows: [(&str, &[f64]); 8] = [
            ("report.row.material", &input.material),
            ("report.row.labor", &input.labor),
            ("report.row.other", &input.other),
            ("report.row.total_direct", &breakdown.total_direct),
            (
                "report.row.operating_overhead",
                &breakdown.operating_allocation,
            ),
            ("report.row.restricted", &breakdown.restricted),
            (
                "report.row.company_overhead",
                &breakdown.company_allocation,
            ),
            ("report.row.total_cost", &breakdown.total_cost),
        ];

        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|(key, values)| {
                let mut row = vec![t(key)];
                for value in values.iter() {
                    row.push(self.format_value(*value));
                }
                row.push(self.format_value(column_sum(values)));
                row
            })
            .collect();

        render_table(&header, &body)
    }

    /// Unit-cost table: one row per unit-cost category, one column per
    /// product. No total column; unit costs do not add up across
    /// products.
    pub fn unit_cost_table(&self, products: &[String], breakdown: &CostBreakdown) -> String {
        let mut header = vec![String::new()];
        for name in products {
            header.push(t_with_args("report.unit.product_column", &[("name", name)]));
        }

        let rows: [(&str, &[f64]); 3] = [
            ("report.unit.direct", &breakdown.direct_unit_cost),
            ("report.unit.restricted", &breakdown.restricted_unit_cost),
            ("report.unit.total", &breakdown.unit_cost),
        ];

        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|(key, values)| {
                let mut row = vec![t(key)];
                for value in values.iter() {
                    row.push(self.format_value(*value));
                }
                row
            })
            .collect();

        render_table(&header, &body)
    }
}

impl Default for ReportRenderer {
    fn default() -> Self {
        ReportRenderer::new(2)
    }
}

/// Pad-and-join rendering. First column left-aligned, value columns
/// right-aligned, a dashed rule under the header.
fn render_table(header: &[String], body: &[Vec<String>]) -> String {
    let columns = header.len();
    let mut widths: Vec<usize> = header.iter().map(|h| width(h)).collect();
    for row in body {
        for (i, cell) in row.iter().enumerate() {
            if widths[i] < width(cell) {
                widths[i] = width(cell);
            }
        }
    }

    let render_row = |row: &[String]| -> String {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i] - width(cell);
                if i == 0 {
                    format!("{}{}", cell, " ".repeat(pad))
                } else {
                    format!("{}{}", " ".repeat(pad), cell)
                }
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render_row(header));
    let rule_len = widths.iter().sum::<usize>() + 2 * (columns - 1);
    lines.push("-".repeat(rule_len));
    for row in body {
        lines.push(render_row(row));
    }
    lines.join("\n")
}
