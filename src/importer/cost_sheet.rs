// ==========================================
// Termék önköltség-számítás - cost sheet parser
// ==========================================
// Reads a CSV cost sheet, one row per product. Headers are matched
// case-insensitively and both English and Hungarian spellings are
// accepted, so accountants can feed in their own sheets unchanged.
// ==========================================

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::domain::cost::CostInput;
use crate::importer::error::{ImportError, ImportResult};

// ==========================================
// Imported sheet
// ==========================================

/// Per-product vectors read from a cost sheet, before the overhead pools
/// (which arrive separately) are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CostSheet {
    /// Product labels, either from the sheet or generated (A, B, C, ...)
    pub products: Vec<String>,
    pub material: Vec<f64>,
    pub labor: Vec<f64>,
    pub other: Vec<f64>,
    pub production_units: Vec<f64>,
}

impl CostSheet {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Attach the overhead pools, producing an engine input.
    pub fn into_cost_input(self, operating_overhead: f64, company_overhead: f64) -> CostInput {
        CostInput {
            material: self.material,
            labor: self.labor,
            other: self.other,
            production_units: self.production_units,
            operating_overhead,
            company_overhead,
        }
    }
}

/// Generated product labels: A, B, ..., Z, A2, B2, ...
pub fn default_product_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let letter = (b'A' + (i % 26) as u8) as char;
            if i < 26 {
                letter.to_string()
            } else {
                format!("{}{}", letter, i / 26 + 1)
            }
        })
        .collect()
}

// ==========================================
// Column header synonyms (en / hu)
// ==========================================

const PRODUCT_HEADERS: &[&str] = &["product", "name", "termék", "termek", "megnevezés"];
const MATERIAL_HEADERS: &[&str] = &["material", "anyagköltség", "anyag"];
const LABOR_HEADERS: &[&str] = &["labor", "bérköltség", "bér"];
const OTHER_HEADERS: &[&str] = &["other", "egyéb"];
const UNITS_HEADERS: &[&str] = &["units", "production_units", "darab", "darabszám"];

// ==========================================
// CSV importer
// ==========================================
pub struct CostSheetImporter;

impl CostSheetImporter {
    pub fn new() -> Self {
        CostSheetImporter
    }

    /// Parse a CSV cost sheet.
    ///
    /// # Expected columns
    /// - material / labor / other / units (required, numeric)
    /// - product (optional; labels generated when absent)
    ///
    /// Blank rows are skipped. Any unparsable numeric cell fails the
    /// whole import with the row and column named.
    pub fn import(&self, path: &Path) -> ImportResult<CostSheet> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let product_col = find_column(&headers, PRODUCT_HEADERS);
        let material_col = require_column(&headers, "material", MATERIAL_HEADERS)?;
        let labor_col = require_column(&headers, "labor", LABOR_HEADERS)?;
        let other_col = require_column(&headers, "other", OTHER_HEADERS)?;
        let units_col = require_column(&headers, "units", UNITS_HEADERS)?;

        let mut sheet = CostSheet {
            products: Vec::new(),
            material: Vec::new(),
            labor: Vec::new(),
            other: Vec::new(),
            production_units: Vec::new(),
        };

        for (row_idx, record) in reader.records().enumerate() {
            let record = record?;
            // 1-based data row for error messages, after the header line
            let row = row_idx + 2;

            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            sheet
                .material
                .push(parse_cell(&record, material_col, &headers, row)?);
            sheet
                .labor
                .push(parse_cell(&record, labor_col, &headers, row)?);
            sheet
                .other
                .push(parse_cell(&record, other_col, &headers, row)?);
            sheet
                .production_units
                .push(parse_cell(&record, units_col, &headers, row)?);

            let name = product_col
                .and_then(|col| record.get(col))
                .map(|cell| cell.trim().to_string())
                .filter(|name| !name.is_empty());
            sheet.products.push(name.unwrap_or_default());
        }

        if sheet.material.is_empty() {
            return Err(ImportError::EmptySheet);
        }

        // Fill the gaps left by a missing or sparse product column
        let fallback = default_product_names(sheet.material.len());
        for (name, generated) in sheet.products.iter_mut().zip(fallback) {
            if name.is_empty() {
                *name = generated;
            }
        }

        info!(
            path = %path.display(),
            products = sheet.product_count(),
            "cost sheet imported"
        );
        Ok(sheet)
    }
}

impl Default for CostSheetImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn find_column(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| synonyms.iter().any(|s| h == s))
}

fn require_column(
    headers: &[String],
    name: &'static str,
    synonyms: &'static [&'static str],
) -> ImportResult<usize> {
    find_column(headers, synonyms).ok_or(ImportError::MissingColumn(
        name,
        match name {
            "material" => "material, anyagköltség",
            "labor" => "labor, bérköltség",
            "other" => "other, egyéb",
            _ => "units, darab",
        },
    ))
}

fn parse_cell(
    record: &csv::StringRecord,
    col: usize,
    headers: &[String],
    row: usize,
) -> ImportResult<f64> {
    let raw = record.get(col).unwrap_or("").trim();
    raw.parse::<f64>().map_err(|_| ImportError::InvalidNumber {
        row,
        column: headers.get(col).cloned().unwrap_or_default(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_product_names() {
        let names = default_product_names(3);
        assert_eq!(names, vec!["A", "B", "C"]);
        let many = default_product_names(28);
        assert_eq!(many[26], "A2");
        assert_eq!(many[27], "B2");
    }
}
