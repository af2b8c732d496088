// ==========================================
// Termék önköltség-számítás - import layer
// ==========================================
// External cost sheets in, engine inputs out.
// Supported: CSV (one row per product)
// ==========================================

pub mod cost_sheet;
pub mod error;

// Re-export core types
pub use cost_sheet::{default_product_names, CostSheet, CostSheetImporter};
pub use error::{ImportError, ImportResult};
