// ==========================================
// Termék önköltség-számítás - core library
// ==========================================
// Product costing: allocates operating and company overhead across a
// product line and derives per-product and per-unit cost figures.
// Positioning: decision support for cost accountants (no persistence,
// single period, single currency).
// ==========================================

// Initialize the i18n catalog (English default, Hungarian available)
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - value types and result records
pub mod domain;

// Engine layer - allocation rules
pub mod engine;

// Import layer - external cost sheets
pub mod importer;

// Configuration layer - user defaults
pub mod config;

// Report layer - tabular output
pub mod report;

// CLI layer - interactive collection
pub mod cli;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{CompanyBasis, InvalidBasisError, OperatingBasis, OverheadPool};

// Domain records
pub use domain::{CostBreakdown, CostInput};

// Engine
pub use engine::{CostingEngine, EngineError, EngineResult};

// Importer
pub use importer::{CostSheet, CostSheetImporter, ImportError};

// Configuration
pub use config::AppConfig;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Termék önköltség-számítás";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
