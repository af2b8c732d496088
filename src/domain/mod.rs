// ==========================================
// Termék önköltség-számítás - domain layer
// ==========================================
// Value types, allocation-basis selectors and the fixed-shape cost
// records exchanged with the engine.
// Rule: no I/O and no allocation logic in this layer.
// ==========================================

pub mod cost;
pub mod types;

// Re-export core types
pub use cost::{CostBreakdown, CostInput};
pub use types::{CompanyBasis, InvalidBasisError, OperatingBasis, OverheadPool};
