// ==========================================
// Termék önköltség-számítás - cost records
// ==========================================
// Input and result records of the allocation engine. The result is a
// fixed-shape struct of named vectors, all of length N, so the
// "parallel vectors" invariant lives in one place instead of in a
// loosely-typed map.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Engine input
// ==========================================

/// Raw per-product cost figures plus the two overhead pools.
///
/// Vectors are indexed by product position; all four must share the same
/// length. Monetary amounts are in thousand HUF, production units in
/// pieces, but nothing in the engine depends on the unit of account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    /// Direct material cost per product
    pub material: Vec<f64>,
    /// Direct labor cost per product
    pub labor: Vec<f64>,
    /// Other direct cost per product
    pub other: Vec<f64>,
    /// Units produced per product (divisor for unit costs)
    pub production_units: Vec<f64>,
    /// Operating overhead pool, allocated once across all products
    pub operating_overhead: f64,
    /// Company overhead pool, allocated once across all products
    pub company_overhead: f64,
}

impl CostInput {
    /// Number of products, taken from the material vector.
    ///
    /// Only meaningful once the engine has checked that all vectors share
    /// this length.
    pub fn product_count(&self) -> usize {
        self.material.len()
    }
}

// ==========================================
// Engine result
// ==========================================

/// Per-product cost breakdown produced by a single engine run.
///
/// All vectors have the input's length N. The record is computed fresh on
/// every invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// material + labor + other
    pub total_direct: Vec<f64>,
    /// Operating overhead allocated by the chosen basis
    pub operating_allocation: Vec<f64>,
    /// total_direct + operating_allocation
    pub restricted: Vec<f64>,
    /// Company overhead allocated by the chosen basis
    pub company_allocation: Vec<f64>,
    /// restricted + company_allocation
    pub total_cost: Vec<f64>,
    /// total_cost / production_units
    pub unit_cost: Vec<f64>,
    /// total_direct / production_units
    pub direct_unit_cost: Vec<f64>,
    /// restricted / production_units
    pub restricted_unit_cost: Vec<f64>,
}

impl CostBreakdown {
    /// Number of products covered by the breakdown.
    pub fn product_count(&self) -> usize {
        self.total_cost.len()
    }
}
