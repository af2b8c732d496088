// ==========================================
// Termék önköltség-számítás - allocation engine
// ==========================================
// Five ordered stages: direct-cost aggregation, operating overhead
// allocation, restricted-cost aggregation, company overhead allocation,
// unit-cost derivation. Each stage consumes the previous stage's output.
// Rule: stateless, no side effects, no I/O; a call either returns a
// complete breakdown or fails with a reason.
// ==========================================

use tracing::debug;

use crate::domain::cost::{CostBreakdown, CostInput};
use crate::domain::types::{CompanyBasis, OperatingBasis, OverheadPool};
use crate::engine::basis::{company_basis_vector, operating_basis_vector};
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// CostingEngine
// ==========================================
pub struct CostingEngine;

impl CostingEngine {
    pub fn new() -> Self {
        CostingEngine
    }

    /// Run the full allocation pipeline over a cost input.
    ///
    /// # Rules
    /// - total_direct = material + labor + other, per product
    /// - each overhead pool is spread proportionally to the product's
    ///   share of the chosen basis total, so the allocations sum back to
    ///   the pool (up to floating-point rounding)
    /// - restricted = total_direct + operating allocation; total =
    ///   restricted + company allocation
    /// - unit costs divide by production units, validated here rather
    ///   than up front so the error can name the derivation stage
    ///
    /// # Errors
    /// - `ShapeMismatch` / `EmptyInput` / `NegativeCost` /
    ///   `NegativeOverhead` on invalid input
    /// - `ZeroBasisSum` when a basis total is zero (never a NaN result)
    /// - `NonPositiveUnits` when a production-units entry is <= 0
    pub fn compute(
        &self,
        input: &CostInput,
        operating_basis: OperatingBasis,
        company_basis: CompanyBasis,
    ) -> EngineResult<CostBreakdown> {
        Self::validate(input)?;
        let n = input.product_count();
        debug!(
            products = n,
            %operating_basis,
            %company_basis,
            "computing cost breakdown"
        );

        // Stage 1: direct cost aggregation
        let total_direct: Vec<f64> = (0..n)
            .map(|i| input.material[i] + input.labor[i] + input.other[i])
            .collect();

        // Stage 2: operating overhead allocation
        let base = operating_basis_vector(operating_basis, input, &total_direct);
        let operating_allocation = Self::allocate(
            base,
            input.operating_overhead,
            OverheadPool::Operating,
            operating_basis.to_string(),
        )?;

        // Stage 3: restricted cost aggregation
        let restricted: Vec<f64> = total_direct
            .iter()
            .zip(&operating_allocation)
            .map(|(direct, alloc)| direct + alloc)
            .collect();

        // Stage 4: company overhead allocation
        let base = company_basis_vector(company_basis, &total_direct, &restricted);
        let company_allocation = Self::allocate(
            base,
            input.company_overhead,
            OverheadPool::Company,
            company_basis.to_string(),
        )?;

        let total_cost: Vec<f64> = restricted
            .iter()
            .zip(&company_allocation)
            .map(|(restricted, alloc)| restricted + alloc)
            .collect();

        // Stage 5: unit cost derivation
        let unit_cost = Self::per_unit(&total_cost, &input.production_units)?;
        let direct_unit_cost = Self::per_unit(&total_direct, &input.production_units)?;
        let restricted_unit_cost = Self::per_unit(&restricted, &input.production_units)?;

        Ok(CostBreakdown {
            total_direct,
            operating_allocation,
            restricted,
            company_allocation,
            total_cost,
            unit_cost,
            direct_unit_cost,
            restricted_unit_cost,
        })
    }

    /// Spread an overhead pool proportionally to each entry's share of
    /// the basis total.
    fn allocate(
        base: &[f64],
        overhead: f64,
        pool: OverheadPool,
        basis_name: String,
    ) -> EngineResult<Vec<f64>> {
        let total: f64 = base.iter().sum();
        if total == 0.0 {
            return Err(EngineError::ZeroBasisSum {
                pool,
                basis: basis_name,
            });
        }
        Ok(base.iter().map(|b| b / total * overhead).collect())
    }

    /// Divide a per-product cost vector by the production units.
    fn per_unit(costs: &[f64], units: &[f64]) -> EngineResult<Vec<f64>> {
        costs
            .iter()
            .zip(units)
            .enumerate()
            .map(|(index, (cost, &unit))| {
                if unit <= 0.0 {
                    Err(EngineError::NonPositiveUnits { index, value: unit })
                } else {
                    Ok(cost / unit)
                }
            })
            .collect()
    }

    /// Shape and positivity checks over the raw input.
    fn validate(input: &CostInput) -> EngineResult<()> {
        let n = input.material.len();
        if n == 0 {
            return Err(EngineError::EmptyInput);
        }
        for (vector, values) in [
            ("labor", &input.labor),
            ("other", &input.other),
            ("production_units", &input.production_units),
        ] {
            if values.len() != n {
                return Err(EngineError::ShapeMismatch {
                    vector,
                    expected: n,
                    actual: values.len(),
                });
            }
        }
        for (vector, values) in [
            ("material", &input.material),
            ("labor", &input.labor),
            ("other", &input.other),
        ] {
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
                return Err(EngineError::NegativeCost {
                    vector,
                    index,
                    value,
                });
            }
        }
        for (pool, value) in [
            (OverheadPool::Operating, input.operating_overhead),
            (OverheadPool::Company, input.company_overhead),
        ] {
            if value < 0.0 {
                return Err(EngineError::NegativeOverhead { pool, value });
            }
        }
        Ok(())
    }
}

impl Default for CostingEngine {
    fn default() -> Self {
        Self::new()
    }
}
