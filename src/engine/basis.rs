// ==========================================
// Termék önköltség-számítás - basis selection
// ==========================================
// Pure dispatch from a basis selector to the vector that drives the
// proportional allocation. No computation here; the matches are
// exhaustive over the closed enums, so there is no fallthrough arm.
// ==========================================

use crate::domain::cost::CostInput;
use crate::domain::types::{CompanyBasis, OperatingBasis};

/// Vector driving the operating overhead allocation.
///
/// `Direct` refers to the total direct cost computed in the aggregation
/// stage, hence the extra argument.
pub(crate) fn operating_basis_vector<'a>(
    basis: OperatingBasis,
    input: &'a CostInput,
    total_direct: &'a [f64],
) -> &'a [f64] {
    match basis {
        OperatingBasis::Material => &input.material,
        OperatingBasis::Labor => &input.labor,
        OperatingBasis::Other => &input.other,
        OperatingBasis::Direct => total_direct,
    }
}

/// Vector driving the company overhead allocation.
///
/// Both candidates are outputs of earlier stages; `Restricted` makes the
/// company allocation depend on the operating allocation, which is why
/// the pools are processed strictly in order.
pub(crate) fn company_basis_vector<'a>(
    basis: CompanyBasis,
    total_direct: &'a [f64],
    restricted: &'a [f64],
) -> &'a [f64] {
    match basis {
        CompanyBasis::Restricted => restricted,
        CompanyBasis::Direct => total_direct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CostInput {
        CostInput {
            material: vec![600.0, 400.0],
            labor: vec![300.0, 250.0],
            other: vec![420.0, 230.0],
            production_units: vec![10.0, 25.0],
            operating_overhead: 500.0,
            company_overhead: 810.0,
        }
    }

    #[test]
    fn test_operating_basis_selects_input_vectors() {
        let input = sample_input();
        let total_direct = vec![1320.0, 880.0];

        assert_eq!(
            operating_basis_vector(OperatingBasis::Material, &input, &total_direct),
            input.material.as_slice()
        );
        assert_eq!(
            operating_basis_vector(OperatingBasis::Labor, &input, &total_direct),
            input.labor.as_slice()
        );
        assert_eq!(
            operating_basis_vector(OperatingBasis::Other, &input, &total_direct),
            input.other.as_slice()
        );
        assert_eq!(
            operating_basis_vector(OperatingBasis::Direct, &input, &total_direct),
            total_direct.as_slice()
        );
    }

    #[test]
    fn test_company_basis_selects_derived_vectors() {
        let total_direct = vec![1320.0, 880.0];
        let restricted = vec![1620.0, 1080.0];

        assert_eq!(
            company_basis_vector(CompanyBasis::Restricted, &total_direct, &restricted),
            restricted.as_slice()
        );
        assert_eq!(
            company_basis_vector(CompanyBasis::Direct, &total_direct, &restricted),
            total_direct.as_slice()
        );
    }
}
