// ==========================================
// CostingEngine integration tests
// ==========================================
// Target: the allocation pipeline end to end
// Coverage: worked scenario, conservation, additivity, proportionality,
// and the defined failures (zero basis, zero units, shape mismatch)
// ==========================================

use product_costing::domain::cost::CostInput;
use product_costing::domain::types::{CompanyBasis, OperatingBasis, OverheadPool};
use product_costing::engine::{CostingEngine, EngineError};

// ==========================================
// Test helpers
// ==========================================

fn textbook_input() -> CostInput {
    CostInput {
        material: vec![600.0, 400.0],
        labor: vec![300.0, 250.0],
        other: vec![420.0, 230.0],
        production_units: vec![10.0, 25.0],
        operating_overhead: 500.0,
        company_overhead: 810.0,
    }
}

/// Three-product input with deliberately uneven shares.
fn uneven_input() -> CostInput {
    CostInput {
        material: vec![123.4, 0.1, 987.65],
        labor: vec![10.0, 220.5, 3.25],
        other: vec![55.5, 66.6, 77.7],
        production_units: vec![7.0, 11.0, 13.0],
        operating_overhead: 941.3,
        company_overhead: 127.9,
    }
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: {} != {}",
        what,
        actual,
        expected
    );
}

// ==========================================
// Worked scenario
// ==========================================

#[test]
fn test_textbook_scenario_material_restricted() {
    let engine = CostingEngine::new();
    let result = engine
        .compute(
            &textbook_input(),
            OperatingBasis::Material,
            CompanyBasis::Restricted,
        )
        .unwrap();

    assert_eq!(result.total_direct, vec![1320.0, 880.0]);
    assert_eq!(result.operating_allocation, vec![300.0, 200.0]);
    assert_eq!(result.restricted, vec![1620.0, 1080.0]);
    assert_eq!(result.company_allocation, vec![486.0, 324.0]);
    assert_eq!(result.total_cost, vec![2106.0, 1404.0]);
    assert_eq!(result.unit_cost, vec![210.6, 56.16]);
    assert_eq!(result.product_count(), 2);
}

// ==========================================
// Invariants over all bases
// ==========================================

#[test]
fn test_conservation_across_all_basis_combinations() {
    let engine = CostingEngine::new();
    let input = uneven_input();

    for operating in [
        OperatingBasis::Material,
        OperatingBasis::Labor,
        OperatingBasis::Other,
        OperatingBasis::Direct,
    ] {
        for company in [CompanyBasis::Restricted, CompanyBasis::Direct] {
            let result = engine.compute(&input, operating, company).unwrap();

            let operating_sum: f64 = result.operating_allocation.iter().sum();
            let company_sum: f64 = result.company_allocation.iter().sum();
            assert_close(
                operating_sum,
                input.operating_overhead,
                "operating pool conserved",
            );
            assert_close(company_sum, input.company_overhead, "company pool conserved");
        }
    }
}

#[test]
fn test_additivity_is_exact() {
    let engine = CostingEngine::new();
    let input = uneven_input();
    let result = engine
        .compute(&input, OperatingBasis::Labor, CompanyBasis::Restricted)
        .unwrap();

    for i in 0..input.product_count() {
        // IEEE sums, no extra rounding anywhere in between
        assert_eq!(
            result.restricted[i],
            result.total_direct[i] + result.operating_allocation[i]
        );
        assert_eq!(
            result.total_cost[i],
            result.restricted[i] + result.company_allocation[i]
        );
    }
}

#[test]
fn test_direct_basis_matches_direct_cost_shares() {
    let engine = CostingEngine::new();
    let input = uneven_input();
    let result = engine
        .compute(&input, OperatingBasis::Direct, CompanyBasis::Direct)
        .unwrap();

    let direct_total: f64 = result.total_direct.iter().sum();
    for i in 0..input.product_count() {
        assert_close(
            result.operating_allocation[i] / input.operating_overhead,
            result.total_direct[i] / direct_total,
            "allocation share equals basis share",
        );
    }
}

#[test]
fn test_raising_material_shifts_allocation_toward_that_product() {
    let engine = CostingEngine::new();
    let input = textbook_input();
    let before = engine
        .compute(&input, OperatingBasis::Material, CompanyBasis::Restricted)
        .unwrap();

    let mut raised = input.clone();
    raised.material[1] += 150.0;
    let after = engine
        .compute(&raised, OperatingBasis::Material, CompanyBasis::Restricted)
        .unwrap();

    // Fixed pool: product 1 gains, product 0 loses
    assert!(after.operating_allocation[1] > before.operating_allocation[1]);
    assert!(after.operating_allocation[0] < before.operating_allocation[0]);
}

#[test]
fn test_unit_cost_identity() {
    let engine = CostingEngine::new();
    let input = uneven_input();
    let result = engine
        .compute(&input, OperatingBasis::Other, CompanyBasis::Restricted)
        .unwrap();

    for i in 0..input.product_count() {
        assert_close(
            result.unit_cost[i] * input.production_units[i],
            result.total_cost[i],
            "unit cost times units equals total",
        );
    }
}

// ==========================================
// Defined failures
// ==========================================

#[test]
fn test_zero_basis_sum_is_an_error_not_nan() {
    let mut input = textbook_input();
    input.labor = vec![0.0, 0.0];

    let engine = CostingEngine::new();
    let err = engine
        .compute(&input, OperatingBasis::Labor, CompanyBasis::Restricted)
        .unwrap_err();
    match err {
        EngineError::ZeroBasisSum { pool, basis } => {
            assert_eq!(pool, OverheadPool::Operating);
            assert_eq!(basis, "labor");
        }
        other => panic!("expected ZeroBasisSum, got {other:?}"),
    }
}

#[test]
fn test_all_zero_costs_fail_in_company_stage_too() {
    // Zero overheads keep restricted at zero, so the company stage is
    // the first one whose basis collapses
    let input = CostInput {
        material: vec![0.0, 0.0],
        labor: vec![0.0, 0.0],
        other: vec![0.0, 0.0],
        production_units: vec![1.0, 1.0],
        operating_overhead: 0.0,
        company_overhead: 100.0,
    };

    let engine = CostingEngine::new();
    // Operating stage fails first: its basis is already all-zero
    let err = engine
        .compute(&input, OperatingBasis::Material, CompanyBasis::Restricted)
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::ZeroBasisSum {
            pool: OverheadPool::Operating,
            ..
        }
    ));
}

#[test]
fn test_zero_production_unit_fails_at_unit_cost_stage() {
    let mut input = textbook_input();
    input.production_units[1] = 0.0;

    let engine = CostingEngine::new();
    let err = engine
        .compute(&input, OperatingBasis::Material, CompanyBasis::Restricted)
        .unwrap_err();
    match err {
        EngineError::NonPositiveUnits { index, value } => {
            assert_eq!(index, 1);
            assert_eq!(value, 0.0);
        }
        other => panic!("expected NonPositiveUnits, got {other:?}"),
    }
}

#[test]
fn test_shape_mismatch_rejected_before_any_allocation() {
    let mut input = textbook_input();
    input.production_units = vec![10.0];

    let engine = CostingEngine::new();
    let err = engine
        .compute(&input, OperatingBasis::Material, CompanyBasis::Restricted)
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::ShapeMismatch {
            vector: "production_units",
            expected: 2,
            actual: 1,
        }
    ));
}

#[test]
fn test_invalid_basis_string_rejected_at_parse() {
    let err = "weight".parse::<OperatingBasis>().unwrap_err();
    assert!(err.to_string().contains("weight"));

    let err: EngineError = "weight".parse::<OperatingBasis>().unwrap_err().into();
    assert!(matches!(err, EngineError::InvalidBasis(_)));
}

#[test]
fn test_identical_inputs_identical_outputs() {
    let engine = CostingEngine::new();
    let a = engine
        .compute(
            &uneven_input(),
            OperatingBasis::Direct,
            CompanyBasis::Restricted,
        )
        .unwrap();
    let b = engine
        .compute(
            &uneven_input(),
            OperatingBasis::Direct,
            CompanyBasis::Restricted,
        )
        .unwrap();
    assert_eq!(a, b);
}
