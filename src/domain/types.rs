// ==========================================
// Termék önköltség-számítás - domain types
// ==========================================
// Allocation bases are closed enumerations. The legal value set is
// machine-checked at the string boundary; past parsing, basis dispatch
// is exhaustive and cannot fall through.
// ==========================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// Allocation basis selectors
// ==========================================

/// Allocation basis for the operating overhead pool.
///
/// Serialized lowercase, matching the strings accepted at the CLI and in
/// cost sheets ("material", "labor", "other", "direct").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingBasis {
    /// Direct material cost drives the allocation
    Material,
    /// Direct labor cost
    Labor,
    /// Other direct cost
    Other,
    /// Total direct cost (material + labor + other)
    Direct,
}

impl OperatingBasis {
    /// Legal selector strings, for error messages and prompts.
    pub const LEGAL_VALUES: &'static str = "'material', 'labor', 'other' or 'direct'";
}

impl fmt::Display for OperatingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingBasis::Material => write!(f, "material"),
            OperatingBasis::Labor => write!(f, "labor"),
            OperatingBasis::Other => write!(f, "other"),
            OperatingBasis::Direct => write!(f, "direct"),
        }
    }
}

impl FromStr for OperatingBasis {
    type Err = InvalidBasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "material" => Ok(OperatingBasis::Material),
            "labor" => Ok(OperatingBasis::Labor),
            "other" => Ok(OperatingBasis::Other),
            "direct" => Ok(OperatingBasis::Direct),
            other => Err(InvalidBasisError {
                value: other.to_string(),
                expected: OperatingBasis::LEGAL_VALUES,
            }),
        }
    }
}

/// Allocation basis for the company overhead pool.
///
/// Restricted cost (total direct + allocated operating overhead) or total
/// direct cost. The source tool at one point also accepted the raw cost
/// vectors here; that was an inconsistency between its validator and its
/// selection helper, and the narrow set is the contract kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyBasis {
    /// Restricted cost drives the allocation
    Restricted,
    /// Total direct cost
    Direct,
}

impl CompanyBasis {
    /// Legal selector strings, for error messages and prompts.
    pub const LEGAL_VALUES: &'static str = "'restricted' or 'direct'";
}

impl fmt::Display for CompanyBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyBasis::Restricted => write!(f, "restricted"),
            CompanyBasis::Direct => write!(f, "direct"),
        }
    }
}

impl FromStr for CompanyBasis {
    type Err = InvalidBasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restricted" => Ok(CompanyBasis::Restricted),
            "direct" => Ok(CompanyBasis::Direct),
            other => Err(InvalidBasisError {
                value: other.to_string(),
                expected: CompanyBasis::LEGAL_VALUES,
            }),
        }
    }
}

/// Unrecognized allocation-basis selector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid allocation base `{value}`, expected {expected}")]
pub struct InvalidBasisError {
    /// The rejected selector (already trimmed and lower-cased)
    pub value: String,
    /// Human-readable legal value set
    pub expected: &'static str,
}

// ==========================================
// Overhead pools
// ==========================================

/// The two overhead pools the engine allocates, in allocation order.
///
/// Used to name the failing stage in errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverheadPool {
    Operating,
    Company,
}

impl fmt::Display for OverheadPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverheadPool::Operating => write!(f, "operating"),
            OverheadPool::Company => write!(f, "company"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operating_basis_parse() {
        assert_eq!(
            "material".parse::<OperatingBasis>().unwrap(),
            OperatingBasis::Material
        );
        assert_eq!(
            "  Direct ".parse::<OperatingBasis>().unwrap(),
            OperatingBasis::Direct
        );
        assert_eq!("LABOR".parse::<OperatingBasis>().unwrap(), OperatingBasis::Labor);
    }

    #[test]
    fn test_operating_basis_rejects_unknown() {
        let err = "weight".parse::<OperatingBasis>().unwrap_err();
        assert_eq!(err.value, "weight");
        assert!(err.to_string().contains("'material'"));
    }

    #[test]
    fn test_company_basis_parse() {
        assert_eq!(
            "restricted".parse::<CompanyBasis>().unwrap(),
            CompanyBasis::Restricted
        );
        assert_eq!("direct".parse::<CompanyBasis>().unwrap(), CompanyBasis::Direct);
    }

    #[test]
    fn test_company_basis_rejects_raw_cost_vectors() {
        // The wider set the source tool briefly accepted is not legal here.
        assert!("material".parse::<CompanyBasis>().is_err());
        assert!("labor".parse::<CompanyBasis>().is_err());
        assert!("other".parse::<CompanyBasis>().is_err());
    }

    #[test]
    fn test_basis_display_roundtrip() {
        for basis in [
            OperatingBasis::Material,
            OperatingBasis::Labor,
            OperatingBasis::Other,
            OperatingBasis::Direct,
        ] {
            assert_eq!(basis.to_string().parse::<OperatingBasis>().unwrap(), basis);
        }
        for basis in [CompanyBasis::Restricted, CompanyBasis::Direct] {
            assert_eq!(basis.to_string().parse::<CompanyBasis>().unwrap(), basis);
        }
    }

    #[test]
    fn test_basis_serde_lowercase() {
        let json = serde_json::to_string(&OperatingBasis::Material).unwrap();
        assert_eq!(json, "\"material\"");
        let parsed: CompanyBasis = serde_json::from_str("\"restricted\"").unwrap();
        assert_eq!(parsed, CompanyBasis::Restricted);
    }
}
