//! Core types for TOML ordering fixtures.
//!
//! ```toml
//! title = "Golf outing: unmatched sections go last"
//! contract_type = "GOLF_OUTING"
//!
//! [[sections]]
//! title = "conclusion"
//! body = "Thank you."
//!
//! [[sections]]
//! title = "Parties & Event Overview"
//! body = "Acme Corp and Pine Hills CC."
//!
//! [expect]
//! titles = ["Parties & Event Overview", "Conclusion"]
//! unmatched = ["Conclusion"]
//! ```

use contract_sections::{ContractType, SectionDraft};
use serde::{Deserialize, Serialize};

use crate::{SpecError, SpecResult};

/// A parsed ordering fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingFixture {
    /// Human-readable description
    #[serde(default)]
    pub title: Option<String>,
    pub contract_type: ContractType,
    /// Primary sections, in generator order
    #[serde(default)]
    pub sections: Vec<SectionDraft>,
    /// Exhibits merged after the primary sections before ordering
    #[serde(default)]
    pub exhibits: Vec<SectionDraft>,
    pub expect: Expectation,
}

/// What the ordered output must look like.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectation {
    /// Every output title, in output order
    pub titles: Vec<String>,
    /// Output titles that match no blueprint section
    #[serde(default)]
    pub unmatched: Option<Vec<String>>,
    /// Blueprint sections absent from the output
    #[serde(default)]
    pub missing: Option<Vec<String>>,
}

impl OrderingFixture {
    /// Number of sections the ordered output should contain.
    pub fn input_len(&self) -> usize {
        self.sections.len() + self.exhibits.len()
    }

    /// Display name: the title if present, otherwise the contract type.
    pub fn display_name(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("{} fixture", self.contract_type.label()))
    }
}

/// Parse a fixture from TOML source.
pub fn parse_fixture(content: &str) -> SpecResult<OrderingFixture> {
    toml::from_str(content).map_err(|e| SpecError::from_toml(content, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_fixture() {
        let fixture = parse_fixture(
            r#"
contract_type = "WEDDING"

[[sections]]
title = "Signatures"

[expect]
titles = ["Signatures"]
"#,
        )
        .unwrap();

        assert_eq!(fixture.contract_type, ContractType::Wedding);
        assert_eq!(fixture.sections, vec![SectionDraft::new("Signatures", "")]);
        assert!(fixture.exhibits.is_empty());
        assert!(fixture.expect.unmatched.is_none());
        assert_eq!(fixture.display_name(), "Wedding fixture");
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse_fixture("title = \"x\"\nthis is not toml\n").unwrap_err();
        match err {
            SpecError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_expect_is_an_error() {
        assert!(parse_fixture("contract_type = \"OTHER\"\n").is_err());
    }
}
