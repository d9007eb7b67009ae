//! The closed set of contract types a blueprint can be keyed by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SectionsError;

/// Kind of contract being drafted.
///
/// Serialized with the wire keys used by the request layer
/// (`GOLF_OUTING`, `GOLF_LEAGUE`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    GolfOuting,
    GolfLeague,
    Wedding,
    SpecialEvent,
    Other,
}

impl ContractType {
    /// Every contract type, in declaration order.
    pub const ALL: [ContractType; 5] = [
        ContractType::GolfOuting,
        ContractType::GolfLeague,
        ContractType::Wedding,
        ContractType::SpecialEvent,
        ContractType::Other,
    ];

    /// The wire key for this contract type.
    pub fn as_key(&self) -> &'static str {
        match self {
            ContractType::GolfOuting => "GOLF_OUTING",
            ContractType::GolfLeague => "GOLF_LEAGUE",
            ContractType::Wedding => "WEDDING",
            ContractType::SpecialEvent => "SPECIAL_EVENT",
            ContractType::Other => "OTHER",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::GolfOuting => "Golf Outing",
            ContractType::GolfLeague => "Golf League",
            ContractType::Wedding => "Wedding",
            ContractType::SpecialEvent => "Special Event",
            ContractType::Other => "Other",
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ContractType {
    type Err = SectionsError;

    /// Parses a wire key. Surrounding whitespace and letter case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_uppercase();
        ContractType::ALL
            .iter()
            .copied()
            .find(|ct| ct.as_key() == key)
            .ok_or_else(|| SectionsError::UnknownContractType { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_keys() {
        for ct in ContractType::ALL {
            assert_eq!(ct.as_key().parse::<ContractType>().unwrap(), ct);
        }
        assert_eq!(
            " golf_outing ".parse::<ContractType>().unwrap(),
            ContractType::GolfOuting
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "BAR_MITZVAH".parse::<ContractType>().unwrap_err();
        assert!(matches!(
            err,
            SectionsError::UnknownContractType { key } if key == "BAR_MITZVAH"
        ));
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&ContractType::SpecialEvent).unwrap();
        assert_eq!(json, "\"SPECIAL_EVENT\"");

        let parsed: ContractType = serde_json::from_str("\"GOLF_LEAGUE\"").unwrap();
        assert_eq!(parsed, ContractType::GolfLeague);
    }
}
