//! Error types for the boundary operations of the crate.
//!
//! The ordering pipeline itself is total. Only parsing a contract-type key,
//! building or loading a [`BlueprintRegistry`](crate::BlueprintRegistry) and
//! decoding section payloads can fail.

use thiserror::Error;

use crate::ContractType;

/// Errors raised at the edges of the section engine.
#[derive(Debug, Error)]
pub enum SectionsError {
    /// A contract-type key outside the closed set.
    #[error("unknown contract type: {key:?}")]
    UnknownContractType { key: String },

    /// A registry was built without a blueprint for this contract type.
    #[error("registry has no blueprint for {0:?}")]
    MissingBlueprint(ContractType),

    /// A registry was given two blueprints for the same contract type.
    #[error("registry has more than one blueprint for {0:?}")]
    DuplicateBlueprint(ContractType),

    /// A blueprint lists the same section twice (compared case-insensitively).
    #[error("blueprint {contract_type:?} lists section {title:?} more than once")]
    DuplicateBlueprintSection {
        contract_type: ContractType,
        title: String,
    },

    /// A blueprint is large enough to collide with the unmatched rank.
    #[error("blueprint {contract_type:?} has {len} sections, limit is {limit}")]
    BlueprintTooLarge {
        contract_type: ContractType,
        len: usize,
        limit: usize,
    },

    /// A registry configuration file could not be parsed.
    #[error("failed to parse registry config: {message}")]
    Config { message: String },

    /// A registry configuration file could not be read.
    #[error("failed to load registry config: {path}: {message}")]
    Load { path: String, message: String },

    /// A section payload was not a valid JSON array of sections.
    #[error("invalid section payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for boundary operations.
pub type SectionsResult<T> = Result<T, SectionsError>;
