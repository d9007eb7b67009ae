//! The blueprint registry: one [`Blueprint`] per [`ContractType`].
//!
//! A registry is built once (from the compiled-in data or a RON/TOML
//! override file) and then passed by reference to whatever orders sections.
//! Construction validates that the registry is total over the contract
//! types, so lookups never fail afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::blueprint::builtin_blueprints;
use crate::rank::UNMATCHED_RANK;
use crate::title::comparison_key;
use crate::{Blueprint, ContractType, SectionsError, SectionsResult};

static SHARED: Lazy<BlueprintRegistry> = Lazy::new(BlueprintRegistry::builtin);

/// On-disk shape of a registry override file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub blueprints: Vec<Blueprint>,
}

/// Read-only set of blueprints, total over [`ContractType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlueprintRegistry {
    /// Indexed by `slot(contract_type)`
    blueprints: Vec<Blueprint>,
}

fn slot(contract_type: ContractType) -> usize {
    match contract_type {
        ContractType::GolfOuting => 0,
        ContractType::GolfLeague => 1,
        ContractType::Wedding => 2,
        ContractType::SpecialEvent => 3,
        ContractType::Other => 4,
    }
}

impl BlueprintRegistry {
    /// The compiled-in blueprints.
    pub fn builtin() -> Self {
        let blueprints = builtin_blueprints();
        debug_assert!(validate_blueprints(&blueprints).is_ok());
        Self::arrange(blueprints)
    }

    /// A process-wide builtin registry, built on first use.
    pub fn shared() -> &'static BlueprintRegistry {
        &SHARED
    }

    /// Validate and build a registry from explicit blueprints.
    pub fn from_blueprints(blueprints: Vec<Blueprint>) -> SectionsResult<Self> {
        validate_blueprints(&blueprints)?;
        Ok(Self::arrange(blueprints))
    }

    /// Build from a RON document shaped like [`RegistryConfig`].
    pub fn from_ron_str(s: &str) -> SectionsResult<Self> {
        let config: RegistryConfig = ron::from_str(s).map_err(|e| SectionsError::Config {
            message: e.to_string(),
        })?;
        Self::from_blueprints(config.blueprints)
    }

    /// Build from a TOML document shaped like [`RegistryConfig`].
    pub fn from_toml_str(s: &str) -> SectionsResult<Self> {
        let config: RegistryConfig = toml::from_str(s).map_err(|e| SectionsError::Config {
            message: e.to_string(),
        })?;
        Self::from_blueprints(config.blueprints)
    }

    /// Load an override file. `.ron` files are read as RON, anything else as TOML.
    pub fn load(path: &Path) -> SectionsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SectionsError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let registry = if path.extension().map_or(false, |e| e == "ron") {
            Self::from_ron_str(&content)
        } else {
            Self::from_toml_str(&content)
        }?;

        tracing::debug!(
            "loaded blueprint registry from {} ({} sections total)",
            path.display(),
            registry.blueprints.iter().map(Blueprint::len).sum::<usize>()
        );
        Ok(registry)
    }

    /// The blueprint for a contract type. Total over the enum.
    pub fn get(&self, contract_type: ContractType) -> &Blueprint {
        &self.blueprints[slot(contract_type)]
    }

    /// Canonical section titles for a contract type.
    pub fn sections(&self, contract_type: ContractType) -> &[String] {
        &self.get(contract_type).sections
    }

    /// Drafting guidance for a contract type.
    pub fn guidance(&self, contract_type: ContractType) -> &str {
        &self.get(contract_type).guidance
    }

    /// Blueprints in [`ContractType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Blueprint> {
        self.blueprints.iter()
    }

    /// Serialize to a RON string, e.g. to seed an override file.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let config = RegistryConfig {
            blueprints: self.blueprints.clone(),
        };
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(&config, pretty)
    }

    /// Put already-validated blueprints into slot order.
    fn arrange(mut blueprints: Vec<Blueprint>) -> Self {
        blueprints.sort_by_key(|b| slot(b.contract_type));
        Self { blueprints }
    }
}

impl Default for BlueprintRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_blueprints(blueprints: &[Blueprint]) -> SectionsResult<()> {
    let mut seen_types = HashSet::new();

    for blueprint in blueprints {
        let contract_type = blueprint.contract_type;
        if !seen_types.insert(contract_type) {
            return Err(SectionsError::DuplicateBlueprint(contract_type));
        }

        if blueprint.len() >= UNMATCHED_RANK as usize {
            return Err(SectionsError::BlueprintTooLarge {
                contract_type,
                len: blueprint.len(),
                limit: UNMATCHED_RANK as usize - 1,
            });
        }

        let mut keys = HashSet::new();
        for title in &blueprint.sections {
            if !keys.insert(comparison_key(title)) {
                return Err(SectionsError::DuplicateBlueprintSection {
                    contract_type,
                    title: title.clone(),
                });
            }
        }
    }

    for contract_type in ContractType::ALL {
        if !seen_types.contains(&contract_type) {
            return Err(SectionsError::MissingBlueprint(contract_type));
        }
    }

    Ok(())
}
