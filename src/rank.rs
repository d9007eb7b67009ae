//! Resolution of section titles to their canonical blueprint rank.

use std::collections::HashMap;

use crate::title::comparison_key;
use crate::Blueprint;

/// Rank given to titles that are not in the blueprint.
///
/// Greater than any blueprint the registry accepts, so unmatched sections
/// always sort after matched ones.
pub const UNMATCHED_RANK: u32 = 999;

/// Comparison key → 1-based position in a blueprint.
#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    ranks: HashMap<String, u32>,
}

impl RankIndex {
    /// Build the lookup for one blueprint. The first entry gets rank 1.
    ///
    /// If a key somehow appears twice, the earlier rank wins.
    pub fn for_blueprint(blueprint: &Blueprint) -> Self {
        let mut ranks = HashMap::with_capacity(blueprint.len());
        for (idx, title) in blueprint.sections.iter().enumerate() {
            ranks
                .entry(comparison_key(title))
                .or_insert(idx as u32 + 1);
        }
        Self { ranks }
    }

    /// Rank for an already-normalized comparison key.
    ///
    /// Exact lookup only; no partial or fuzzy matching.
    pub fn rank(&self, key: &str) -> u32 {
        self.ranks.get(key).copied().unwrap_or(UNMATCHED_RANK)
    }

    /// Rank for a raw title.
    pub fn rank_of_title(&self, title: &str) -> u32 {
        self.rank(&comparison_key(title))
    }
}
