//! Canonical section ordering for generated and templated contracts.
//!
//! Contract sections arrive in arbitrary order, from a language model or a
//! manual form. This crate maps them onto the canonical order of the
//! contract type's blueprint:
//!
//! ## Building Blocks
//!
//! - [`ContractType`] - Closed set of contract types (golf outing, wedding, ...)
//! - [`BlueprintRegistry`] - Canonical section order and drafting guidance per type
//! - [`display_title`] / [`comparison_key`] - Title normalization
//! - [`dedupe_titles`] - Suffixes repeated titles with ` (2)`, ` (3)`, ...
//! - [`RankIndex`] - Title → blueprint rank, [`UNMATCHED_RANK`] otherwise
//! - [`merge_exhibits`] - Appends lettered exhibits after the body
//!
//! ## Ordering
//!
//! - [`SectionOrderer`] - Runs the whole pipeline against a registry
//! - [`normalize_and_order`] - One-shot entry point
//! - [`OrderingReport`] - Matched/unmatched/renamed/missing summary
//!
//! The ordering pipeline performs no I/O and cannot fail; only the boundary
//! operations (parsing contract-type keys, loading registries, decoding JSON
//! payloads) return [`SectionsResult`].
//!
//! ## Example
//!
//! ```
//! use contract_sections::{normalize_and_order, BlueprintRegistry, ContractType, SectionDraft};
//!
//! let registry = BlueprintRegistry::builtin();
//! let ordered = normalize_and_order(
//!     &registry,
//!     vec![
//!         SectionDraft::new("conclusion", "..."),
//!         SectionDraft::new("Parties & Event Overview", "..."),
//!     ],
//!     ContractType::GolfOuting,
//! );
//!
//! assert_eq!(ordered[0].title, "Parties & Event Overview");
//! assert_eq!(ordered[1].title, "Conclusion");
//! assert_eq!(ordered[1].order, 1);
//! ```

mod blueprint;
mod contract_type;
mod dedup;
mod errors;
mod exhibit;
mod ordering;
mod rank;
mod registry;
mod report;
mod section;
mod title;

pub use blueprint::Blueprint;
pub use contract_type::ContractType;
pub use dedup::{dedupe_titles, Rename};
pub use errors::{SectionsError, SectionsResult};
pub use exhibit::{exhibit_letter, exhibit_title, merge_exhibits, EXHIBIT_PREFIX};
pub use ordering::{
    assign_order, is_matched_rank, normalize_and_order, normalize_drafts, sort_by_rank,
    SectionOrderer,
};
pub use rank::{RankIndex, UNMATCHED_RANK};
pub use registry::{BlueprintRegistry, RegistryConfig};
pub use report::{OrderingOutcome, OrderingReport};
pub use section::{OrderedSection, SectionDraft, Titled};
pub use title::{comparison_key, display_title, NormalizedTitle};

#[cfg(test)]
mod tests {
    mod ordering_properties;
    mod scenarios;
}
