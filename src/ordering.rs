//! Normalize and order a contract's sections against its blueprint.
//!
//! The pipeline runs as a chain of small pure steps:
//!
//! 1. [`normalize_drafts`] - trim title and body, Title Case the title
//! 2. [`dedupe_titles`] - suffix repeated titles
//! 3. [`RankIndex::for_blueprint`] - build the rank lookup once
//! 4. [`sort_by_rank`] - stable sort, unmatched sections last
//! 5. [`assign_order`] - 0-based `order` from final position
//!
//! Exhibits take part only when merged into the input beforehand
//! ([`merge_exhibits`], or [`SectionOrderer::order_with_exhibits`]).

use crate::dedup::dedupe_titles;
use crate::exhibit::merge_exhibits;
use crate::rank::{RankIndex, UNMATCHED_RANK};
use crate::report::{OrderingOutcome, OrderingReport};
use crate::title::display_title;
use crate::{BlueprintRegistry, ContractType, OrderedSection, SectionDraft};

/// Orders sections using the blueprints of one registry.
#[derive(Debug, Clone, Copy)]
pub struct SectionOrderer<'r> {
    registry: &'r BlueprintRegistry,
}

impl<'r> SectionOrderer<'r> {
    pub fn new(registry: &'r BlueprintRegistry) -> Self {
        Self { registry }
    }

    /// Normalize, dedupe and sort `sections` into canonical order.
    pub fn order(
        &self,
        sections: Vec<SectionDraft>,
        contract_type: ContractType,
    ) -> Vec<OrderedSection> {
        self.order_with_report(sections, contract_type).sections
    }

    /// Merge exhibits after `sections`, then order the combined list.
    pub fn order_with_exhibits(
        &self,
        sections: Vec<SectionDraft>,
        exhibits: Option<&[SectionDraft]>,
        contract_type: ContractType,
    ) -> Vec<OrderedSection> {
        self.order(merge_exhibits(sections, exhibits), contract_type)
    }

    /// Same as [`order`](Self::order), also reporting what matched, what was
    /// renamed and which blueprint sections are missing.
    pub fn order_with_report(
        &self,
        sections: Vec<SectionDraft>,
        contract_type: ContractType,
    ) -> OrderingOutcome {
        let blueprint = self.registry.get(contract_type);

        let mut drafts = normalize_drafts(sections);
        let renamed = dedupe_titles(&mut drafts);
        let index = RankIndex::for_blueprint(blueprint);
        let ranked = sort_by_rank(drafts, &index);

        let ranks: Vec<u32> = ranked.iter().map(|(rank, _)| *rank).collect();
        let sections = assign_order(ranked.into_iter().map(|(_, draft)| draft).collect());
        let report = OrderingReport::build(blueprint, &sections, &ranks, renamed);

        tracing::debug!(
            "ordered {} sections for {}: {} unmatched, {} renamed, {} missing",
            sections.len(),
            contract_type,
            report.unmatched.len(),
            report.renamed.len(),
            report.missing.len()
        );

        OrderingOutcome { sections, report }
    }
}

/// Order `sections` for `contract_type` using `registry`.
pub fn normalize_and_order(
    registry: &BlueprintRegistry,
    sections: Vec<SectionDraft>,
    contract_type: ContractType,
) -> Vec<OrderedSection> {
    SectionOrderer::new(registry).order(sections, contract_type)
}

/// Trim title and body, and replace the title with its display form.
pub fn normalize_drafts(sections: Vec<SectionDraft>) -> Vec<SectionDraft> {
    sections
        .into_iter()
        .map(|section| SectionDraft {
            title: display_title(&section.title),
            body: section.body.trim().to_string(),
        })
        .collect()
}

/// Pair each section with its rank and stable-sort ascending.
///
/// Sections with equal rank (in practice, all unmatched ones) keep their
/// input order.
pub fn sort_by_rank(sections: Vec<SectionDraft>, index: &RankIndex) -> Vec<(u32, SectionDraft)> {
    let mut ranked: Vec<(u32, SectionDraft)> = sections
        .into_iter()
        .map(|section| (index.rank_of_title(&section.title), section))
        .collect();
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked
}

/// Number sections by position, starting at 0.
pub fn assign_order(sections: Vec<SectionDraft>) -> Vec<OrderedSection> {
    sections
        .into_iter()
        .enumerate()
        .map(|(order, section)| OrderedSection {
            title: section.title,
            body: section.body,
            order,
        })
        .collect()
}

/// True when `rank` came from the blueprint rather than the sentinel.
pub fn is_matched_rank(rank: u32) -> bool {
    rank < UNMATCHED_RANK
}
