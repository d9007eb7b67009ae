//! Summary of one ordering pass, for review screens and snapshot tests.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dedup::Rename;
use crate::ordering::is_matched_rank;
use crate::title::comparison_key;
use crate::{Blueprint, ContractType, OrderedSection};

/// What the orderer did with a contract's sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingReport {
    pub contract_type: ContractType,
    /// Number of sections in the blueprint used
    pub blueprint_len: usize,
    /// `(order, rank)` for every section that matched the blueprint
    pub matched: Vec<(usize, u32)>,
    /// Output titles that matched nothing, in output order
    pub unmatched: Vec<String>,
    /// Titles changed by deduplication
    pub renamed: Vec<Rename>,
    /// Blueprint sections with no matching output section, in blueprint order
    pub missing: Vec<String>,
}

impl OrderingReport {
    pub(crate) fn build(
        blueprint: &Blueprint,
        sections: &[OrderedSection],
        ranks: &[u32],
        renamed: Vec<Rename>,
    ) -> Self {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for (section, &rank) in sections.iter().zip(ranks) {
            if is_matched_rank(rank) {
                matched.push((section.order, rank));
            } else {
                unmatched.push(section.title.clone());
            }
        }

        let present: HashSet<String> = sections.iter().map(|s| comparison_key(&s.title)).collect();
        let missing = blueprint
            .sections
            .iter()
            .filter(|title| !present.contains(&comparison_key(title)))
            .cloned()
            .collect();

        Self {
            contract_type: blueprint.contract_type,
            blueprint_len: blueprint.len(),
            matched,
            unmatched,
            renamed,
            missing,
        }
    }

    /// Fraction of blueprint sections present in the output.
    ///
    /// An empty blueprint is fully covered.
    pub fn coverage(&self) -> f64 {
        if self.blueprint_len == 0 {
            return 1.0;
        }
        (self.blueprint_len - self.missing.len()) as f64 / self.blueprint_len as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    fn rank_of(&self, order: usize) -> Option<u32> {
        self.matched
            .iter()
            .find(|(o, _)| *o == order)
            .map(|(_, rank)| *rank)
    }
}

/// Ordered sections together with their report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingOutcome {
    pub sections: Vec<OrderedSection>,
    pub report: OrderingReport,
}

impl fmt::Display for OrderingOutcome {
    /// Plain-text outline:
    ///
    /// ```text
    /// GOLF_OUTING (2 sections, coverage 1/13)
    /// 0. Parties & Event Overview [rank 1]
    /// 1. Conclusion [unmatched]
    /// missing:
    ///   Event Date, Time & Location
    ///   ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.report;
        writeln!(
            f,
            "{} ({} sections, coverage {}/{})",
            report.contract_type,
            self.sections.len(),
            report.blueprint_len - report.missing.len(),
            report.blueprint_len
        )?;

        for section in &self.sections {
            match report.rank_of(section.order) {
                Some(rank) => writeln!(f, "{}. {} [rank {}]", section.order, section.title, rank)?,
                None => writeln!(f, "{}. {} [unmatched]", section.order, section.title)?,
            }
        }

        if !report.renamed.is_empty() {
            writeln!(f, "renamed:")?;
            for rename in &report.renamed {
                writeln!(f, "  {} -> {}", rename.from, rename.to)?;
            }
        }

        if !report.missing.is_empty() {
            writeln!(f, "missing:")?;
            for title in &report.missing {
                writeln!(f, "  {}", title)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlueprintRegistry, SectionDraft, SectionOrderer};

    fn small_registry() -> BlueprintRegistry {
        BlueprintRegistry::from_blueprints(
            ContractType::ALL
                .iter()
                .map(|&ct| {
                    Blueprint::new(ct, &["Parties", "Fees & Payment", "Signatures"], "")
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_contents() {
        let registry = small_registry();
        let outcome = SectionOrderer::new(&registry).order_with_report(
            vec![
                SectionDraft::new("notes", "a"),
                SectionDraft::new("SIGNATURES", ""),
                SectionDraft::new("Notes", "b"),
                SectionDraft::new("parties", ""),
            ],
            ContractType::Other,
        );

        let report = &outcome.report;
        assert_eq!(report.matched, vec![(0, 1), (1, 3)]);
        assert_eq!(report.unmatched, vec!["Notes", "Notes (2)"]);
        assert_eq!(report.missing, vec!["Fees & Payment"]);
        assert_eq!(report.renamed.len(), 1);
        assert_eq!(report.renamed[0].index, 2);
        assert!(!report.is_complete());
        assert!((report.coverage() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_outline_snapshot() {
        let registry = small_registry();
        let outcome = SectionOrderer::new(&registry).order_with_report(
            vec![
                SectionDraft::new("Notes", ""),
                SectionDraft::new("fees & payment", ""),
                SectionDraft::new("notes", ""),
                SectionDraft::new("Parties", ""),
            ],
            ContractType::GolfLeague,
        );

        insta::assert_snapshot!(outcome.to_string(), @r###"
        GOLF_LEAGUE (4 sections, coverage 2/3)
        0. Parties [rank 1]
        1. Fees & Payment [rank 2]
        2. Notes [unmatched]
        3. Notes (2) [unmatched]
        renamed:
          Notes -> Notes (2)
        missing:
          Signatures
        "###);
    }

    #[test]
    fn test_complete_outline_snapshot() {
        let registry = small_registry();
        let outcome = SectionOrderer::new(&registry).order_with_report(
            vec![
                SectionDraft::new("signatures", ""),
                SectionDraft::new("Fees & Payment", ""),
                SectionDraft::new("Parties", ""),
            ],
            ContractType::Wedding,
        );

        assert!(outcome.report.is_complete());
        insta::assert_snapshot!(outcome.to_string(), @r###"
        WEDDING (3 sections, coverage 3/3)
        0. Parties [rank 1]
        1. Fees & Payment [rank 2]
        2. Signatures [rank 3]
        "###);
    }

    #[test]
    fn test_empty_blueprint_coverage() {
        let report = OrderingReport {
            contract_type: ContractType::Other,
            blueprint_len: 0,
            matched: vec![],
            unmatched: vec![],
            renamed: vec![],
            missing: vec![],
        };
        assert_eq!(report.coverage(), 1.0);
    }
}
