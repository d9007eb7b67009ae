//! Section records on both sides of the ordering engine.

use serde::{Deserialize, Serialize};

use crate::SectionsResult;

/// A section as supplied by a generator or a manual form, before ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl SectionDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Parse a JSON array of `{ "title": ..., "body": ... }` objects.
    ///
    /// A missing `body` is read as an empty string.
    pub fn list_from_json(json: &str) -> SectionsResult<Vec<SectionDraft>> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A section with its final position, ready to be persisted under a
/// contract or template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedSection {
    pub title: String,
    pub body: String,
    /// 0-based, contiguous position in the ordered list
    pub order: usize,
}

/// Access to the title of a section-like record, used by the deduplicator.
pub trait Titled {
    fn title(&self) -> &str;
    fn set_title(&mut self, title: String);
}

impl Titled for SectionDraft {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: String) {
        self.title = title;
    }
}

impl From<OrderedSection> for SectionDraft {
    fn from(section: OrderedSection) -> Self {
        SectionDraft {
            title: section.title,
            body: section.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectionsError;

    #[test]
    fn test_list_from_json() {
        let drafts = SectionDraft::list_from_json(
            r#"[
                {"title": "Payment Terms", "body": "Net 30."},
                {"title": "Conclusion"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            drafts,
            vec![
                SectionDraft::new("Payment Terms", "Net 30."),
                SectionDraft::new("Conclusion", ""),
            ]
        );
    }

    #[test]
    fn test_list_from_json_rejects_non_array() {
        let err = SectionDraft::list_from_json(r#"{"title": "Oops"}"#).unwrap_err();
        assert!(matches!(err, SectionsError::Json(_)));
    }

    #[test]
    fn test_ordered_section_round_trips_to_draft() {
        let ordered = OrderedSection {
            title: "Deposit".to_string(),
            body: "50% due at signing.".to_string(),
            order: 3,
        };
        let draft: SectionDraft = ordered.into();
        assert_eq!(draft, SectionDraft::new("Deposit", "50% due at signing."));
    }
}
