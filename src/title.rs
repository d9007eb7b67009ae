//! Section title normalization.
//!
//! Every title has two forms:
//! - a comparison key (trimmed, lowercased) used for blueprint lookups
//! - a display form (trimmed, Title Case) used for what gets persisted
//!
//! The display form is regenerated on every pass, so an all-caps or
//! mixed-case title coming back from a generator is re-cased even when it
//! already matches a blueprint entry.

use unicode_segmentation::UnicodeSegmentation;

/// Both forms of a normalized title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTitle {
    /// Title Case form, for display and persistence
    pub display: String,
    /// Lowercased, trimmed form, for matching
    pub key: String,
}

impl NormalizedTitle {
    pub fn new(raw: &str) -> Self {
        Self {
            display: display_title(raw),
            key: comparison_key(raw),
        }
    }
}

/// Comparison key: leading/trailing whitespace trimmed, lowercased.
pub fn comparison_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Display form: the title is lower-cased as a whole, then the first
/// grapheme of each whitespace-separated word is upper-cased.
///
/// Whitespace between words is kept as written. A first grapheme whose upper
/// case does not lower-case back to it (`ß` → `SS`) is left as is, so the
/// display form keeps the comparison key of the raw title.
///
/// ```
/// use contract_sections::display_title;
///
/// assert_eq!(display_title("  PARTIES & EVENT overview "), "Parties & Event Overview");
/// ```
pub fn display_title(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for grapheme in lowered.graphemes(true) {
        if grapheme.chars().all(char::is_whitespace) {
            out.push_str(grapheme);
            at_word_start = true;
        } else if at_word_start {
            out.push_str(&upper_first(grapheme));
            at_word_start = false;
        } else {
            out.push_str(grapheme);
        }
    }

    out
}

fn upper_first(grapheme: &str) -> String {
    let upper: String = grapheme.chars().flat_map(char::to_uppercase).collect();
    if upper.to_lowercase() == grapheme {
        upper
    } else {
        grapheme.to_string()
    }
}
