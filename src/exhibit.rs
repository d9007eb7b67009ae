//! Exhibits appended after the body of a contract.

use crate::SectionDraft;

/// Literal prefix that marks a title as already being an exhibit heading.
pub const EXHIBIT_PREFIX: &str = "Exhibit";

/// Letter for the exhibit at `index`: 0 → `A`, 25 → `Z`, 26 → `AA`, 27 → `AB`, ...
pub fn exhibit_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Heading for an exhibit: kept as-is when it already starts with `Exhibit`,
/// otherwise prefixed with `Exhibit <Letter>: `.
pub fn exhibit_title(title: &str, index: usize) -> String {
    if title.starts_with(EXHIBIT_PREFIX) {
        title.to_string()
    } else {
        format!("{} {}: {}", EXHIBIT_PREFIX, exhibit_letter(index), title)
    }
}

/// Append exhibits after the primary sections.
///
/// Returns `primary` unchanged when there are no exhibits. Lettering follows
/// each exhibit's position in `exhibits`, whether or not it needed a prefix.
pub fn merge_exhibits(
    mut primary: Vec<SectionDraft>,
    exhibits: Option<&[SectionDraft]>,
) -> Vec<SectionDraft> {
    let exhibits = match exhibits {
        Some(exhibits) if !exhibits.is_empty() => exhibits,
        _ => return primary,
    };

    primary.reserve(exhibits.len());
    for (idx, exhibit) in exhibits.iter().enumerate() {
        primary.push(SectionDraft {
            title: exhibit_title(&exhibit.title, idx),
            body: exhibit.body.clone(),
        });
    }
    primary
}
