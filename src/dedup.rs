//! Duplicate title resolution within one contract.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::section::Titled;

/// A title changed by [`dedupe_titles`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rename {
    /// Position in the input sequence
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// Suffix repeated titles with ` (N)` in one left-to-right pass.
///
/// Titles are compared exactly (they are expected to be normalized already).
/// The first occurrence keeps its title; the Nth gets ` (N)`. When that
/// candidate is already in use, N keeps increasing until the title is free,
/// so the result never contains two identical titles.
///
/// Returns the renames performed, in input order.
pub fn dedupe_titles<T: Titled>(sections: &mut [T]) -> Vec<Rename> {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut renames = Vec::new();

    for (index, section) in sections.iter_mut().enumerate() {
        let title = section.title().to_string();
        let seen = occurrences.entry(title.clone()).or_insert(0);
        *seen += 1;

        if *seen == 1 && !taken.contains(&title) {
            taken.insert(title);
            continue;
        }

        let mut n = (*seen).max(2);
        let mut candidate = format!("{} ({})", title, n);
        while taken.contains(&candidate) {
            n += 1;
            candidate = format!("{} ({})", title, n);
        }
        *seen = n;

        taken.insert(candidate.clone());
        section.set_title(candidate.clone());
        renames.push(Rename {
            index,
            from: title,
            to: candidate,
        });
    }

    renames
}
