//! Doctor roster (static reference data).
//!
//! The roster is generated by cycling given names and surnames together, so
//! it holds fifty entries but only ten distinct doctors. Order and repetition
//! are part of the roster and are preserved.

use std::collections::HashSet;

use serde::Serialize;
use strsim::{jaro_winkler, normalized_levenshtein};

/// Number of entries in the roster.
pub const ROSTER_SIZE: usize = 50;

const GIVEN_NAMES: [&str; 10] = [
    "Arjun", "Anita", "Ravi", "Pooja", "Amit", "Sneha", "Kiran", "Meena", "Raj", "Simran",
];

const SURNAMES: [&str; 5] = ["Sharma", "Verma", "Patel", "Reddy", "Gupta"];

/// Minimum similarity for a roster name to be suggested.
const MIN_SUGGESTION_SCORE: f64 = 0.55;

/// A ranked roster match for a picker query.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DoctorSuggestion {
    pub name: String,
    pub score: f64,
}

/// The fixed list of bookable doctors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRoster {
    names: Vec<String>,
    /// Index of each doctor's first appearance in `names`.
    first_seen: Vec<usize>,
}

impl Default for DoctorRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorRoster {
    /// Build the standard roster.
    pub fn new() -> Self {
        let names = (0..ROSTER_SIZE)
            .map(|i| {
                format!(
                    "Dr. {} {}",
                    GIVEN_NAMES[i % GIVEN_NAMES.len()],
                    SURNAMES[i % SURNAMES.len()]
                )
            })
            .collect::<Vec<String>>();

        let first_seen = {
            let mut seen = HashSet::new();
            names
                .iter()
                .enumerate()
                .filter(|(_, name)| seen.insert(name.as_str()))
                .map(|(i, _)| i)
                .collect()
        };
        Self { names, first_seen }
    }

    /// All roster entries, duplicates included, in picker order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Distinct doctors in first-appearance order.
    pub fn distinct(&self) -> Vec<&str> {
        self.first_seen
            .iter()
            .map(|&i| self.names[i].as_str())
            .collect()
    }

    /// Check whether a name is on the roster (exact match).
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Rank distinct doctors against a free-text query, best first.
    ///
    /// Substring hits score 1.0; everything else is scored by fuzzy
    /// similarity against the full name and each name part.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<DoctorSuggestion> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<DoctorSuggestion> = self
            .distinct()
            .into_iter()
            .map(|name| DoctorSuggestion {
                name: name.to_string(),
                score: score_name(&query, name),
            })
            .filter(|s| s.score >= MIN_SUGGESTION_SCORE)
            .collect();

        // Stable sort keeps roster order among ties
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);
        scored
    }
}

fn score_name(query: &str, name: &str) -> f64 {
    let name_lower = name.to_lowercase();
    if name_lower.contains(query) {
        return 1.0;
    }

    let full = fuzzy_match(query, &name_lower);
    let best_part = name_lower
        .trim_start_matches("dr. ")
        .split_whitespace()
        .map(|part| fuzzy_match(query, part))
        .fold(0.0, f64::max);

    full.max(best_part)
}

fn fuzzy_match(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favours shared prefixes; Levenshtein covers the rest
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);
    jw * 0.6 + lev * 0.4
}
