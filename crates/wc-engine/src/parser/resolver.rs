//! Fuzzy suggestions for mistyped verbs and names.

use strsim::jaro_winkler;

use super::command::VERB_TABLE;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Suggest the known verb closest to `input`.
///
/// One- and two-letter abbreviations are left out; they match almost
/// anything.
pub fn suggest_verb(input: &str) -> Option<&'static str> {
    let candidates = VERB_TABLE
        .iter()
        .flat_map(|group| group.iter().copied())
        .filter(|verb| verb.len() > 2);
    best_match(input, candidates)
}

/// Suggest the name closest to `input` among `names`.
pub fn suggest_name<'a>(input: &str, names: impl IntoIterator<Item = &'a str>) -> Option<String> {
    best_match(input, names).map(str::to_string)
}

fn best_match<'a>(input: &str, candidates: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let input_lower = input.trim().to_lowercase();
    if input_lower.is_empty() {
        return None;
    }

    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let score = jaro_winkler(&input_lower, &candidate.to_lowercase());
        if score >= SUGGEST_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.map(|(name, _)| name)
}
