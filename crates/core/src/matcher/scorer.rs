//! Relevance scoring of a release title against known alternate titles.

use std::collections::HashSet;

use super::tokenizer::{is_digit_only, tokenize};
use super::zones::TitleZones;

/// Reward for each alt-title token found in the core title.
pub const CORE_MATCH_REWARD: f64 = 3.0;
/// Penalty for each alt-title token that only appears in a group tag.
pub const GROUP_COLLISION_PENALTY: f64 = 5.0;
/// Penalty, divided by the alt-title token count, for each token present on
/// only one side. Applied to multi-token alt titles only.
pub const EXTRA_TOKEN_PENALTY: f64 = 3.0;
/// Minimum relevance for a release to be kept.
pub const MATCH_THRESHOLD: f64 = 1.5;

/// Whether a relevance score clears [`MATCH_THRESHOLD`].
pub fn is_relevant(score: f64) -> bool {
    score >= MATCH_THRESHOLD
}

/// Score `item_title` against every alt title and return the best score.
///
/// Returns 0 when no alt title produces any tokens. Scores can be negative.
pub fn score(item_title: &str, alt_titles: &[impl AsRef<str>]) -> f64 {
    let zones = TitleZones::parse(item_title);
    let core_tokens = tokenize(&zones.core_title);
    let core_set: HashSet<&str> = core_tokens.iter().map(String::as_str).collect();

    let group_tokens: Vec<String> = zones.group_tags.iter().flat_map(|g| tokenize(g)).collect();
    let group_set: HashSet<&str> = group_tokens.iter().map(String::as_str).collect();

    let mut best: Option<f64> = None;

    for alt in alt_titles {
        let alt_tokens = tokenize(alt.as_ref());
        if alt_tokens.is_empty() {
            continue;
        }
        let alt_len = alt_tokens.len() as f64;

        let raw: f64 = alt_tokens
            .iter()
            .map(|t| {
                if core_set.contains(t.as_str()) {
                    CORE_MATCH_REWARD
                } else if group_set.contains(t.as_str()) {
                    -GROUP_COLLISION_PENALTY
                } else {
                    0.0
                }
            })
            .sum();

        let mut norm = raw / alt_len;

        // Single-token titles ("K", "86") have nothing to compare extras against.
        if alt_tokens.len() >= 2 {
            let alt_set: HashSet<&str> = alt_tokens.iter().map(String::as_str).collect();

            let penalty = EXTRA_TOKEN_PENALTY / alt_len;

            // Core extras are normalized by the alt length too; thresholds depend on it.
            for token in &core_tokens {
                if !is_digit_only(token) && !alt_set.contains(token.as_str()) {
                    norm -= penalty;
                }
            }
            for token in &alt_tokens {
                if !core_set.contains(token.as_str()) {
                    norm -= penalty;
                }
            }
        }

        best = Some(best.map_or(norm, |b| b.max(norm)));
    }

    best.unwrap_or(0.0)
}
