use std::sync::LazyLock;

use heycoach_domain::{Confidence, Reps, Weight};
use log::debug;
use regex::Regex;

use crate::result::ParsedSet;

/// Assumed set count when the utterance does not state one.
const DEFAULT_SET_COUNT: u32 = 3;
/// Fallback rep count when no plausible rep number is present.
const DEFAULT_REPS: u32 = 10;
/// A loose number is only taken as a rep count within this range.
const PLAUSIBLE_REPS: std::ops::RangeInclusive<f64> = 5.0..=30.0;

const REP_SEQUENCE_CONFIDENCE: Confidence = Confidence::clamped(0.9);
const REPRESENTATIVE_CONFIDENCE: Confidence = Confidence::clamped(0.7);
const MINIMAL_CONFIDENCE: Confidence = Confidence::clamped(0.5);

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("invalid number pattern"));

static SET_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*sets?").expect("invalid set count pattern"));

// "12 reps, 10 reps, and 8 reps" as well as "12, 10, 8 reps".
static REP_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*(?:reps?\s*)?,\s*(?:and\s+)?(\d+)\s*(?:reps?\s*)?,?\s*(?:and\s+)?(\d+)\s*reps?")
        .expect("invalid rep sequence pattern")
});

static WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:pounds?|lbs?|kg)").expect("invalid weight pattern")
});

/// Every numeric token of the text, in order of appearance.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Recovers the sets of one exercise mention from the whole utterance.
///
/// Malformed numeric text never fails: anything the patterns cannot make
/// sense of degrades to defaults with a reduced confidence. One weight is
/// applied uniformly to all sets; per-set weight variation (pyramid sets)
/// is not captured.
#[must_use]
pub fn parse_sets(text: &str) -> Vec<ParsedSet> {
    let text = text.to_lowercase();
    let num_sets = SET_COUNT
        .captures(&text)
        .and_then(|c| c[1].parse::<u32>().ok())
        .unwrap_or(DEFAULT_SET_COUNT);
    let weight = WEIGHT
        .captures(&text)
        .and_then(|c| Weight::try_from(&c[1]).ok());

    let mut sets = Vec::new();
    if let Some(rep_counts) = rep_sequence(&text) {
        for reps in rep_counts.into_iter().take(num_sets as usize) {
            sets.push(ParsedSet {
                reps: Some(reps),
                weight,
                confidence: REP_SEQUENCE_CONFIDENCE,
                ..ParsedSet::default()
            });
        }
    } else {
        let reps = representative_reps(&extract_numbers(&text));
        for _ in 0..num_sets {
            sets.push(ParsedSet {
                reps,
                weight,
                confidence: REPRESENTATIVE_CONFIDENCE,
                ..ParsedSet::default()
            });
        }
    }

    if sets.is_empty() {
        debug!("no sets recovered, emitting minimal set");
        sets.push(ParsedSet {
            reps: Reps::new(DEFAULT_REPS).ok(),
            confidence: MINIMAL_CONFIDENCE,
            ..ParsedSet::default()
        });
    }

    sets
}

/// Distinct per-set rep counts, if the utterance enumerates them.
///
/// A capture outside the valid rep range invalidates the whole sequence
/// so that the caller falls back to the representative rep count.
fn rep_sequence(text: &str) -> Option<Vec<Reps>> {
    let captures = REP_SEQUENCE.captures(text)?;
    (1..=3)
        .map(|i| captures.get(i).and_then(|m| Reps::try_from(m.as_str()).ok()))
        .collect()
}

/// The first loose number that plausibly is a rep count, or the default.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn representative_reps(numbers: &[f64]) -> Option<Reps> {
    numbers
        .iter()
        .find(|n| PLAUSIBLE_REPS.contains(*n))
        .and_then(|n| Reps::new(*n as u32).ok())
        .or_else(|| Reps::new(DEFAULT_REPS).ok())
}
