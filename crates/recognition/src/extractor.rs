use heycoach_domain::Confidence;
use log::debug;

use crate::{matcher::ExerciseMatcher, result::ExerciseMatch};

/// Longest n-gram window submitted to the matcher, in words.
///
/// Single-word windows catch names like "squats", four-word windows catch
/// names like "downward facing dog".
const MAX_WINDOW_WORDS: usize = 4;

/// Minimum score for a window to count as a real exercise mention.
const CONFIDENCE_FLOOR: Confidence = Confidence::clamped(0.7);

/// Locates exercise mentions inside a full utterance.
///
/// Users speak whole sentences, not isolated exercise names, so every
/// 1-4 word window of the utterance is tried against the matcher.
pub struct PhraseExtractor {
    matcher: ExerciseMatcher,
}

impl PhraseExtractor {
    #[must_use]
    pub fn new(matcher: ExerciseMatcher) -> Self {
        Self { matcher }
    }

    #[must_use]
    pub fn matcher(&self) -> &ExerciseMatcher {
        &self.matcher
    }

    /// Returns all confident exercise mentions in the text, best first,
    /// at most one per exercise.
    #[must_use]
    pub fn parse_exercises_from_text(&self, text: &str) -> Vec<ExerciseMatch> {
        let words = words(text);
        let mut matches: Vec<ExerciseMatch> = Vec::new();

        for start in 0..words.len() {
            for len in 1..=MAX_WINDOW_WORDS.min(words.len() - start) {
                let window = words[start..start + len].join(" ");
                let Some(candidate) = self.matcher.find_best_match(&window) else {
                    continue;
                };
                if candidate.score <= CONFIDENCE_FLOOR {
                    continue;
                }
                match matches
                    .iter_mut()
                    .find(|m| m.exercise.id == candidate.exercise.id)
                {
                    Some(existing) => {
                        if candidate.score > existing.score {
                            *existing = candidate;
                        }
                    }
                    None => matches.push(candidate),
                }
            }
        }

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        debug!("extracted {} exercise mentions", matches.len());
        matches
    }
}

/// Lowercased words of the utterance, with surrounding punctuation
/// stripped so that "squats." still hits the catalog exactly.
fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| c.is_ascii_punctuation())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}
