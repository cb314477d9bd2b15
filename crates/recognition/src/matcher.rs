use heycoach_domain::{Confidence, ExerciseDefinition, vocabulary};
use log::debug;
use strsim::normalized_levenshtein;

use crate::{error::IndexError, result::ExerciseMatch};

/// Phrases shorter than this after trimming never match.
const MIN_PHRASE_LEN: usize = 2;
/// Tokens shorter than this do not contribute to token similarity.
const MIN_TOKEN_LEN: usize = 2;
/// Normalized edit distance above which a candidate is discarded.
const MAX_DISSIMILARITY: f64 = 0.4;

/// Fuzzy search index over the exercise vocabulary.
///
/// Built once at startup and read-only afterwards, so it can be shared
/// across concurrent callers without locking.
pub struct ExerciseMatcher {
    entries: Vec<IndexEntry>,
}

struct IndexEntry {
    exercise: &'static ExerciseDefinition,
    term: String,
    tokens: Vec<String>,
    alias: Option<&'static str>,
}

impl IndexEntry {
    fn new(
        exercise: &'static ExerciseDefinition,
        term: &str,
        alias: Option<&'static str>,
    ) -> Self {
        let term = term.to_lowercase();
        let tokens = term
            .split_whitespace()
            .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
            .map(str::to_string)
            .collect();
        Self {
            exercise,
            term,
            tokens,
            alias,
        }
    }

    /// Similarity of a normalized phrase to this term, in [0.0, 1.0].
    ///
    /// The better of the whole-string edit similarity and the token-set
    /// similarity, so that word-order variation and partial phrases are
    /// not penalized beyond what their tokens warrant.
    fn similarity(&self, phrase: &str, phrase_tokens: &[&str]) -> f64 {
        normalized_levenshtein(phrase, &self.term)
            .max(token_similarity(phrase_tokens, &self.tokens))
    }
}

impl ExerciseMatcher {
    pub fn new() -> Result<Self, IndexError> {
        Self::with_vocabulary(vocabulary::all())
    }

    pub fn with_vocabulary(
        exercises: &'static [ExerciseDefinition],
    ) -> Result<Self, IndexError> {
        if exercises.is_empty() {
            return Err(IndexError::EmptyVocabulary);
        }

        let mut entries = Vec::new();
        for exercise in exercises {
            entries.push(IndexEntry::new(exercise, exercise.name, None));
            for &alias in exercise.aliases {
                entries.push(IndexEntry::new(exercise, alias, Some(alias)));
            }
        }

        debug!(
            "indexed {} search terms for {} exercises",
            entries.len(),
            exercises.len()
        );

        Ok(Self { entries })
    }

    /// Returns the best matching exercise for a phrase, or `None` if no
    /// candidate comes close enough.
    ///
    /// An exact hit on a canonical name or alias short-circuits with a
    /// score of 1.0; otherwise the fuzzy index is consulted.
    #[must_use]
    pub fn find_best_match(&self, phrase: &str) -> Option<ExerciseMatch> {
        let normalized = normalize(phrase);
        if normalized.chars().count() < MIN_PHRASE_LEN {
            return None;
        }

        if let Some(entry) = self.entries.iter().find(|e| e.term == normalized) {
            return Some(ExerciseMatch {
                exercise: entry.exercise,
                score: Confidence::CERTAIN,
                matched_alias: entry.alias,
            });
        }

        let tokens = tokens(&normalized);
        let mut best: Option<(&IndexEntry, f64)> = None;
        for entry in &self.entries {
            let similarity = entry.similarity(&normalized, &tokens);
            if similarity < 1.0 - MAX_DISSIMILARITY {
                continue;
            }
            if best.is_none_or(|(_, s)| similarity > s) {
                best = Some((entry, similarity));
            }
        }

        best.map(|(entry, similarity)| ExerciseMatch {
            exercise: entry.exercise,
            score: score(similarity),
            matched_alias: None,
        })
    }

    /// Returns the `limit` best matching exercises, best first, at most
    /// one entry per exercise.
    #[must_use]
    pub fn find_multiple_matches(&self, phrase: &str, limit: usize) -> Vec<ExerciseMatch> {
        let normalized = normalize(phrase);
        if normalized.chars().count() < MIN_PHRASE_LEN {
            return Vec::new();
        }

        let tokens = tokens(&normalized);
        let mut best_per_exercise: Vec<(&'static ExerciseDefinition, f64)> = Vec::new();
        for entry in &self.entries {
            let similarity = entry.similarity(&normalized, &tokens);
            if similarity < 1.0 - MAX_DISSIMILARITY {
                continue;
            }
            match best_per_exercise
                .iter_mut()
                .find(|(e, _)| e.id == entry.exercise.id)
            {
                Some((_, s)) if similarity > *s => *s = similarity,
                Some(_) => {}
                None => best_per_exercise.push((entry.exercise, similarity)),
            }
        }

        best_per_exercise.sort_by(|a, b| b.1.total_cmp(&a.1));
        best_per_exercise.truncate(limit);
        best_per_exercise
            .into_iter()
            .map(|(exercise, similarity)| ExerciseMatch {
                exercise,
                score: score(similarity),
                matched_alias: None,
            })
            .collect()
    }
}

fn normalize(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

fn tokens(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

/// Position-independent similarity of two token sets.
///
/// Each token is paired with its most similar counterpart; the result is
/// the lower of the two mean coverages, so a phrase must account for the
/// term's tokens as much as the term accounts for the phrase's.
fn token_similarity(query: &[&str], entry: &[String]) -> f64 {
    if query.is_empty() || entry.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let query_coverage = query
        .iter()
        .map(|q| best_similarity(q, entry.iter().map(String::as_str)))
        .sum::<f64>()
        / query.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let entry_coverage = entry
        .iter()
        .map(|e| best_similarity(e, query.iter().copied()))
        .sum::<f64>()
        / entry.len() as f64;

    query_coverage.min(entry_coverage)
}

fn best_similarity<'a>(token: &str, others: impl Iterator<Item = &'a str>) -> f64 {
    others
        .map(|other| normalized_levenshtein(token, other))
        .fold(0.0, f64::max)
}

#[allow(clippy::cast_possible_truncation)]
fn score(similarity: f64) -> Confidence {
    Confidence::clamped(similarity as f32)
}
