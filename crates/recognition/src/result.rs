use heycoach_domain::{Confidence, ExerciseDefinition, Reps, Seconds, Weight};

/// A vocabulary entry matched against a search phrase.
///
/// Ephemeral: created per query, discarded after consumption, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExerciseMatch {
    pub exercise: &'static ExerciseDefinition,
    /// 1.0 is an exact hit on the canonical name or an alias.
    pub score: Confidence,
    /// The alias that produced an exact hit, if it was not the canonical
    /// name.
    pub matched_alias: Option<&'static str>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ParsedSet {
    pub reps: Option<Reps>,
    pub weight: Option<Weight>,
    pub duration: Option<Seconds>,
    pub rest_time: Option<Seconds>,
    /// Parser certainty, not matching certainty.
    pub confidence: Confidence,
}

impl ParsedSet {
    /// A set without reps, weight, or duration carries no information.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        self.reps.is_some() || self.weight.is_some() || self.duration.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExercise {
    pub name: String,
    pub match_confidence: Confidence,
    pub exercise_id: Option<&'static str>,
    /// Chronological set order as spoken.
    pub sets: Vec<ParsedSet>,
    /// Aggregate fields populated by callers, not by the pipeline.
    pub total_duration: Option<Seconds>,
    pub distance: Option<f32>,
}

/// The result of processing one transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceRecognitionResult {
    /// The raw input text, preserved verbatim.
    pub transcript: String,
    /// Aggregate certainty that any exercise was found.
    pub confidence: Confidence,
    /// Extraction rank, highest confidence first.
    pub exercises: Vec<ParsedExercise>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_set_is_meaningful() {
        assert!(!ParsedSet::default().is_meaningful());
        assert!(
            ParsedSet {
                reps: Reps::new(10).ok(),
                ..ParsedSet::default()
            }
            .is_meaningful()
        );
        assert!(
            ParsedSet {
                weight: Weight::new(60.0).ok(),
                ..ParsedSet::default()
            }
            .is_meaningful()
        );
        assert!(
            ParsedSet {
                duration: Seconds::new(30).ok(),
                ..ParsedSet::default()
            }
            .is_meaningful()
        );
        assert!(
            !ParsedSet {
                rest_time: Seconds::new(60).ok(),
                ..ParsedSet::default()
            }
            .is_meaningful()
        );
    }
}
