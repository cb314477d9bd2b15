use heycoach_domain::{Confidence, Reps, Weight};
use log::{debug, warn};

use crate::{
    error::IndexError,
    extractor::PhraseExtractor,
    matcher::ExerciseMatcher,
    parser,
    result::{ParsedExercise, ParsedSet, VoiceRecognitionResult},
};

/// Minimum match score for an extracted candidate to be turned into a
/// parsed exercise.
const MATCH_FLOOR: Confidence = Confidence::clamped(0.6);

/// Aggregate confidence when at least one exercise was parsed.
const PARSED_CONFIDENCE: Confidence = Confidence::clamped(0.85);
/// Aggregate confidence when nothing was recognized.
const EMPTY_CONFIDENCE: Confidence = Confidence::clamped(0.3);

const DEMO_EXERCISE: &str = "bench press";
const DEMO_CONFIDENCE: Confidence = Confidence::clamped(0.8);
const DEMO_REPS: [u32; 3] = [12, 10, 8];
const DEMO_WEIGHT: f32 = 185.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Substitute a fixed illustrative exercise when nothing was
    /// recognized, so demo builds always have something to display.
    /// Off by default; production callers should prompt for a retry on an
    /// empty result instead.
    pub demo_fallback: bool,
}

/// One request/response cycle per utterance: extract exercise mentions,
/// derive sets for each, assemble the result.
pub struct RecognitionPipeline {
    extractor: PhraseExtractor,
    config: PipelineConfig,
}

impl RecognitionPipeline {
    pub fn new() -> Result<Self, IndexError> {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Result<Self, IndexError> {
        Ok(Self {
            extractor: PhraseExtractor::new(ExerciseMatcher::new()?),
            config,
        })
    }

    #[must_use]
    pub fn process_transcript(&self, transcript: &str) -> VoiceRecognitionResult {
        debug!("processing transcript: {transcript}");

        let mut exercises = Vec::new();
        for matched in self.extractor.parse_exercises_from_text(transcript) {
            if matched.score <= MATCH_FLOOR {
                continue;
            }
            // sets are derived from the whole utterance, not the matched span
            exercises.push(ParsedExercise {
                name: matched.exercise.name.to_string(),
                match_confidence: matched.score,
                exercise_id: Some(matched.exercise.id),
                sets: parser::parse_sets(transcript),
                total_duration: None,
                distance: None,
            });
        }

        if exercises.is_empty() && self.config.demo_fallback {
            if let Some(demo) = self.demo_exercise() {
                warn!("nothing recognized, substituting demonstration exercise");
                exercises.push(demo);
            }
        }

        let confidence = if exercises.is_empty() {
            EMPTY_CONFIDENCE
        } else {
            PARSED_CONFIDENCE
        };

        VoiceRecognitionResult {
            transcript: transcript.to_string(),
            confidence,
            exercises,
        }
    }

    fn demo_exercise(&self) -> Option<ParsedExercise> {
        let matched = self.extractor.matcher().find_best_match(DEMO_EXERCISE)?;
        Some(ParsedExercise {
            name: matched.exercise.name.to_string(),
            match_confidence: DEMO_CONFIDENCE,
            exercise_id: Some(matched.exercise.id),
            sets: DEMO_REPS
                .iter()
                .map(|&reps| ParsedSet {
                    reps: Reps::new(reps).ok(),
                    weight: Weight::new(DEMO_WEIGHT).ok(),
                    confidence: Confidence::clamped(0.9),
                    ..ParsedSet::default()
                })
                .collect(),
            total_duration: None,
            distance: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use heycoach_domain::vocabulary;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn pipeline() -> RecognitionPipeline {
        RecognitionPipeline::new().unwrap()
    }

    #[test]
    fn test_full_utterance() {
        let result = pipeline().process_transcript(
            "I did 3 sets of bench press with 185 pounds, 12 reps, 10 reps, and 8 reps",
        );

        assert_eq!(result.confidence, Confidence::clamped(0.85));
        assert_eq!(result.exercises.len(), 1);

        let exercise = &result.exercises[0];
        assert_eq!(exercise.name, "Barbell Bench Press");
        assert_eq!(exercise.exercise_id, Some("bench-press-barbell"));
        assert_eq!(exercise.match_confidence, Confidence::CERTAIN);
        assert_eq!(
            exercise
                .sets
                .iter()
                .map(|s| s.reps.map(u32::from).unwrap())
                .collect::<Vec<_>>(),
            [12, 10, 8]
        );
        for set in &exercise.sets {
            assert_approx_eq!(set.weight.map(f32::from).unwrap(), 185.0);
            assert_eq!(set.confidence, Confidence::clamped(0.9));
        }
    }

    #[test]
    fn test_defaults_without_numbers() {
        let result = pipeline().process_transcript("I did squats");

        assert_eq!(result.exercises.len(), 1);
        assert_eq!(result.exercises[0].exercise_id, Some("squat-back-barbell"));
        assert!(!result.exercises[0].sets.is_empty());
        for set in &result.exercises[0].sets {
            assert!(set.confidence <= Confidence::clamped(0.7));
        }
    }

    #[test]
    fn test_multiple_exercises_share_the_utterance_numbers() {
        let result =
            pipeline().process_transcript("3 sets of 12 reps of lunges and then push ups");

        let ids = result
            .exercises
            .iter()
            .map(|e| e.exercise_id.unwrap())
            .collect::<Vec<_>>();
        assert!(ids.contains(&"lunge"));
        assert!(ids.contains(&"push-up"));
        for exercise in &result.exercises {
            assert_eq!(exercise.sets.len(), 3);
        }
    }

    #[rstest]
    #[case("")]
    #[case("nothing relevant at all")]
    fn test_no_match_yields_empty_result(#[case] transcript: &str) {
        let result = pipeline().process_transcript(transcript);

        assert_eq!(result.exercises, vec![]);
        assert_eq!(result.confidence, Confidence::clamped(0.3));
    }

    #[test]
    fn test_demo_fallback_enabled() {
        let pipeline = RecognitionPipeline::with_config(PipelineConfig {
            demo_fallback: true,
        })
        .unwrap();

        let result = pipeline.process_transcript("nothing relevant at all");

        assert_eq!(result.confidence, Confidence::clamped(0.85));
        assert_eq!(result.exercises.len(), 1);

        let exercise = &result.exercises[0];
        assert_eq!(exercise.exercise_id, Some("bench-press-barbell"));
        assert_eq!(exercise.match_confidence, Confidence::clamped(0.8));
        assert_eq!(
            exercise
                .sets
                .iter()
                .map(|s| s.reps.map(u32::from).unwrap())
                .collect::<Vec<_>>(),
            [12, 10, 8]
        );
    }

    #[test]
    fn test_demo_fallback_not_used_on_success() {
        let pipeline = RecognitionPipeline::with_config(PipelineConfig {
            demo_fallback: true,
        })
        .unwrap();

        let result = pipeline.process_transcript("I did squats");

        assert_eq!(result.exercises.len(), 1);
        assert_eq!(result.exercises[0].exercise_id, Some("squat-back-barbell"));
    }

    #[test]
    fn test_transcript_preserved_verbatim() {
        let transcript = "  I did SQUATS!  ";
        let result = pipeline().process_transcript(transcript);

        assert_eq!(result.transcript, transcript);
    }

    #[test]
    fn test_vocabulary_backs_the_demo_entry() {
        // the demonstration exercise must exist in the catalog
        assert!(vocabulary::by_id("bench-press-barbell").is_some());
    }
}
