#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Turns a free-text workout description into structured exercise data.
//!
//! The pipeline is synchronous and stateless per call: the only shared
//! state is the fuzzy matcher's index, built once over the immutable
//! exercise vocabulary and safe for unlimited concurrent readers.

pub mod error;
pub mod extractor;
pub mod matcher;
pub mod parser;
pub mod pipeline;
pub mod result;

pub use error::IndexError;
pub use extractor::PhraseExtractor;
pub use matcher::ExerciseMatcher;
pub use parser::{extract_numbers, parse_sets};
pub use pipeline::{PipelineConfig, RecognitionPipeline};
pub use result::{ExerciseMatch, ParsedExercise, ParsedSet, VoiceRecognitionResult};
