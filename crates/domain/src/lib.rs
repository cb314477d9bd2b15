#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod quantity;
pub mod vocabulary;

pub use quantity::{
    Confidence, ConfidenceError, Reps, RepsError, Seconds, SecondsError, Weight, WeightError,
};
pub use vocabulary::{Category, DifficultyLevel, ExerciseDefinition, MovementPattern};
