#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IndexError {
    #[error("exercise vocabulary is empty")]
    EmptyVocabulary,
}
