use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("Expected 10 scores, got {0}")]
    WrongLength(usize),

    #[error("Score for criterion {criterion} must be between 0 and 10, got {value}")]
    OutOfRange { criterion: usize, value: i32 },

    #[error("Unknown gender '{0}', expected 'male' or 'female'")]
    UnknownGender(String),
}
