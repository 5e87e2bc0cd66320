use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid formation size: expected {expected} slots, found {found}")]
    InvalidFormationSize { expected: usize, found: usize },

    #[error("Rating out of range: {0} (must be between 1 and 10)")]
    RatingOutOfRange(f64),

    #[error("Unknown position code: {0}")]
    UnknownPosition(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            RosterError::InvalidFormationSize { .. } => "INVALID_FORMATION_SIZE",
            RosterError::RatingOutOfRange(_) => "RATING_OUT_OF_RANGE",
            RosterError::UnknownPosition(_) => "UNKNOWN_POSITION",
            RosterError::UnsupportedSchema { .. } => "UNSUPPORTED_SCHEMA",
            RosterError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
