use thiserror::Error;

#[derive(Debug, Error)]
pub enum HousingFinanceError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing answer for required question '{question}'")]
    MissingAnswer { question: String },

    #[error("Unknown option '{value}' for question '{question}'")]
    UnknownOption { question: String, value: String },
}
