use thiserror::Error;

#[derive(Error, Debug)]
pub enum PigError {
    #[error("Invalid decision {0:?}, expected 'r' to roll or 'h' to hold")]
    InvalidDecision(String),
    #[error("Input closed while waiting for a decision")]
    InputClosed,
    #[error("Input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{operation} is only allowed in {allowed} phase")]
    PhaseViolation { operation: String, allowed: String },
    #[error("Invalid rule: {0}")]
    InvalidRule(String),
}
