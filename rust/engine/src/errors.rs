use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid action: {reason}")]
    InvalidAction { reason: String },
    #[error("insufficient chips for action")]
    InsufficientChips,
    #[error("card supply exhausted, no cards left to deal or recycle")]
    SupplyExhausted,
}
