///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Imports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use thiserror::Error;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// KnobError
///
///////////////////////////////////////////////////////////////////////////////////////////////////
/// Configuration errors. A knob that rejected a configuration keeps the
/// previous one, so every variant is recoverable by reconfiguring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnobError {
    #[error("degenerate value range: maximum {maximum} must be greater than minimum {minimum}")]
    DegenerateRange { minimum: f64, maximum: f64 },

    #[error("degenerate angle span from {start} to {end}: width must be non-zero and less than a full turn")]
    DegenerateSpan { start: f64, end: f64 },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("invalid knob configuration: {0}")]
    InvalidConfig(String),
}

pub type KnobResult<T> = Result<T, KnobError>;
