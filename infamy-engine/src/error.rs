//! Typed failures returned by every engine operation.
//!
//! All of these are expected, recoverable outcomes the hosting application
//! renders back to the table; none aborts the process.
use thiserror::Error;

/// Failure raised by a reputation operation. The state is never mutated when
/// one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InfamyError {
    /// Malformed or missing input.
    #[error("{message}")]
    Validation { message: String },

    /// An id or name that does not resolve to anything known.
    #[error("unknown {kind}: {name}")]
    NotFound { kind: &'static str, name: String },

    /// The action exists but the party has not unlocked it yet.
    #[error("{message}")]
    Precondition { message: String },

    /// Disrepute balance cannot cover the price.
    #[error("costs {cost} Disrepute but only {disrepute} is banked")]
    InsufficientFunds { cost: u32, disrepute: u32 },

    /// The action is on cooldown.
    #[error("available again in {days_remaining} day(s)")]
    RateLimit { days_remaining: i64 },
}

impl InfamyError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub(crate) fn unknown_port(name: &str) -> Self {
        Self::NotFound {
            kind: "port",
            name: name.to_string(),
        }
    }
}
