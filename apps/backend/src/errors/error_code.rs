//! Error codes for the Truco backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the Truco backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Acted outside the player's turn
    OutOfTurn,
    /// Action absent from the currently legal set
    InvalidAction,
    /// Action token could not be parsed
    ParseAction,
    /// Card token could not be parsed
    ParseCard,
    /// Action submitted in the wrong phase
    PhaseMismatch,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// No match has been started yet
    NoActiveMatch,
    /// General not found error
    NotFound,

    // System Errors
    /// Internal server error (includes broken engine invariants)
    Internal,
}

impl ErrorCode {
    /// Get the canonical string representation of this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::InvalidAction => "INVALID_ACTION",
            ErrorCode::ParseAction => "PARSE_ACTION",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::PhaseMismatch => "PHASE_MISMATCH",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NoActiveMatch => "NO_ACTIVE_MATCH",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
