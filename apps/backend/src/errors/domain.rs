//! Domain-level error type used across the engine and its adapters.
//!
//! This error type is HTTP-agnostic. Handlers should return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule violations the engine recovers from: the action is refused with a
/// message and state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    OutOfTurn,
    InvalidAction,
    PhaseMismatch,
    ParseCard,
    ParseAction,
    Other(String),
}

/// Broken engine invariants. These indicate a bug in the caller or the
/// engine itself, never user input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvariantKind {
    InvalidHandSize,
    InsufficientCards,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Violated engine invariant
    Invariant(InvariantKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Invariant(kind, d) => write!(f, "invariant {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn invariant(kind: InvariantKind, detail: impl Into<String>) -> Self {
        Self::Invariant(kind, detail.into())
    }
}
