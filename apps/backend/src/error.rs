//! Application-level error type for the HTTP boundary.
//!
//! Domain errors convert into `AppError` via `From`; handlers return
//! `Result<T, AppError>` and actix renders the problem-details body.

use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn validation(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Internal { detail, .. } => detail.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
                    ValidationKind::InvalidAction => ErrorCode::InvalidAction,
                    ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                    ValidationKind::ParseCard => ErrorCode::ParseCard,
                    ValidationKind::ParseAction => ErrorCode::ParseAction,
                    _ => ErrorCode::ValidationError,
                };
                AppError::validation(code, detail)
            }
            // Broken invariants are bugs: surface as 500, never as user error.
            DomainError::Invariant(kind, detail) => {
                AppError::internal(format!("{kind:?}: {detail}"))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let body = ProblemDetails {
            type_: "about:blank".to_string(),
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            status: status.as_u16(),
            detail: self.detail(),
            code: self.code().to_string(),
        };
        HttpResponse::build(status).json(body)
    }
}
