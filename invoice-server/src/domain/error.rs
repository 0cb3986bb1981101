use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// Unknown email and wrong password deliberately share this variant so
    /// the response never reveals which half was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Missing, malformed, expired, or signature-invalid bearer token.
    #[error("authentication required")]
    Unauthenticated,
    /// Covers both a non-existent id and an invoice owned by someone else.
    #[error("invoice not found: {0}")]
    InvoiceNotFound(Uuid),
    #[error("{0}")]
    InvalidRequest(String),
    /// The backing store could not be reached or errored. The detail is
    /// logged where the failure occurs and never echoed to the client.
    #[error("store unavailable")]
    StoreUnavailable(String),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::InvalidCredentials | DomainError::Unauthenticated => {
                StatusCode::UNAUTHORIZED
            }
            DomainError::InvoiceNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DomainError::StoreUnavailable(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let details = match self {
            DomainError::InvoiceNotFound(id) => Some(json!({ "resource": id })),
            _ => None,
        };
        let body = ErrorBody {
            error: message.as_str(),
            details,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
