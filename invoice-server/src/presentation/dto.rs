use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::invoice::{Invoice, InvoiceStatus};
use crate::domain::user::User;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Request-shape validation, resolved before the authenticator runs.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_valid_email(&self.email) {
            return Err(DomainError::InvalidRequest("invalid email format".into()));
        }
        if self.password.is_empty() {
            return Err(DomainError::InvalidRequest("password is required".into()));
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        None => false,
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserSummary,
}

/// The non-sensitive slice of a user record. The password hash has no path
/// into this type.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub id: Uuid,
    pub vendor_name: String,
    pub amount: f64,
    pub due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: InvoiceStatus,
}

impl InvoiceResponse {
    /// Attaches the derived status as of `now`. The status is never stored;
    /// `now` is sampled once per response so every row in a listing is
    /// judged against the same instant.
    pub fn with_status(invoice: Invoice, now: DateTime<Utc>) -> Self {
        let status = invoice.status_at(now);
        Self {
            id: invoice.id,
            vendor_name: invoice.vendor_name,
            amount: invoice.amount,
            due_date: invoice.due_date,
            description: invoice.description,
            paid: invoice.paid,
            created_at: invoice.created_at,
            updated_at: invoice.updated_at,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_rejects_malformed_email() {
        for email in ["", "no-at-sign", "@missing.local", "missing-domain@", "a@b"] {
            let req = LoginRequest {
                email: email.into(),
                password: "password123".into(),
            };
            assert!(req.validate().is_err(), "{email:?} should be rejected");
        }
    }

    #[test]
    fn login_request_rejects_empty_password() {
        let req = LoginRequest {
            email: "demo@example.com".into(),
            password: "".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn login_request_accepts_valid_input() {
        let req = LoginRequest {
            email: "demo@example.com".into(),
            password: "x".into(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn invoice_response_uses_camel_case_and_attaches_status() {
        let now = Utc::now();
        let invoice = Invoice::new(
            Uuid::new_v4(),
            "Acme Corp".into(),
            1250.0,
            now + chrono::Duration::days(10),
            Some("Office supplies".into()),
            false,
        );
        let body = serde_json::to_value(InvoiceResponse::with_status(invoice, now)).unwrap();

        assert_eq!(body["vendorName"], "Acme Corp");
        assert_eq!(body["status"], "open");
        assert!(body.get("dueDate").is_some());
        assert!(body.get("user_id").is_none());
    }
}
