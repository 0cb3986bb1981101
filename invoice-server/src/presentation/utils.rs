use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{Ready, ready};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::infrastructure::security::JwtKeys;

/// Identity extracted from a verified bearer token. This is the only source
/// of identity below the guard; nothing trusts ids from the request itself.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(*user)),
            None => ready(Err(DomainError::Unauthenticated.into())),
        }
    }
}

/// Validates a raw `Authorization` header value against the signing key.
///
/// Stateless by policy: the credential store is not consulted, so a token
/// for a since-deleted user keeps authenticating until it expires (their
/// reads then come back empty). Every failure mode collapses into
/// `Unauthenticated`.
pub fn authenticate_bearer(
    keys: &JwtKeys,
    header: Option<&str>,
) -> Result<AuthenticatedUser, DomainError> {
    let header = header.ok_or(DomainError::Unauthenticated)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(DomainError::Unauthenticated)?;
    let claims = keys
        .verify_token(token)
        .map_err(|_| DomainError::Unauthenticated)?;
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| DomainError::Unauthenticated)?;

    Ok(AuthenticatedUser { id: user_id })
}

pub fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<crate::presentation::middleware::RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
