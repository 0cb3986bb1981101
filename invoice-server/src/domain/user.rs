use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identity record backing the credential store. The password hash never
/// leaves the server; responses carry a [`crate::presentation::dto::UserSummary`]
/// instead of this struct.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, password_hash: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            created_at: Utc::now(),
        }
    }
}
