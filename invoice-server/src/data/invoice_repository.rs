use crate::domain::error::DomainError;
use crate::domain::invoice::Invoice;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

/// Every read carries the owner id as a query predicate. There is no
/// fetch-by-id-alone path, so ownership can never be filtered in afterwards.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn create(&self, invoice: Invoice) -> Result<Invoice, DomainError>;
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Invoice>, DomainError>;
    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Invoice>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresInvoiceRepository {
    pool: PgPool,
}

impl PostgresInvoiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
    async fn create(&self, invoice: Invoice) -> Result<Invoice, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO invoices
                (id, user_id, vendor_name, amount, due_date, description, paid, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(invoice.id)
        .bind(invoice.user_id)
        .bind(&invoice.vendor_name)
        .bind(invoice.amount)
        .bind(invoice.due_date)
        .bind(&invoice.description)
        .bind(invoice.paid)
        .bind(invoice.created_at)
        .bind(invoice.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("failed to create invoice: {}", e);
            DomainError::StoreUnavailable(e.to_string())
        })?;

        info!(invoice_id = %invoice.id, user_id = %invoice.user_id, "invoice created");
        Ok(invoice)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Invoice>, DomainError> {
        sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, user_id, vendor_name, amount, due_date, description, paid,
                   created_at, updated_at
            FROM invoices
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while listing invoices for {}: {}", owner_id, e);
            DomainError::StoreUnavailable(e.to_string())
        })
    }

    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Invoice>, DomainError> {
        sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, user_id, vendor_name, amount, due_date, description, paid,
                   created_at, updated_at
            FROM invoices
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id_and_owner {}: {}", id, e);
            DomainError::StoreUnavailable(e.to_string())
        })
    }
}
