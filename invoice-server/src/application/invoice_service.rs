use std::sync::Arc;

use tracing::instrument;

use crate::data::invoice_repository::InvoiceRepository;
use crate::domain::{error::DomainError, invoice::Invoice};
use uuid::Uuid;

/// Read-only query surface over the invoice store, always scoped to the
/// authenticated owner. The owner id comes from the token, never from the
/// request body or query string.
#[derive(Clone)]
pub struct InvoiceService<R: InvoiceRepository + 'static> {
    repo: Arc<R>,
}

impl<R> InvoiceService<R>
where
    R: InvoiceRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All invoices owned by `owner_id`, newest first.
    #[instrument(skip(self))]
    pub async fn list_invoices(&self, owner_id: Uuid) -> Result<Vec<Invoice>, DomainError> {
        self.repo.list_by_owner(owner_id).await
    }

    /// A single invoice, only if it exists and belongs to `owner_id`.
    /// A non-existent id and someone else's invoice are indistinguishable.
    #[instrument(skip(self))]
    pub async fn get_invoice(
        &self,
        owner_id: Uuid,
        invoice_id: Uuid,
    ) -> Result<Invoice, DomainError> {
        self.repo
            .find_by_id_and_owner(invoice_id, owner_id)
            .await?
            .ok_or(DomainError::InvoiceNotFound(invoice_id))
    }
}
