use crate::application::invoice_service::InvoiceService;
use crate::data::invoice_repository::PostgresInvoiceRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::InvoiceResponse;
use crate::presentation::utils::{AuthenticatedUser, request_id};
use actix_web::{HttpRequest, HttpResponse, get, web};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

#[get("")]
pub async fn list_invoices(
    req: HttpRequest,
    user: AuthenticatedUser,
    service: web::Data<InvoiceService<PostgresInvoiceRepository>>,
) -> Result<HttpResponse, DomainError> {
    let invoices = service.list_invoices(user.id).await?;

    // One sample of the clock per response, so every row gets the same "now".
    let now = Utc::now();
    let body: Vec<InvoiceResponse> = invoices
        .into_iter()
        .map(|invoice| InvoiceResponse::with_status(invoice, now))
        .collect();

    info!(
        request_id = %request_id(&req),
        user_id = %user.id,
        count = body.len(),
        "invoices listed"
    );

    Ok(HttpResponse::Ok().json(body))
}

#[get("/{id}")]
pub async fn get_invoice(
    req: HttpRequest,
    user: AuthenticatedUser,
    service: web::Data<InvoiceService<PostgresInvoiceRepository>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let invoice_id = path.into_inner();
    let invoice = service.get_invoice(user.id, invoice_id).await?;

    info!(
        request_id = %request_id(&req),
        user_id = %user.id,
        invoice_id = %invoice.id,
        "invoice retrieved"
    );

    Ok(HttpResponse::Ok().json(InvoiceResponse::with_status(invoice, Utc::now())))
}
