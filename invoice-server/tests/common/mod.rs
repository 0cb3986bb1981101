#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use invoice_server::data::invoice_repository::InvoiceRepository;
use invoice_server::data::user_repository::UserRepository;
use invoice_server::domain::error::DomainError;
use invoice_server::domain::invoice::Invoice;
use invoice_server::domain::user::User;
use invoice_server::infrastructure::security::hash_password;
use uuid::Uuid;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const JOHN_EMAIL: &str = "john@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// The fixed "now" the seed fixtures are judged against: between the
/// 2024-12-01 and 2024-12-10 due dates, so the dataset spans all three
/// derived statuses.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 5, 12, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryInvoiceRepository {
    invoices: Mutex<Vec<Invoice>>,
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn create(&self, invoice: Invoice) -> Result<Invoice, DomainError> {
        self.invoices.lock().unwrap().push(invoice.clone());
        Ok(invoice)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Invoice>, DomainError> {
        let mut rows: Vec<Invoice> = self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Invoice>, DomainError> {
        Ok(self
            .invoices
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id && i.user_id == owner_id)
            .cloned())
    }
}

pub struct SeededData {
    pub demo: User,
    pub john: User,
    pub demo_invoices: Vec<Invoice>,
    pub john_invoices: Vec<Invoice>,
}

/// Mirrors the seed binary's dataset with creation times staggered from a
/// fixed base, so ordering assertions are deterministic.
pub async fn seed(
    users: &InMemoryUserRepository,
    invoices: &InMemoryInvoiceRepository,
) -> SeededData {
    let hash = hash_password(DEMO_PASSWORD).unwrap();

    let demo = users
        .create(User::new(DEMO_EMAIL.into(), hash.clone(), "Demo User".into()))
        .await
        .unwrap();
    let john = users
        .create(User::new(JOHN_EMAIL.into(), hash, "John Doe".into()))
        .await
        .unwrap();

    let demo_rows = [
        ("Acme Corp", 1250.00, date(2024, 12, 15), false),
        ("Tech Solutions Inc", 3500.00, date(2024, 11, 30), true),
        ("Global Services LLC", 850.75, date(2024, 12, 1), false),
        ("Marketing Agency", 2200.00, date(2024, 11, 25), true),
        ("Office Depot", 425.50, date(2024, 12, 10), false),
    ];
    let john_rows = [
        ("Construction Co", 5500.00, date(2024, 12, 20), false),
        ("Utility Company", 180.25, date(2024, 11, 28), true),
    ];

    let demo_invoices = insert_rows(invoices, demo.id, &demo_rows).await;
    let john_invoices = insert_rows(invoices, john.id, &john_rows).await;

    SeededData {
        demo,
        john,
        demo_invoices,
        john_invoices,
    }
}

async fn insert_rows(
    repo: &InMemoryInvoiceRepository,
    owner_id: Uuid,
    rows: &[(&str, f64, DateTime<Utc>, bool)],
) -> Vec<Invoice> {
    let base = date(2024, 11, 1);
    let mut out = Vec::with_capacity(rows.len());
    for (i, (vendor, amount, due_date, paid)) in rows.iter().enumerate() {
        let mut invoice = Invoice::new(
            owner_id,
            (*vendor).into(),
            *amount,
            *due_date,
            Some(format!("{} invoice", vendor)),
            *paid,
        );
        invoice.created_at = base + Duration::minutes(i as i64);
        invoice.updated_at = invoice.created_at;
        out.push(repo.create(invoice).await.unwrap());
    }
    out
}
