//! Seeds the demo dataset: two users sharing the password `password123` and
//! a handful of invoices each. Skips itself entirely when the demo user
//! already exists, so it is safe to run repeatedly.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use invoice_server::data::invoice_repository::{InvoiceRepository, PostgresInvoiceRepository};
use invoice_server::data::user_repository::{PostgresUserRepository, UserRepository};
use invoice_server::domain::invoice::Invoice;
use invoice_server::domain::user::User;
use invoice_server::infrastructure::config::AppConfig;
use invoice_server::infrastructure::database::{create_pool, run_migrations};
use invoice_server::infrastructure::logging::init_logging;
use invoice_server::infrastructure::security::hash_password;
use tracing::info;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let invoices = Arc::new(PostgresInvoiceRepository::new(pool.clone()));

    if users.find_by_email("demo@example.com").await?.is_some() {
        info!("demo data already present, nothing to do");
        return Ok(());
    }

    let hash = hash_password("password123")
        .map_err(|e| anyhow::anyhow!("failed to hash seed password: {}", e))?;

    let demo = users
        .create(User::new(
            "demo@example.com".into(),
            hash.clone(),
            "Demo User".into(),
        ))
        .await?;
    let john = users
        .create(User::new(
            "john@example.com".into(),
            hash,
            "John Doe".into(),
        ))
        .await?;

    let demo_rows = [
        (
            "Acme Corp",
            1250.00,
            due(2024, 12, 15),
            "Office supplies and equipment",
            false,
        ),
        (
            "Tech Solutions Inc",
            3500.00,
            due(2024, 11, 30),
            "Software licensing and support",
            true,
        ),
        (
            "Global Services LLC",
            850.75,
            due(2024, 12, 1),
            "Consulting services",
            false,
        ),
        (
            "Marketing Agency",
            2200.00,
            due(2024, 11, 25),
            "Digital marketing campaign",
            true,
        ),
        (
            "Office Depot",
            425.50,
            due(2024, 12, 10),
            "Monthly office supplies",
            false,
        ),
    ];
    let john_rows = [
        (
            "Construction Co",
            5500.00,
            due(2024, 12, 20),
            "Building maintenance",
            false,
        ),
        (
            "Utility Company",
            180.25,
            due(2024, 11, 28),
            "Monthly utilities",
            true,
        ),
    ];

    seed_invoices(&invoices, demo.id, &demo_rows).await?;
    seed_invoices(&invoices, john.id, &john_rows).await?;

    info!("database seeded");
    info!("demo users: demo@example.com / john@example.com (password: password123)");

    Ok(())
}

async fn seed_invoices(
    repo: &PostgresInvoiceRepository,
    owner_id: Uuid,
    rows: &[(&str, f64, DateTime<Utc>, &str, bool)],
) -> anyhow::Result<()> {
    let base = Utc::now();
    for (i, (vendor, amount, due_date, description, paid)) in rows.iter().enumerate() {
        let mut invoice = Invoice::new(
            owner_id,
            (*vendor).into(),
            *amount,
            *due_date,
            Some((*description).into()),
            *paid,
        );
        // Stagger creation times so listings have a stable newest-first order.
        invoice.created_at = base + Duration::seconds(i as i64);
        invoice.updated_at = invoice.created_at;
        repo.create(invoice).await?;
    }
    Ok(())
}

fn due(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}
