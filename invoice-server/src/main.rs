use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use invoice_server::application::auth_service::AuthService;
use invoice_server::application::invoice_service::InvoiceService;
use invoice_server::data::invoice_repository::PostgresInvoiceRepository;
use invoice_server::data::user_repository::PostgresUserRepository;
use invoice_server::infrastructure::config::AppConfig;
use invoice_server::infrastructure::database::{create_pool, run_migrations};
use invoice_server::infrastructure::logging::init_logging;
use invoice_server::infrastructure::security::JwtKeys;
use invoice_server::presentation::handlers;
use invoice_server::presentation::middleware::{
    JwtAuthMiddleware, RequestIdMiddleware, TimingMiddleware,
};
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    let user_repo = Arc::new(PostgresUserRepository::new(pool.clone()));
    let invoice_repo = Arc::new(PostgresInvoiceRepository::new(pool.clone()));

    let auth_service = AuthService::new(
        Arc::clone(&user_repo),
        JwtKeys::new(config.jwt_secret.clone(), config.token_ttl_secs),
    );
    let invoice_service = InvoiceService::new(Arc::clone(&invoice_repo));

    let config_data = config.clone();

    info!(host = %config.host, port = config.port, "starting HTTP server");

    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            // Registered before RequestIdMiddleware so the request id is in
            // place by the time the timing layer runs (wraps apply outermost
            // last).
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(invoice_service.clone()))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .service(handlers::auth::scope())
                    .service(
                        web::scope("/invoices")
                            .wrap(JwtAuthMiddleware::new(auth_service.keys().clone()))
                            .service(handlers::invoice::list_invoices)
                            .service(handlers::invoice::get_invoice),
                    ),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![
            actix_web::http::header::CONTENT_TYPE,
            actix_web::http::header::AUTHORIZATION,
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
