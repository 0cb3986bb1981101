use crate::application::auth_service::AuthService;
use crate::data::user_repository::PostgresUserRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{LoginRequest, LoginResponse, UserSummary};
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, Responder, Scope, post, web};
use tracing::info;

pub fn scope() -> Scope {
    web::scope("/auth").service(login)
}

#[post("/login")]
async fn login(
    req: HttpRequest,
    service: web::Data<AuthService<PostgresUserRepository>>,
    payload: web::Json<LoginRequest>,
) -> Result<impl Responder, DomainError> {
    payload.validate()?;

    let (token, user) = service.login(&payload.email, &payload.password).await?;

    info!(
        request_id = %request_id(&req),
        user_id = %user.id,
        "user logged in"
    );

    Ok(HttpResponse::Ok().json(LoginResponse {
        access_token: token,
        user: UserSummary::from(user),
    }))
}
