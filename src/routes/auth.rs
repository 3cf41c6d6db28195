use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::core::auth::AuthError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::routes::{error_response, AppState};
use crate::services::accounts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/auth/register", web::post().to(register))
        .route("/auth/login", web::post().to(login))
        .route("/auth/logout", web::post().to(logout));
}

fn auth_error(e: AuthError) -> HttpResponse {
    match e {
        AuthError::AccountExists => error_response(StatusCode::CONFLICT, "Registration failed", e),
        AuthError::NoUser | AuthError::NoAccount => {
            error_response(StatusCode::UNAUTHORIZED, "Login failed", e)
        }
        AuthError::Storage(_) => {
            tracing::error!("Storage failure during auth: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Storage error", e)
        }
        _ => error_response(StatusCode::BAD_REQUEST, "Validation failed", e),
    }
}

/// POST /api/v1/auth/register
///
/// ```json
/// {
///   "email": "a@b.com",
///   "password": "secret1",
///   "confirmPassword": "secret1",
///   "phone": "9876543210"
/// }
/// ```
async fn register(state: web::Data<AppState>, req: web::Json<RegisterRequest>) -> impl Responder {
    match accounts::register(&state.store, &req).await {
        Ok(next) => HttpResponse::Ok().json(AuthResponse { next }),
        Err(e) => {
            tracing::info!("Registration refused: {}", e);
            auth_error(e)
        }
    }
}

/// POST /api/v1/auth/login
///
/// ```json
/// { "identifier": "a@b.com" }
/// ```
async fn login(state: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    match accounts::login(&state.store, &req).await {
        Ok(next) => HttpResponse::Ok().json(AuthResponse { next }),
        Err(e) => {
            tracing::info!("Login refused: {}", e);
            auth_error(e)
        }
    }
}

async fn logout(state: web::Data<AppState>) -> impl Responder {
    match accounts::logout(&state.store).await {
        Ok(next) => HttpResponse::Ok().json(AuthResponse { next }),
        Err(e) => auth_error(e),
    }
}
