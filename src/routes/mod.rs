// Route exports
pub mod auth;
pub mod browse;
pub mod likes;
pub mod navigation;
pub mod profile;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::filters::FilterError;
use crate::core::swipe::SwipeError;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{Backend, BrowseService, ProfileStore, SessionError, SwipeSettings};

/// Application state shared across all handlers
///
/// One browse session per process; the service serializes access to it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore<Backend>>,
    pub browse: Arc<BrowseService<Backend>>,
}

impl AppState {
    pub fn new(store: ProfileStore<Backend>, swipe: SwipeSettings) -> Self {
        let store = Arc::new(store);
        let browse = Arc::new(BrowseService::new(store.clone(), swipe));
        Self { store, browse }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(navigation::configure)
            .configure(auth::configure)
            .configure(profile::configure)
            .configure(browse::configure)
            .configure(likes::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    tracing::trace!("Health check on {} backend", state.store.backend().name());

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn error_response(
    status: StatusCode,
    error: &str,
    message: impl ToString,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: status.as_u16(),
    })
}

pub(crate) fn swipe_error(e: SwipeError) -> HttpResponse {
    match e {
        SwipeError::InvalidTranslation => {
            error_response(StatusCode::BAD_REQUEST, "Invalid gesture", e)
        }
        _ => error_response(StatusCode::CONFLICT, "Gesture rejected", e),
    }
}

pub(crate) fn filter_error(e: FilterError) -> HttpResponse {
    match e {
        FilterError::UnsupportedViewerGender(_) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, "Unsupported viewer", e)
        }
        FilterError::InvalidAgeBracket(_) => {
            error_response(StatusCode::BAD_REQUEST, "Invalid criteria", e)
        }
    }
}

pub(crate) fn session_error(e: SessionError) -> HttpResponse {
    match e {
        SessionError::NoProfile => error_response(StatusCode::NOT_FOUND, "No profile", e),
        SessionError::Filter(e) => filter_error(e),
        SessionError::Swipe(e) => swipe_error(e),
        SessionError::Storage(e) => {
            tracing::error!("Storage failure in browse session: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Storage error", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_error_statuses() {
        assert_eq!(swipe_error(SwipeError::InvalidTranslation).status(), StatusCode::BAD_REQUEST);
        assert_eq!(swipe_error(SwipeError::AnimationInFlight).status(), StatusCode::CONFLICT);
        assert_eq!(swipe_error(SwipeError::Exhausted).status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_session_error_statuses() {
        assert_eq!(session_error(SessionError::NoProfile).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            session_error(SessionError::Filter(FilterError::UnsupportedViewerGender(
                crate::models::Gender::Other
            )))
            .status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
