use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::core::navigation::{footer_tabs, Screen};
use crate::models::{NavigationResponse, ScreenQuery};
use crate::routes::{error_response, AppState};
use crate::services::accounts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/navigation", web::get().to(navigate));
}

/// Resolve the screen to show and the footer tabs for it
///
/// GET /api/v1/navigation?screen=Chat:5
///
/// Without `screen`, resolves the app entry point.
async fn navigate(state: web::Data<AppState>, query: web::Query<ScreenQuery>) -> impl Responder {
    let requested = match query.screen.as_deref() {
        None | Some("") => Screen::Browse,
        Some(raw) => match raw.parse::<Screen>() {
            Ok(screen) => screen,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, "Unknown screen", e),
        },
    };

    match accounts::entry_screen(&state.store, requested).await {
        Ok(screen) => {
            tracing::debug!("Navigating to {}", screen);
            HttpResponse::Ok().json(NavigationResponse {
                tabs: footer_tabs(&screen),
                screen,
            })
        }
        Err(e) => {
            tracing::error!("Failed to read session flags: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Storage error", e)
        }
    }
}
