use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::core::profile::ProfileError;
use crate::models::{
    catalog::{castes_for, AGE_BRACKETS, LOCATIONS, RELIGIONS},
    OptionsQuery, ProfileForm, ProfileOptionsResponse, ProfileResponse,
};
use crate::routes::{error_response, AppState};
use crate::services::accounts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(get_profile))
        .route("/profile", web::post().to(create_profile))
        .route("/profile", web::put().to(update_profile))
        .route("/profile/options", web::get().to(profile_options));
}

fn profile_error(e: ProfileError) -> HttpResponse {
    match e {
        ProfileError::NotFound => error_response(StatusCode::NOT_FOUND, "No profile", e),
        ProfileError::Storage(_) => {
            tracing::error!("Storage failure saving profile: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Storage error", e)
        }
        _ => error_response(StatusCode::BAD_REQUEST, "Validation failed", e),
    }
}

async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    match state.store.viewer_profile().await {
        Ok(Some(profile)) => HttpResponse::Ok().json(ProfileResponse { profile }),
        Ok(None) => profile_error(ProfileError::NotFound),
        Err(e) => profile_error(e.into()),
    }
}

/// POST /api/v1/profile
async fn create_profile(
    state: web::Data<AppState>,
    form: web::Json<ProfileForm>,
) -> impl Responder {
    match accounts::create_profile(&state.browse, form.into_inner()).await {
        Ok(profile) => HttpResponse::Created().json(ProfileResponse { profile }),
        Err(e) => {
            tracing::info!("Profile creation refused: {}", e);
            profile_error(e)
        }
    }
}

/// PUT /api/v1/profile
async fn update_profile(
    state: web::Data<AppState>,
    form: web::Json<ProfileForm>,
) -> impl Responder {
    match accounts::update_profile(&state.browse, form.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(ProfileResponse { profile }),
        Err(e) => {
            tracing::info!("Profile update refused: {}", e);
            profile_error(e)
        }
    }
}

/// Picker options; castes follow the `religion` query parameter
async fn profile_options(query: web::Query<OptionsQuery>) -> impl Responder {
    let religion = query.religion.as_deref().unwrap_or_default();

    HttpResponse::Ok().json(ProfileOptionsResponse {
        genders: ["Male", "Female", "Other"].iter().map(|s| s.to_string()).collect(),
        religions: RELIGIONS.iter().map(|s| s.to_string()).collect(),
        castes: castes_for(religion).iter().map(|s| s.to_string()).collect(),
        locations: LOCATIONS.iter().map(|s| s.to_string()).collect(),
        age_brackets: AGE_BRACKETS.iter().map(|s| s.to_string()).collect(),
    })
}
