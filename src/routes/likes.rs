use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::core::conversations::{placeholder_chat, placeholder_conversations};
use crate::models::{ConversationsResponse, LikesResponse};
use crate::routes::{error_response, session_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/likes", web::get().to(get_likes))
        .route("/likes/{id}", web::delete().to(remove_like))
        .route("/messages", web::get().to(get_messages))
        .route("/chat/{user_id}", web::get().to(get_chat));
}

async fn get_likes(state: web::Data<AppState>) -> impl Responder {
    match state.browse.liked().await {
        Ok(profiles) => HttpResponse::Ok().json(LikesResponse {
            count: profiles.len(),
            profiles,
        }),
        Err(e) => session_error(e),
    }
}

/// DELETE /api/v1/likes/{id}
async fn remove_like(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.browse.unlike(&id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => error_response(
            StatusCode::NOT_FOUND,
            "Not liked",
            format!("Profile {} is not in your likes", id),
        ),
        Err(e) => session_error(e),
    }
}

/// One placeholder conversation per liked profile
async fn get_messages(state: web::Data<AppState>) -> impl Responder {
    match state.browse.liked().await {
        Ok(liked) => HttpResponse::Ok().json(ConversationsResponse {
            conversations: placeholder_conversations(&liked, chrono::Utc::now()),
        }),
        Err(e) => session_error(e),
    }
}

async fn get_chat(path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();
    match placeholder_chat(&user_id) {
        Some(chat) => HttpResponse::Ok().json(chat),
        None => error_response(StatusCode::NOT_FOUND, "Unknown chat", "No user selected for chat"),
    }
}
