use actix_web::{web, HttpResponse, Responder};

use crate::models::{DragRequest, FilterCriteria, GestureResponse, SearchRequest};
use crate::routes::{session_error, AppState};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/browse", web::get().to(get_browse))
        .route("/browse/search", web::put().to(set_search))
        .route("/browse/criteria", web::put().to(apply_criteria))
        .route("/browse/criteria", web::delete().to(clear_criteria))
        .route("/browse/gesture/start", web::post().to(gesture_start))
        .route("/browse/gesture/move", web::post().to(gesture_move))
        .route("/browse/gesture/end", web::post().to(gesture_end))
        .route("/browse/gesture/settle", web::post().to(gesture_settle));
}

/// Current card, queue position and swipe state
async fn get_browse(state: web::Data<AppState>) -> impl Responder {
    match state.browse.view().await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => session_error(e),
    }
}

async fn set_search(state: web::Data<AppState>, req: web::Json<SearchRequest>) -> impl Responder {
    match state.browse.set_search_text(&req.search_text).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => session_error(e),
    }
}

/// PUT /api/v1/browse/criteria
///
/// ```json
/// { "age": "26-30", "religion": "Hindu", "caste": "Any", "location": "Any" }
/// ```
async fn apply_criteria(
    state: web::Data<AppState>,
    req: web::Json<FilterCriteria>,
) -> impl Responder {
    match state.browse.apply_criteria(req.into_inner()).await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => session_error(e),
    }
}

async fn clear_criteria(state: web::Data<AppState>) -> impl Responder {
    match state.browse.clear_criteria().await {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(e) => session_error(e),
    }
}

async fn gesture_start(state: web::Data<AppState>) -> impl Responder {
    match state.browse.begin_gesture().await {
        Ok(swipe) => HttpResponse::Ok().json(GestureResponse {
            swipe,
            animation: None,
            decision: None,
            candidate_id: None,
        }),
        Err(e) => session_error(e),
    }
}

async fn gesture_move(state: web::Data<AppState>, req: web::Json<DragRequest>) -> impl Responder {
    match state.browse.drag_to(req.translation_x).await {
        Ok(swipe) => HttpResponse::Ok().json(GestureResponse {
            swipe,
            animation: None,
            decision: None,
            candidate_id: None,
        }),
        Err(e) => session_error(e),
    }
}

/// Pointer released: returns the animation the client should run
async fn gesture_end(state: web::Data<AppState>) -> impl Responder {
    match state.browse.release().await {
        Ok((animation, swipe)) => HttpResponse::Ok().json(GestureResponse {
            swipe,
            animation: Some(animation),
            decision: None,
            candidate_id: None,
        }),
        Err(e) => session_error(e),
    }
}

/// Animation finished on the client: apply the commit, if any
async fn gesture_settle(state: web::Data<AppState>) -> impl Responder {
    match state.browse.finish_animation().await {
        Ok((commit, swipe)) => {
            if let Some(commit) = &commit {
                tracing::info!("Swipe committed: {:?} {}", commit.decision, commit.profile.id);
            }
            HttpResponse::Ok().json(GestureResponse {
                swipe,
                animation: None,
                decision: commit.as_ref().map(|c| c.decision),
                candidate_id: commit.map(|c| c.profile.id),
            })
        }
        Err(e) => session_error(e),
    }
}
