use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{ExploreError, ExploreHandler};
use crate::models::{
    CountLikedYouRequest, CountLikedYouResponse, ErrorResponse, HealthResponse,
    ListLikedYouRequest, ListLikedYouResponse, PutDecisionRequest, PutDecisionResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub explorer: Arc<ExploreHandler>,
}

/// Configure all explore routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/explore/liked-you", web::post().to(list_liked_you))
        .route("/explore/liked-you/new", web::post().to(list_new_liked_you))
        .route("/explore/liked-you/count", web::post().to(count_liked_you))
        .route("/explore/decision", web::post().to(put_decision));
}

fn error_response(err: &ExploreError) -> HttpResponse {
    if err.is_client_error() {
        tracing::info!("Rejected explore request: {}", err);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid request".to_string(),
            message: err.to_string(),
            status_code: 400,
        });
    }

    tracing::error!("Explore request failed: {}", err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Internal error".to_string(),
        message: err.to_string(),
        status_code: 500,
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.explorer.health_check().await { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List everyone who liked the recipient
///
/// POST /api/v1/explore/liked-you
///
/// Request body:
/// ```json
/// {
///   "recipientUserId": "string",
///   "paginationToken": "string",
///   "pageSize": 50
/// }
/// ```
async fn list_liked_you(
    state: web::Data<AppState>,
    req: web::Json<ListLikedYouRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state
        .explorer
        .list_liked_you(&req.recipient_user_id, req.pagination_token.as_deref(), req.page_size)
        .await
    {
        Ok(page) => HttpResponse::Ok().json(ListLikedYouResponse::from(page)),
        Err(e) => error_response(&e),
    }
}

/// List likers the recipient has not decided about yet
///
/// POST /api/v1/explore/liked-you/new
///
/// Same request and response shape as `/explore/liked-you`.
async fn list_new_liked_you(
    state: web::Data<AppState>,
    req: web::Json<ListLikedYouRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state
        .explorer
        .list_new_liked_you(&req.recipient_user_id, req.pagination_token.as_deref(), req.page_size)
        .await
    {
        Ok(page) => HttpResponse::Ok().json(ListLikedYouResponse::from(page)),
        Err(e) => error_response(&e),
    }
}

/// Count new likers
///
/// POST /api/v1/explore/liked-you/count
///
/// Request body:
/// ```json
/// { "recipientUserId": "string" }
/// ```
async fn count_liked_you(
    state: web::Data<AppState>,
    req: web::Json<CountLikedYouRequest>,
) -> impl Responder {
    match state.explorer.count_liked_you(&req.recipient_user_id).await {
        Ok(count) => HttpResponse::Ok().json(CountLikedYouResponse { count }),
        Err(e) => error_response(&e),
    }
}

/// Record a like or pass
///
/// POST /api/v1/explore/decision
///
/// Request body:
/// ```json
/// {
///   "actorUserId": "string",
///   "recipientUserId": "string",
///   "likedRecipient": true
/// }
/// ```
async fn put_decision(
    state: web::Data<AppState>,
    req: web::Json<PutDecisionRequest>,
) -> impl Responder {
    tracing::debug!(
        "Decision: {} -> {} (liked: {})",
        req.actor_user_id,
        req.recipient_user_id,
        req.liked_recipient
    );

    match state
        .explorer
        .put_decision(&req.actor_user_id, &req.recipient_user_id, req.liked_recipient)
        .await
    {
        Ok(mutual_likes) => HttpResponse::Ok().json(PutDecisionResponse { mutual_likes }),
        Err(e) => error_response(&e),
    }
}
