use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::platform_match::{
    MatchQueryParams, PlatformMatch, PlatformMatchStatus, VoidMatchRequest,
};

// GET /admin/matches - Platform match log, filterable by status and context
pub async fn get_matches(
    pool: web::Data<PgPool>,
    params: web::Query<MatchQueryParams>,
) -> Result<HttpResponse> {
    let limit = params.limit.unwrap_or(50).clamp(1, 200);

    let matches = sqlx::query_as::<_, PlatformMatch>(
        r#"
        SELECT * FROM matches
        WHERE ($1::varchar IS NULL OR status = $1)
          AND ($2::varchar IS NULL OR context_type = $2)
        ORDER BY created_at DESC
        LIMIT $3
        "#,
    )
    .bind(params.status)
    .bind(&params.context_type)
    .bind(limit)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting matches: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Matches retrieved", matches)))
}

// POST /admin/matches/{id}/void - Take a logged match out of circulation.
// The match row keeps its scores; only the status and the audit trail change.
pub async fn void_match(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<VoidMatchRequest>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    if body.reason.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required fields: matchId, reason, and adminId"
        })));
    }

    let existing = sqlx::query_as::<_, PlatformMatch>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error loading match: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let Some(existing) = existing else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Match not found"
        })));
    };

    if existing.status == PlatformMatchStatus::Voided {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Match is already voided"
        })));
    }

    let voided = sqlx::query_as::<_, PlatformMatch>(
        r#"
        UPDATE matches SET
            status = 'VOIDED',
            voided_at = NOW(),
            voided_by = $1,
            voided_reason = $2
        WHERE id = $3
        RETURNING *
        "#,
    )
    .bind(body.admin_id)
    .bind(body.reason.trim())
    .bind(match_id)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error voiding match: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    tracing::info!("Match {} voided by admin {}", match_id, body.admin_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success("Match voided", voided)))
}
