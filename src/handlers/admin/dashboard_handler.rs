use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use sqlx::PgPool;

use crate::models::common::ApiResponse;
use crate::models::platform_match::PlatformMatch;

#[derive(Serialize)]
pub struct DashboardResponse {
    pub total_players: i64,
    pub active_seasons: i64,
    pub total_clubs: i64,
    pub pending_disputes: i64,
    pub recent_matches: Vec<PlatformMatch>,
}

// GET /admin/dashboard - Platform overview stats
pub async fn get_dashboard(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let total_players = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM players")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error counting players: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let active_seasons = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM liga_seasons WHERE status = 'active'",
    )
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error counting active seasons: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let total_clubs = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clubs")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error counting clubs: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let pending_disputes =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches WHERE status = 'DISPUTED'")
            .fetch_one(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!("Database error counting disputes: {}", e);
                actix_web::error::ErrorInternalServerError("Database error")
            })?;

    let recent_matches = sqlx::query_as::<_, PlatformMatch>(
        "SELECT * FROM matches ORDER BY created_at DESC LIMIT 10",
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error fetching recent matches: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let response = ApiResponse::success(
        "Dashboard stats retrieved",
        DashboardResponse {
            total_players,
            active_seasons,
            total_clubs,
            pending_disputes,
            recent_matches,
        },
    );

    Ok(HttpResponse::Ok().json(response))
}
