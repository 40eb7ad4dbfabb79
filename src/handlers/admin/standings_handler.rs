use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::standings::StandingsService;
use crate::models::common::ApiResponse;
use crate::models::season::LigaSeason;
use crate::models::standing::SeasonStandingsResponse;

// GET /admin/seasons/{id}/standings - Season table, recomputed from
// completed fixtures on every read
pub async fn get_season_standings(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let season_id = path.into_inner();

    let season = sqlx::query_as::<_, LigaSeason>("SELECT * FROM liga_seasons WHERE id = $1")
        .bind(season_id)
        .fetch_optional(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error loading season: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let Some(season) = season else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Season not found"
        })));
    };

    let standings = StandingsService::new(pool.get_ref().clone())
        .get_season_standings(season_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error deriving standings: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Standings retrieved",
        SeasonStandingsResponse { season, standings },
    )))
}
