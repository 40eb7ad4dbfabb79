use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::league::validation::LigaValidator;
use crate::models::common::ApiResponse;
use crate::models::season::{
    CreateSeasonRequest, LigaSeason, SeasonStatus, UpdateSeasonStatusRequest,
};
use crate::utils::slug::slugify;

// GET /admin/seasons - All seasons, newest first
pub async fn get_seasons(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let seasons =
        sqlx::query_as::<_, LigaSeason>("SELECT * FROM liga_seasons ORDER BY created_at DESC")
            .fetch_all(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!("Database error getting seasons: {}", e);
                actix_web::error::ErrorInternalServerError("Database error")
            })?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Seasons retrieved", seasons)))
}

// POST /admin/seasons - Create a season
pub async fn create_season(
    pool: web::Data<PgPool>,
    body: web::Json<CreateSeasonRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = LigaValidator::new().validate_name(&body.name) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Invalid season name: {}", e)
        })));
    }

    if body.end_date < body.start_date {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "end_date must not be before start_date"
        })));
    }

    let season = sqlx::query_as::<_, LigaSeason>(
        r#"
        INSERT INTO liga_seasons (
            name, slug, season_number, liga, province,
            start_date, end_date, registration_deadline, status,
            matches_per_fixture, sets_per_match, games_per_set,
            description, sponsor_name, banner_url, sponsor_logo_url
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING *
        "#,
    )
    .bind(&body.name)
    .bind(slugify(&body.name))
    .bind(body.season_number.unwrap_or(1))
    .bind(body.liga)
    .bind(body.province.as_deref().unwrap_or("East Java"))
    .bind(body.start_date)
    .bind(body.end_date)
    .bind(body.registration_deadline)
    .bind(body.status.unwrap_or(SeasonStatus::Upcoming))
    .bind(body.matches_per_fixture.unwrap_or(4))
    .bind(body.sets_per_match.unwrap_or(3))
    .bind(body.games_per_set.unwrap_or(6))
    .bind(&body.description)
    .bind(&body.sponsor_name)
    .bind(&body.banner_url)
    .bind(&body.sponsor_logo_url)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error creating season: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    tracing::info!("Created season '{}' ({})", season.name, season.id);

    Ok(HttpResponse::Created().json(ApiResponse::success("Season created", season)))
}

// PATCH /admin/seasons/{id} - Update a season (full form submit, name is
// re-slugified)
pub async fn update_season(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<CreateSeasonRequest>,
) -> Result<HttpResponse> {
    let season_id = path.into_inner();

    if let Err(e) = LigaValidator::new().validate_name(&body.name) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Invalid season name: {}", e)
        })));
    }

    let season = sqlx::query_as::<_, LigaSeason>(
        r#"
        UPDATE liga_seasons SET
            name = $1, slug = $2, season_number = $3, liga = $4, province = $5,
            start_date = $6, end_date = $7, registration_deadline = $8, status = $9,
            matches_per_fixture = $10, sets_per_match = $11, games_per_set = $12,
            description = $13, sponsor_name = $14, banner_url = $15,
            sponsor_logo_url = $16, updated_at = NOW()
        WHERE id = $17
        RETURNING *
        "#,
    )
    .bind(&body.name)
    .bind(slugify(&body.name))
    .bind(body.season_number.unwrap_or(1))
    .bind(body.liga)
    .bind(body.province.as_deref().unwrap_or("East Java"))
    .bind(body.start_date)
    .bind(body.end_date)
    .bind(body.registration_deadline)
    .bind(body.status.unwrap_or(SeasonStatus::Upcoming))
    .bind(body.matches_per_fixture.unwrap_or(4))
    .bind(body.sets_per_match.unwrap_or(3))
    .bind(body.games_per_set.unwrap_or(6))
    .bind(&body.description)
    .bind(&body.sponsor_name)
    .bind(&body.banner_url)
    .bind(&body.sponsor_logo_url)
    .bind(season_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error updating season: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    match season {
        Some(season) => Ok(HttpResponse::Ok().json(ApiResponse::success("Season updated", season))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Season not found"
        }))),
    }
}

// PATCH /admin/seasons/{id}/status
pub async fn update_season_status(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateSeasonStatusRequest>,
) -> Result<HttpResponse> {
    let season_id = path.into_inner();

    let result = sqlx::query("UPDATE liga_seasons SET status = $1, updated_at = NOW() WHERE id = $2")
        .bind(body.status)
        .bind(season_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error updating season status: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Season not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Season status updated")))
}
