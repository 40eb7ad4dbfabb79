use actix_web::{web, HttpResponse, Result};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::league::validation::LigaValidator;
use crate::models::common::ApiResponse;
use crate::models::player::{
    CreateAchievementRequest, Player, PlayerAchievement, PlayerDetailResponse, PlayerQueryParams,
    PlayerWithClub, UpdateGradingRequest,
};
use crate::utils::slug::slugify;

// GET /admin/players - All players, optionally filtered by name/email search
// and club
pub async fn get_players(
    pool: web::Data<PgPool>,
    params: web::Query<PlayerQueryParams>,
) -> Result<HttpResponse> {
    let search = params
        .search
        .as_deref()
        .map(|s| format!("%{}%", s.trim()));

    let rows = sqlx::query(
        r#"
        SELECT
            p.id, p.name, p.email, p.phone, p.club_id, p.pbpi_grading,
            p.created_at, p.updated_at,
            c.name AS club_name
        FROM players p
        LEFT JOIN clubs c ON p.club_id = c.id
        WHERE ($1::text IS NULL OR p.name ILIKE $1 OR p.email ILIKE $1)
          AND ($2::uuid IS NULL OR p.club_id = $2)
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(search)
    .bind(params.club_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting players: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let players: Vec<PlayerWithClub> = rows
        .into_iter()
        .map(|row| PlayerWithClub {
            player: Player {
                id: row.get("id"),
                name: row.get("name"),
                email: row.get("email"),
                phone: row.get("phone"),
                club_id: row.get("club_id"),
                pbpi_grading: row.get("pbpi_grading"),
                created_at: row.get("created_at"),
                updated_at: row.get("updated_at"),
            },
            club_name: row.get("club_name"),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Players retrieved", players)))
}

// GET /admin/players/{id} - Player profile with achievements
pub async fn get_player_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    let row = sqlx::query(
        r#"
        SELECT
            p.id, p.name, p.email, p.phone, p.club_id, p.pbpi_grading,
            p.created_at, p.updated_at,
            c.name AS club_name
        FROM players p
        LEFT JOIN clubs c ON p.club_id = c.id
        WHERE p.id = $1
        "#,
    )
    .bind(player_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting player: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let Some(row) = row else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Player not found"
        })));
    };

    let achievements = sqlx::query_as::<_, PlayerAchievement>(
        r#"
        SELECT * FROM player_achievements
        WHERE player_id = $1
        ORDER BY achievement_date DESC
        "#,
    )
    .bind(player_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting achievements: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let detail = PlayerDetailResponse {
        player: Player {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            phone: row.get("phone"),
            club_id: row.get("club_id"),
            pbpi_grading: row.get("pbpi_grading"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        },
        club_name: row.get("club_name"),
        achievements,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("Player retrieved", detail)))
}

// PATCH /admin/players/{id}/grading - Update PBPI grading
pub async fn update_player_grading(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGradingRequest>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    let result =
        sqlx::query("UPDATE players SET pbpi_grading = $1, updated_at = NOW() WHERE id = $2")
            .bind(&body.grading)
            .bind(player_id)
            .execute(pool.get_ref())
            .await
            .map_err(|e| {
                tracing::error!("Database error updating grading: {}", e);
                actix_web::error::ErrorInternalServerError("Database error")
            })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Player not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Grading updated")))
}

// POST /admin/players/{id}/achievements - Record a tournament achievement
pub async fn add_achievement(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<CreateAchievementRequest>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();

    if let Err(e) = LigaValidator::new().validate_name(&body.tournament_name) {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": format!("Invalid tournament name: {}", e)
        })));
    }

    let achievement = sqlx::query_as::<_, PlayerAchievement>(
        r#"
        INSERT INTO player_achievements (
            player_id, tournament_name, tournament_slug, achievement_date,
            finish_position, display_text, is_featured, created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(player_id)
    .bind(&body.tournament_name)
    .bind(slugify(&body.tournament_name))
    .bind(body.achievement_date)
    .bind(&body.finish_position)
    .bind(&body.display_text)
    .bind(body.is_featured)
    .bind(body.created_by)
    .fetch_one(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error adding achievement: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Achievement added", achievement)))
}

// DELETE /admin/players/{id}/achievements/{achievement_id}
pub async fn delete_achievement(
    pool: web::Data<PgPool>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (player_id, achievement_id) = path.into_inner();

    let result = sqlx::query("DELETE FROM player_achievements WHERE id = $1 AND player_id = $2")
        .bind(achievement_id)
        .bind(player_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting achievement: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Achievement not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Achievement deleted")))
}
