use actix_web::{web, HttpResponse, Result};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::club::{Club, ClubWithMembers, UpdateClubLigaRequest};
use crate::models::common::ApiResponse;

// GET /admin/clubs - All clubs with their member counts
pub async fn get_clubs(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let rows = sqlx::query(
        r#"
        SELECT
            c.id, c.name, c.slug, c.liga, c.captain_id, c.logo_url, c.status, c.created_at,
            COUNT(p.id) AS player_count
        FROM clubs c
        LEFT JOIN players p ON p.club_id = c.id
        GROUP BY c.id
        ORDER BY c.name ASC
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting clubs: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let clubs: Vec<ClubWithMembers> = rows
        .into_iter()
        .map(|row| ClubWithMembers {
            club: Club {
                id: row.get("id"),
                name: row.get("name"),
                slug: row.get("slug"),
                liga: row.get("liga"),
                captain_id: row.get("captain_id"),
                logo_url: row.get("logo_url"),
                status: row.get("status"),
                created_at: row.get("created_at"),
            },
            player_count: row.get::<i64, _>("player_count"),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Clubs retrieved", clubs)))
}

// PATCH /admin/clubs/{id}/liga - Assign or clear a club's league placement
pub async fn update_club_liga(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateClubLigaRequest>,
) -> Result<HttpResponse> {
    let club_id = path.into_inner();

    let result = sqlx::query("UPDATE clubs SET liga = $1 WHERE id = $2")
        .bind(body.liga)
        .bind(club_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error updating club liga: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Club not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Club liga updated")))
}
