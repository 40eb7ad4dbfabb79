use actix_web::{web, HttpResponse, Result};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::common::ApiResponse;
use crate::models::registration::{
    LigaRegistration, RegistrationStatus, RegistrationWithClub, UpdateNotesRequest,
    UpdatePaymentStatusRequest, UpdateRegistrationStatusRequest,
};

// GET /admin/seasons/{id}/registrations - Club registrations with captain
// contact details
pub async fn get_season_registrations(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let season_id = path.into_inner();

    let rows = sqlx::query(
        r#"
        SELECT
            r.id, r.season_id, r.club_id, r.status, r.payment_status,
            r.admin_notes, r.registered_at, r.approved_at,
            c.name AS club_name,
            cap.name AS captain_name, cap.email AS captain_email, cap.phone AS captain_phone
        FROM liga_registrations r
        JOIN clubs c ON r.club_id = c.id
        LEFT JOIN players cap ON c.captain_id = cap.id
        WHERE r.season_id = $1
        ORDER BY r.registered_at DESC
        "#,
    )
    .bind(season_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting registrations: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let registrations: Vec<RegistrationWithClub> = rows
        .into_iter()
        .map(|row| RegistrationWithClub {
            registration: LigaRegistration {
                id: row.get("id"),
                season_id: row.get("season_id"),
                club_id: row.get("club_id"),
                status: row.get("status"),
                payment_status: row.get("payment_status"),
                admin_notes: row.get("admin_notes"),
                registered_at: row.get("registered_at"),
                approved_at: row.get("approved_at"),
            },
            club_name: row.get("club_name"),
            captain_name: row.get("captain_name"),
            captain_email: row.get("captain_email"),
            captain_phone: row.get("captain_phone"),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Registrations retrieved", registrations)))
}

// PATCH /admin/registrations/{id}/status - Approve or reject; approval
// stamps approved_at
pub async fn update_registration_status(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateRegistrationStatusRequest>,
) -> Result<HttpResponse> {
    let registration_id = path.into_inner();

    let result = if body.status == RegistrationStatus::Approved {
        sqlx::query("UPDATE liga_registrations SET status = $1, approved_at = NOW() WHERE id = $2")
            .bind(body.status)
            .bind(registration_id)
            .execute(pool.get_ref())
            .await
    } else {
        sqlx::query("UPDATE liga_registrations SET status = $1 WHERE id = $2")
            .bind(body.status)
            .bind(registration_id)
            .execute(pool.get_ref())
            .await
    }
    .map_err(|e| {
        tracing::error!("Database error updating registration status: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Registration not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Registration status updated")))
}

// PATCH /admin/registrations/{id}/payment
pub async fn update_payment_status(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePaymentStatusRequest>,
) -> Result<HttpResponse> {
    let registration_id = path.into_inner();

    let result = sqlx::query("UPDATE liga_registrations SET payment_status = $1 WHERE id = $2")
        .bind(body.payment_status)
        .bind(registration_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error updating payment status: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Registration not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Payment status updated")))
}

// PATCH /admin/registrations/{id}/notes
pub async fn update_admin_notes(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateNotesRequest>,
) -> Result<HttpResponse> {
    let registration_id = path.into_inner();

    let result = sqlx::query("UPDATE liga_registrations SET admin_notes = $1 WHERE id = $2")
        .bind(&body.notes)
        .bind(registration_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error updating admin notes: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Registration not found"
        })));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Notes updated")))
}
