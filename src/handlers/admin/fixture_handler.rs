use std::collections::{BTreeMap, HashMap};

use actix_web::{web, HttpResponse, Result};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::league::results::{FixtureScoreState, ScoreSheet};
use crate::league::validation::LigaValidator;
use crate::models::common::ApiResponse;
use crate::models::fixture::{
    AssignPlayersRequest, AssignPlayersResponse, CreateFixtureRequest, EnterScoresRequest,
    EnterScoresResponse, FixtureDetailResponse, FixtureWithClubs, LigaFixture, LigaMatch,
    MatchResultSummary,
};
use crate::models::season::LigaSeason;

// GET /admin/seasons/{id}/fixtures - Fixtures of a season, by gameweek
pub async fn get_season_fixtures(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let season_id = path.into_inner();

    let fixtures = sqlx::query_as::<_, LigaFixture>(
        r#"
        SELECT * FROM liga_fixtures
        WHERE season_id = $1
        ORDER BY gameweek ASC, scheduled_date ASC, scheduled_time ASC
        "#,
    )
    .bind(season_id)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        tracing::error!("Database error getting fixtures: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let club_names = club_name_map(
        pool.get_ref(),
        fixtures
            .iter()
            .flat_map(|f| [f.home_club_id, f.away_club_id])
            .collect(),
    )
    .await?;

    let fixtures: Vec<FixtureWithClubs> = fixtures
        .into_iter()
        .map(|fixture| {
            let home_club_name = club_names
                .get(&fixture.home_club_id)
                .cloned()
                .unwrap_or_else(|| "Unknown club".to_string());
            let away_club_name = club_names
                .get(&fixture.away_club_id)
                .cloned()
                .unwrap_or_else(|| "Unknown club".to_string());
            FixtureWithClubs {
                fixture,
                home_club_name,
                away_club_name,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Fixtures retrieved", fixtures)))
}

// POST /admin/fixtures - Create a fixture together with its empty matches
pub async fn create_fixture(
    pool: web::Data<PgPool>,
    body: web::Json<CreateFixtureRequest>,
) -> Result<HttpResponse> {
    let validator = LigaValidator::new();
    if let Err(e) = validator
        .validate_clubs_distinct(body.home_club_id, body.away_club_id)
        .and_then(|_| validator.validate_gameweek(body.gameweek))
    {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        })));
    }

    let season = sqlx::query_as::<_, LigaSeason>("SELECT * FROM liga_seasons WHERE id = $1")
        .bind(body.season_id)
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

    let mut tx = pool.get_ref().begin().await.map_err(|e| {
        tracing::error!("Failed to begin transaction: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let fixture_id: Uuid = sqlx::query_scalar(
        r#"
        INSERT INTO liga_fixtures (
            season_id, home_club_id, away_club_id, gameweek,
            scheduled_date, scheduled_time, venue_name, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'scheduled')
        RETURNING id
        "#,
    )
    .bind(body.season_id)
    .bind(body.home_club_id)
    .bind(body.away_club_id)
    .bind(body.gameweek)
    .bind(body.scheduled_date)
    .bind(body.scheduled_time)
    .bind(&body.venue_name)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Database error creating fixture: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    // The fixture and its empty match slots are created as one unit
    for match_number in 1..=season.matches_per_fixture {
        sqlx::query(
            r#"
            INSERT INTO liga_matches (fixture_id, match_number, status)
            VALUES ($1, $2, 'pending')
            "#,
        )
        .bind(fixture_id)
        .bind(match_number)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Database error creating match slots: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit fixture creation: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    tracing::info!(
        "Created fixture {} (gameweek {}, {} matches)",
        fixture_id,
        body.gameweek,
        season.matches_per_fixture
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(
        "Fixture created",
        serde_json::json!({ "fixture_id": fixture_id }),
    )))
}

// GET /admin/fixtures/{id} - Fixture with its matches and player names
pub async fn get_fixture_by_id(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let fixture_id = path.into_inner();

    let Some(fixture) = load_fixture(pool.get_ref(), fixture_id).await? else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Fixture not found"
        })));
    };

    let matches = load_matches(pool.get_ref(), fixture_id).await?;

    let club_names =
        club_name_map(pool.get_ref(), vec![fixture.home_club_id, fixture.away_club_id]).await?;

    let player_ids: Vec<Uuid> = matches
        .iter()
        .flat_map(|m| {
            [
                m.home_player1_id,
                m.home_player2_id,
                m.away_player1_id,
                m.away_player2_id,
            ]
        })
        .flatten()
        .collect();

    let player_rows = sqlx::query("SELECT id, name FROM players WHERE id = ANY($1)")
        .bind(&player_ids)
        .fetch_all(pool.get_ref())
        .await
        .map_err(|e| {
            tracing::error!("Database error getting player names: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;
    let player_names: HashMap<Uuid, String> = player_rows
        .into_iter()
        .map(|row| (row.get("id"), row.get("name")))
        .collect();

    let home_club_name = club_names
        .get(&fixture.home_club_id)
        .cloned()
        .unwrap_or_else(|| "Unknown club".to_string());
    let away_club_name = club_names
        .get(&fixture.away_club_id)
        .cloned()
        .unwrap_or_else(|| "Unknown club".to_string());

    let detail = FixtureDetailResponse {
        fixture,
        home_club_name,
        away_club_name,
        matches,
        player_names,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("Fixture retrieved", detail)))
}

// DELETE /admin/fixtures/{id} - Matches first, then the fixture
pub async fn delete_fixture(pool: web::Data<PgPool>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let fixture_id = path.into_inner();

    let mut tx = pool.get_ref().begin().await.map_err(|e| {
        tracing::error!("Failed to begin transaction: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    sqlx::query("DELETE FROM liga_matches WHERE fixture_id = $1")
        .bind(fixture_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting matches: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    let result = sqlx::query("DELETE FROM liga_fixtures WHERE id = $1")
        .bind(fixture_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting fixture: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    if result.rows_affected() == 0 {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Fixture not found"
        })));
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit fixture deletion: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Fixture deleted")))
}

// POST /admin/fixtures/{id}/players - Assign doubles pairs to every match
pub async fn assign_players(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<AssignPlayersRequest>,
) -> Result<HttpResponse> {
    let fixture_id = path.into_inner();

    if body.assignments.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required fields"
        })));
    }

    let validator = LigaValidator::new();
    for assignment in &body.assignments {
        if let Err(e) = validator.validate_assignment(assignment) {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    }

    if load_fixture(pool.get_ref(), fixture_id).await?.is_none() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Fixture not found"
        })));
    }

    let mut tx = pool.get_ref().begin().await.map_err(|e| {
        tracing::error!("Failed to begin transaction: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    for assignment in &body.assignments {
        let result = sqlx::query(
            r#"
            UPDATE liga_matches SET
                home_player1_id = $1, home_player2_id = $2,
                away_player1_id = $3, away_player2_id = $4,
                status = 'assigned'
            WHERE fixture_id = $5 AND match_number = $6
            "#,
        )
        .bind(assignment.home_player1_id)
        .bind(assignment.home_player2_id)
        .bind(assignment.away_player1_id)
        .bind(assignment.away_player2_id)
        .bind(fixture_id)
        .bind(assignment.match_number)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Database error assigning players: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

        if result.rows_affected() == 0 {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Match {} does not exist in this fixture", assignment.match_number)
            })));
        }
    }

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit player assignment: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    // Players doubling up across matches is allowed for small squads, but
    // worth flagging back to the admin
    let warnings = validator.duplicate_player_warnings(&body.assignments);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Players assigned",
        AssignPlayersResponse {
            fixture_id,
            warnings,
        },
    )))
}

// POST /admin/fixtures/{id}/scores - Score entry for the whole fixture.
//
// The submission is gated by the result engine: every match must be decided
// before anything is written, and then matches, fixture status and the
// fixture tally are committed as a single transaction.
pub async fn enter_scores(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    body: web::Json<EnterScoresRequest>,
) -> Result<HttpResponse> {
    let fixture_id = path.into_inner();

    if body.scores.is_empty() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Missing required fields"
        })));
    }

    if load_fixture(pool.get_ref(), fixture_id).await?.is_none() {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Fixture not found"
        })));
    }

    let matches = load_matches(pool.get_ref(), fixture_id).await?;

    let mut submitted: BTreeMap<i32, ScoreSheet> = BTreeMap::new();
    for score in &body.scores {
        let sheet = match ScoreSheet::try_from(score) {
            Ok(sheet) => sheet,
            Err(e) => {
                return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                    "error": e.to_string()
                })));
            }
        };
        submitted.insert(score.match_number, sheet);
    }

    for m in &matches {
        if !submitted.contains_key(&m.match_number) {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": format!("Missing scores for match {}", m.match_number)
            })));
        }
    }
    if submitted.len() != matches.len() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Scores submitted for unknown match numbers"
        })));
    }

    let state = FixtureScoreState::from_sheets(submitted);

    if !state.is_complete() {
        return Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": "All sets for all matches must be completed"
        })));
    }

    let tally = state.tally();

    let mut tx = pool.get_ref().begin().await.map_err(|e| {
        tracing::error!("Failed to begin transaction: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let mut summaries = Vec::with_capacity(state.len());
    for (match_number, sheet) in state.iter() {
        // Sets-won is always the engine's derivation, never the client's
        let sets_won = sheet.sets_won();
        let set3 = sheet.set3();

        sqlx::query(
            r#"
            UPDATE liga_matches SET
                set1_home_games = $1, set1_away_games = $2,
                set2_home_games = $3, set2_away_games = $4,
                set3_home_games = $5, set3_away_games = $6,
                home_sets_won = $7, away_sets_won = $8,
                status = 'completed'
            WHERE fixture_id = $9 AND match_number = $10
            "#,
        )
        .bind(sheet.set1().home)
        .bind(sheet.set1().away)
        .bind(sheet.set2().home)
        .bind(sheet.set2().away)
        .bind(set3.map(|s| s.home))
        .bind(set3.map(|s| s.away))
        .bind(sets_won.home)
        .bind(sets_won.away)
        .bind(fixture_id)
        .bind(match_number)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Database error saving match scores: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

        summaries.push(MatchResultSummary {
            match_number,
            home_sets_won: sets_won.home,
            away_sets_won: sets_won.away,
            result: sets_won.label(),
        });
    }

    sqlx::query(
        r#"
        UPDATE liga_fixtures SET
            home_matches_won = $1, away_matches_won = $2,
            status = 'completed', updated_at = NOW()
        WHERE id = $3
        "#,
    )
    .bind(tally.home)
    .bind(tally.away)
    .bind(fixture_id)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Database error completing fixture: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    tx.commit().await.map_err(|e| {
        tracing::error!("Failed to commit score entry: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    tracing::info!(
        "Fixture {} completed: {} - {}",
        fixture_id,
        tally.home,
        tally.away
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Scores saved",
        EnterScoresResponse {
            fixture_id,
            home_matches_won: tally.home,
            away_matches_won: tally.away,
            matches: summaries,
        },
    )))
}

async fn load_fixture(pool: &PgPool, fixture_id: Uuid) -> Result<Option<LigaFixture>> {
    sqlx::query_as::<_, LigaFixture>("SELECT * FROM liga_fixtures WHERE id = $1")
        .bind(fixture_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            tracing::error!("Database error loading fixture: {}", e);
            actix_web::error::ErrorInternalServerError("Database error").into()
        })
}

async fn load_matches(pool: &PgPool, fixture_id: Uuid) -> Result<Vec<LigaMatch>> {
    sqlx::query_as::<_, LigaMatch>(
        "SELECT * FROM liga_matches WHERE fixture_id = $1 ORDER BY match_number ASC",
    )
    .bind(fixture_id)
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Database error loading matches: {}", e);
        actix_web::error::ErrorInternalServerError("Database error").into()
    })
}

async fn club_name_map(pool: &PgPool, club_ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>> {
    let rows = sqlx::query("SELECT id, name FROM clubs WHERE id = ANY($1)")
        .bind(&club_ids)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Database error getting club names: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?;

    Ok(rows
        .into_iter()
        .map(|row| (row.get("id"), row.get("name")))
        .collect())
}
