use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle of a logged platform match. Uppercase on the wire and in the
/// database, matching the mobile app's match log.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum PlatformMatchStatus {
    Pending,
    Verified,
    Disputed,
    Voided,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlatformMatch {
    pub id: Uuid,
    pub context_type: String,
    pub context_id: Option<Uuid>,
    pub status: PlatformMatchStatus,
    pub winner_side: Option<i32>,
    pub score_set_1_team_1: Option<i32>,
    pub score_set_1_team_2: Option<i32>,
    pub score_set_2_team_1: Option<i32>,
    pub score_set_2_team_2: Option<i32>,
    pub score_set_3_team_1: Option<i32>,
    pub score_set_3_team_2: Option<i32>,
    pub logged_by_user_id: Option<Uuid>,
    pub voided_at: Option<DateTime<Utc>>,
    pub voided_by: Option<Uuid>,
    pub voided_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MatchQueryParams {
    pub status: Option<PlatformMatchStatus>,
    pub context_type: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidMatchRequest {
    pub reason: String,
    pub admin_id: Uuid,
}
