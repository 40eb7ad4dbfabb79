use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// League divisions a club can be placed in.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Liga {
    Liga1,
    Liga1Women,
    Liga2,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ClubStatus {
    Active,
    Inactive,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub liga: Option<Liga>,
    pub captain_id: Option<Uuid>,
    pub logo_url: Option<String>,
    pub status: ClubStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ClubWithMembers {
    #[serde(flatten)]
    pub club: Club,
    pub player_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateClubLigaRequest {
    /// `None` clears the club's league placement
    pub liga: Option<Liga>,
}
