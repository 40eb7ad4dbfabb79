use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub club_id: Option<Uuid>,
    pub pbpi_grading: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct PlayerAchievement {
    pub id: Uuid,
    pub player_id: Uuid,
    pub tournament_name: String,
    pub tournament_slug: String,
    pub achievement_date: NaiveDate,
    pub finish_position: String,
    pub display_text: Option<String>,
    pub is_featured: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PlayerWithClub {
    #[serde(flatten)]
    pub player: Player,
    pub club_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlayerDetailResponse {
    #[serde(flatten)]
    pub player: Player,
    pub club_name: Option<String>,
    pub achievements: Vec<PlayerAchievement>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerQueryParams {
    pub search: Option<String>,
    pub club_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGradingRequest {
    pub grading: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAchievementRequest {
    pub tournament_name: String,
    pub achievement_date: NaiveDate,
    pub finish_position: String,
    pub display_text: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    pub created_by: Option<Uuid>,
}
