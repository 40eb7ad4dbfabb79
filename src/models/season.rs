use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::club::Liga;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SeasonStatus {
    Upcoming,
    Registration,
    Active,
    Completed,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LigaSeason {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub season_number: i32,
    pub liga: Liga,
    pub province: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_deadline: Option<NaiveDate>,
    pub status: SeasonStatus,
    pub matches_per_fixture: i32,
    pub sets_per_match: i32,
    pub games_per_set: i32,
    pub description: Option<String>,
    pub sponsor_name: Option<String>,
    pub banner_url: Option<String>,
    pub sponsor_logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreateSeasonRequest {
    pub name: String,
    pub season_number: Option<i32>,
    pub liga: Liga,
    pub province: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub registration_deadline: Option<NaiveDate>,
    pub status: Option<SeasonStatus>,
    pub matches_per_fixture: Option<i32>,
    pub sets_per_match: Option<i32>,
    pub games_per_set: Option<i32>,
    pub description: Option<String>,
    pub sponsor_name: Option<String>,
    pub banner_url: Option<String>,
    pub sponsor_logo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSeasonStatusRequest {
    pub status: SeasonStatus,
}
