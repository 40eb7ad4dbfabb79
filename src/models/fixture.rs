use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::league::results::{ScoreSheet, SetScore};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FixtureStatus {
    Scheduled,
    InProgress,
    Completed,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LigaMatchStatus {
    Pending,
    Assigned,
    Completed,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LigaFixture {
    pub id: Uuid,
    pub season_id: Uuid,
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
    pub gameweek: i32,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub venue_name: String,
    pub status: FixtureStatus,
    // Derived tally, written once at completion from the score state
    pub home_matches_won: Option<i32>,
    pub away_matches_won: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct LigaMatch {
    pub id: Uuid,
    pub fixture_id: Uuid,
    pub match_number: i32,
    pub home_player1_id: Option<Uuid>,
    pub home_player2_id: Option<Uuid>,
    pub away_player1_id: Option<Uuid>,
    pub away_player2_id: Option<Uuid>,
    pub set1_home_games: Option<i32>,
    pub set1_away_games: Option<i32>,
    pub set2_home_games: Option<i32>,
    pub set2_away_games: Option<i32>,
    pub set3_home_games: Option<i32>,
    pub set3_away_games: Option<i32>,
    pub home_sets_won: Option<i32>,
    pub away_sets_won: Option<i32>,
    pub status: LigaMatchStatus,
}

#[derive(Debug, Serialize)]
pub struct FixtureWithClubs {
    #[serde(flatten)]
    pub fixture: LigaFixture,
    pub home_club_name: String,
    pub away_club_name: String,
}

#[derive(Debug, Serialize)]
pub struct FixtureDetailResponse {
    #[serde(flatten)]
    pub fixture: LigaFixture,
    pub home_club_name: String,
    pub away_club_name: String,
    pub matches: Vec<LigaMatch>,
    /// Names of every player assigned in this fixture, keyed by id
    pub player_names: std::collections::HashMap<Uuid, String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFixtureRequest {
    pub season_id: Uuid,
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
    pub gameweek: i32,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub venue_name: String,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAssignmentRequest {
    pub match_number: i32,
    pub home_player1_id: Uuid,
    pub home_player2_id: Uuid,
    pub away_player1_id: Uuid,
    pub away_player2_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AssignPlayersRequest {
    pub assignments: Vec<PlayerAssignmentRequest>,
}

/// Per-match score record as submitted by the console. Sets-won figures may
/// be present on the wire but are recomputed server side; the stored values
/// always come from the result engine.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct MatchScoreRequest {
    pub match_number: i32,
    pub set1_home: i32,
    pub set1_away: i32,
    pub set2_home: i32,
    pub set2_away: i32,
    pub set3_home: Option<i32>,
    pub set3_away: Option<i32>,
    #[serde(default)]
    pub home_sets_won: Option<i32>,
    #[serde(default)]
    pub away_sets_won: Option<i32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreEntryError {
    #[error("Match {match_number}: third set needs game counts for both sides")]
    UnpairedThirdSet { match_number: i32 },
}

impl TryFrom<&MatchScoreRequest> for ScoreSheet {
    type Error = ScoreEntryError;

    fn try_from(score: &MatchScoreRequest) -> Result<Self, Self::Error> {
        let set1 = SetScore::new(score.set1_home, score.set1_away);
        let set2 = SetScore::new(score.set2_home, score.set2_away);
        match (score.set3_home, score.set3_away) {
            (Some(home), Some(away)) => Ok(ScoreSheet::ThreeSets {
                set1,
                set2,
                set3: SetScore::new(home, away),
            }),
            (None, None) => Ok(ScoreSheet::TwoSets { set1, set2 }),
            _ => Err(ScoreEntryError::UnpairedThirdSet {
                match_number: score.match_number,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EnterScoresRequest {
    pub scores: Vec<MatchScoreRequest>,
}

#[derive(Debug, Serialize)]
pub struct MatchResultSummary {
    pub match_number: i32,
    pub home_sets_won: i32,
    pub away_sets_won: i32,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct EnterScoresResponse {
    pub fixture_id: Uuid,
    pub home_matches_won: i32,
    pub away_matches_won: i32,
    pub matches: Vec<MatchResultSummary>,
}

#[derive(Debug, Serialize)]
pub struct AssignPlayersResponse {
    pub fixture_id: Uuid,
    pub warnings: Vec<String>,
}
