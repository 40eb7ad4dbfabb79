use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::season::LigaSeason;

/// One row of the season table, recomputed from completed fixtures on read.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StandingRow {
    pub club_id: Uuid,
    pub position: i32,
    pub fixtures_played: i32,
    pub fixtures_won: i32,
    pub fixtures_drawn: i32,
    pub fixtures_lost: i32,
    pub matches_won: i32,
    pub matches_lost: i32,
    pub points: i32,
    pub games_difference: i32,
}

impl StandingRow {
    pub fn new(club_id: Uuid) -> Self {
        Self {
            club_id,
            position: 0,
            fixtures_played: 0,
            fixtures_won: 0,
            fixtures_drawn: 0,
            fixtures_lost: 0,
            matches_won: 0,
            matches_lost: 0,
            points: 0,
            games_difference: 0,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StandingWithClub {
    #[serde(flatten)]
    pub standing: StandingRow,
    pub club_name: String,
    pub club_logo_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SeasonStandingsResponse {
    pub season: LigaSeason,
    pub standings: Vec<StandingWithClub>,
}
