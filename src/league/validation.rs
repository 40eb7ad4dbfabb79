use std::collections::HashMap;

use uuid::Uuid;

use crate::models::fixture::PlayerAssignmentRequest;

/// Centralized validation for liga admin operations
pub struct LigaValidator;

impl LigaValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a season or tournament name
    pub fn validate_name(&self, name: &str) -> Result<(), sqlx::Error> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(sqlx::Error::Protocol("Name cannot be empty".into()));
        }

        if trimmed.len() > 255 {
            return Err(sqlx::Error::Protocol(
                "Name too long (maximum 255 characters)".into(),
            ));
        }

        if !trimmed.chars().any(|c| c.is_alphanumeric()) {
            return Err(sqlx::Error::Protocol(
                "Name must contain alphanumeric characters".into(),
            ));
        }

        Ok(())
    }

    /// Validate a gameweek number
    pub fn validate_gameweek(&self, gameweek: i32) -> Result<(), sqlx::Error> {
        if gameweek < 1 {
            return Err(sqlx::Error::Protocol(
                format!("Gameweek must be at least 1, got {}", gameweek).into(),
            ));
        }
        if gameweek > 52 {
            return Err(sqlx::Error::Protocol(
                format!("Gameweek {} exceeds the season limit of 52", gameweek).into(),
            ));
        }
        Ok(())
    }

    /// Validate that home and away clubs differ
    pub fn validate_clubs_distinct(
        &self,
        home_club_id: Uuid,
        away_club_id: Uuid,
    ) -> Result<(), sqlx::Error> {
        if home_club_id == away_club_id {
            return Err(sqlx::Error::Protocol(
                "Home and away clubs must be different".into(),
            ));
        }
        Ok(())
    }

    /// Non-fatal warnings for players who appear in more than one match of
    /// the same fixture. Small squads make this legitimate, so the caller
    /// surfaces the warnings instead of rejecting.
    pub fn duplicate_player_warnings(
        &self,
        assignments: &[PlayerAssignmentRequest],
    ) -> Vec<String> {
        let mut appearances: HashMap<Uuid, i32> = HashMap::new();
        for assignment in assignments {
            for player_id in [
                assignment.home_player1_id,
                assignment.home_player2_id,
                assignment.away_player1_id,
                assignment.away_player2_id,
            ] {
                *appearances.entry(player_id).or_insert(0) += 1;
            }
        }

        let mut warnings: Vec<String> = appearances
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(player_id, count)| {
                format!("Player {} appears in {} matches (limited squad?)", player_id, count)
            })
            .collect();
        warnings.sort();
        warnings
    }

    /// Each match within a fixture takes two distinct players per side
    pub fn validate_assignment(
        &self,
        assignment: &PlayerAssignmentRequest,
    ) -> Result<(), sqlx::Error> {
        if assignment.home_player1_id == assignment.home_player2_id {
            return Err(sqlx::Error::Protocol(
                format!(
                    "Match {}: home side lists the same player twice",
                    assignment.match_number
                )
                .into(),
            ));
        }
        if assignment.away_player1_id == assignment.away_player2_id {
            return Err(sqlx::Error::Protocol(
                format!(
                    "Match {}: away side lists the same player twice",
                    assignment.match_number
                )
                .into(),
            ));
        }
        Ok(())
    }
}

impl Default for LigaValidator {
    fn default() -> Self {
        Self::new()
    }
}
