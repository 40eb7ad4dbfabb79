use std::collections::HashMap;

use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::league::results::{FixtureScoreState, ScoreSheet, SetScore};
use crate::models::standing::{StandingRow, StandingWithClub};

/// A completed fixture reduced to what the table derivation needs.
#[derive(Debug, Clone)]
pub struct FixtureResult {
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
    pub scores: FixtureScoreState,
}

/// Derive the season table from completed fixtures. This is the single
/// derivation site for fixture-level aggregates: rows are recomputed from
/// match score sheets on every read, never cached in a standings table.
///
/// Points: 3 for a won fixture, 1 for a drawn one. Ordered by points, then
/// match-win difference, then games difference.
pub fn derive_standings(results: &[FixtureResult]) -> Vec<StandingRow> {
    let mut rows: HashMap<Uuid, StandingRow> = HashMap::new();

    for result in results {
        let tally = result.scores.tally();
        let (mut home_games, mut away_games) = (0, 0);
        for (_, sheet) in result.scores.iter() {
            let (h, a) = sheet.games_totals();
            home_games += h;
            away_games += a;
        }

        rows.entry(result.home_club_id)
            .or_insert_with(|| StandingRow::new(result.home_club_id))
            .apply_fixture(tally.home, tally.away, home_games, away_games);

        rows.entry(result.away_club_id)
            .or_insert_with(|| StandingRow::new(result.away_club_id))
            .apply_fixture(tally.away, tally.home, away_games, home_games);
    }

    let mut standings: Vec<StandingRow> = rows.into_values().collect();
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| (b.matches_won - b.matches_lost).cmp(&(a.matches_won - a.matches_lost)))
            .then_with(|| b.games_difference.cmp(&a.games_difference))
            .then_with(|| a.club_id.cmp(&b.club_id))
    });
    for (index, row) in standings.iter_mut().enumerate() {
        row.position = (index + 1) as i32;
    }
    standings
}

impl StandingRow {
    fn apply_fixture(
        &mut self,
        matches_won: i32,
        matches_lost: i32,
        games_for: i32,
        games_against: i32,
    ) {
        self.fixtures_played += 1;
        self.matches_won += matches_won;
        self.matches_lost += matches_lost;
        self.games_difference += games_for - games_against;
        if matches_won > matches_lost {
            self.fixtures_won += 1;
            self.points += 3;
        } else if matches_won == matches_lost {
            self.fixtures_drawn += 1;
            self.points += 1;
        } else {
            self.fixtures_lost += 1;
        }
    }
}

/// Service that assembles the standings view for a season.
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_season_standings(
        &self,
        season_id: Uuid,
    ) -> Result<Vec<StandingWithClub>, sqlx::Error> {
        let fixture_rows = sqlx::query(
            r#"
            SELECT id, home_club_id, away_club_id
            FROM liga_fixtures
            WHERE season_id = $1 AND status = 'completed'
            "#,
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await?;

        let mut results = Vec::with_capacity(fixture_rows.len());
        for row in &fixture_rows {
            let fixture_id: Uuid = row.get("id");
            let scores = self.load_score_state(fixture_id).await?;
            results.push(FixtureResult {
                home_club_id: row.get("home_club_id"),
                away_club_id: row.get("away_club_id"),
                scores,
            });
        }

        let standings = derive_standings(&results);

        let club_ids: Vec<Uuid> = standings.iter().map(|s| s.club_id).collect();
        let club_rows = sqlx::query("SELECT id, name, logo_url FROM clubs WHERE id = ANY($1)")
            .bind(&club_ids)
            .fetch_all(&self.pool)
            .await?;
        let clubs: HashMap<Uuid, (String, Option<String>)> = club_rows
            .into_iter()
            .map(|row| {
                (
                    row.get::<Uuid, _>("id"),
                    (row.get("name"), row.get("logo_url")),
                )
            })
            .collect();

        Ok(standings
            .into_iter()
            .map(|standing| {
                let (club_name, club_logo_url) = clubs
                    .get(&standing.club_id)
                    .cloned()
                    .unwrap_or_else(|| ("Unknown club".to_string(), None));
                StandingWithClub {
                    standing,
                    club_name,
                    club_logo_url,
                }
            })
            .collect())
    }

    /// Rebuild the pure score state of a fixture from its match rows.
    async fn load_score_state(&self, fixture_id: Uuid) -> Result<FixtureScoreState, sqlx::Error> {
        let match_rows = sqlx::query(
            r#"
            SELECT match_number,
                   set1_home_games, set1_away_games,
                   set2_home_games, set2_away_games,
                   set3_home_games, set3_away_games
            FROM liga_matches
            WHERE fixture_id = $1
            ORDER BY match_number
            "#,
        )
        .bind(fixture_id)
        .fetch_all(&self.pool)
        .await?;

        let sheets = match_rows.into_iter().map(|row| {
            let match_number: i32 = row.get("match_number");
            let set1 = SetScore::new(
                row.get::<Option<i32>, _>("set1_home_games").unwrap_or(0),
                row.get::<Option<i32>, _>("set1_away_games").unwrap_or(0),
            );
            let set2 = SetScore::new(
                row.get::<Option<i32>, _>("set2_home_games").unwrap_or(0),
                row.get::<Option<i32>, _>("set2_away_games").unwrap_or(0),
            );
            let set3 = match (
                row.get::<Option<i32>, _>("set3_home_games"),
                row.get::<Option<i32>, _>("set3_away_games"),
            ) {
                (Some(home), Some(away)) => Some(SetScore::new(home, away)),
                _ => None,
            };
            let sheet = match set3 {
                Some(set3) => ScoreSheet::ThreeSets { set1, set2, set3 },
                None => ScoreSheet::TwoSets { set1, set2 },
            };
            (match_number, sheet)
        });

        Ok(FixtureScoreState::from_sheets(sheets))
    }
}
