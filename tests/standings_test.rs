use uuid::Uuid;

use padelliga_backend::league::results::{FixtureScoreState, ScoreSheet, SetScore};
use padelliga_backend::league::standings::{derive_standings, FixtureResult};
use padelliga_backend::models::standing::StandingRow;

fn sheet2(s1: (i32, i32), s2: (i32, i32)) -> ScoreSheet {
    ScoreSheet::TwoSets {
        set1: SetScore::new(s1.0, s1.1),
        set2: SetScore::new(s2.0, s2.1),
    }
}

fn fixture(home: Uuid, away: Uuid, sheets: Vec<ScoreSheet>) -> FixtureResult {
    FixtureResult {
        home_club_id: home,
        away_club_id: away,
        scores: FixtureScoreState::from_sheets(
            sheets.into_iter().enumerate().map(|(i, s)| (i as i32 + 1, s)),
        ),
    }
}

fn row<'a>(standings: &'a [StandingRow], club: Uuid) -> &'a StandingRow {
    standings.iter().find(|r| r.club_id == club).unwrap()
}

#[test]
fn test_empty_input_yields_empty_table() {
    assert!(derive_standings(&[]).is_empty());
}

#[test]
fn test_single_fixture_win_loss() {
    let (club_a, club_b) = (Uuid::new_v4(), Uuid::new_v4());
    // Home takes all three matches
    let standings = derive_standings(&[fixture(
        club_a,
        club_b,
        vec![
            sheet2((6, 4), (6, 2)),
            sheet2((6, 3), (6, 4)),
            sheet2((6, 0), (6, 1)),
        ],
    )]);

    assert_eq!(standings.len(), 2);
    let winner = row(&standings, club_a);
    assert_eq!(winner.position, 1);
    assert_eq!(winner.fixtures_played, 1);
    assert_eq!(winner.fixtures_won, 1);
    assert_eq!(winner.matches_won, 3);
    assert_eq!(winner.matches_lost, 0);
    assert_eq!(winner.points, 3);

    let loser = row(&standings, club_b);
    assert_eq!(loser.position, 2);
    assert_eq!(loser.fixtures_lost, 1);
    assert_eq!(loser.matches_won, 0);
    assert_eq!(loser.points, 0);
}

#[test]
fn test_drawn_fixture_gives_one_point_each() {
    let (club_a, club_b) = (Uuid::new_v4(), Uuid::new_v4());
    let standings = derive_standings(&[fixture(
        club_a,
        club_b,
        vec![sheet2((6, 4), (6, 2)), sheet2((3, 6), (4, 6))],
    )]);

    assert_eq!(row(&standings, club_a).points, 1);
    assert_eq!(row(&standings, club_a).fixtures_drawn, 1);
    assert_eq!(row(&standings, club_b).points, 1);
    assert_eq!(row(&standings, club_b).fixtures_drawn, 1);
}

#[test]
fn test_games_difference_is_symmetric() {
    let (club_a, club_b) = (Uuid::new_v4(), Uuid::new_v4());
    let standings = derive_standings(&[fixture(
        club_a,
        club_b,
        vec![sheet2((6, 4), (6, 2)), sheet2((3, 6), (6, 4))],
    )]);

    let diff_a = row(&standings, club_a).games_difference;
    let diff_b = row(&standings, club_b).games_difference;
    assert_eq!(diff_a, -diff_b);
    assert_eq!(diff_a, (6 + 6 + 3 + 6) - (4 + 2 + 6 + 4));
}

#[test]
fn test_points_order_wins_over_games_difference() {
    let (club_a, club_b, club_c, club_d) = (
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
    );
    // A wins narrowly on tiebreak games; C draws with a big games haul
    let standings = derive_standings(&[
        fixture(
            club_a,
            club_b,
            vec![sheet2((7, 6), (7, 6)), sheet2((7, 6), (7, 6))],
        ),
        fixture(
            club_c,
            club_d,
            vec![sheet2((6, 0), (6, 0)), sheet2((0, 6), (0, 6))],
        ),
    ]);

    assert_eq!(row(&standings, club_a).points, 3);
    assert_eq!(row(&standings, club_c).points, 1);
    // Three points always ranks above one, whatever the games difference
    assert!(row(&standings, club_a).position < row(&standings, club_c).position);
}

#[test]
fn test_positions_are_dense_from_one() {
    let clubs: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
    let standings = derive_standings(&[
        fixture(
            clubs[0],
            clubs[1],
            vec![sheet2((6, 1), (6, 1)), sheet2((6, 1), (6, 1))],
        ),
        fixture(
            clubs[2],
            clubs[3],
            vec![sheet2((1, 6), (1, 6)), sheet2((1, 6), (1, 6))],
        ),
    ]);

    let positions: Vec<i32> = standings.iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

#[test]
fn test_club_accumulates_across_fixtures() {
    let (club_a, club_b, club_c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let standings = derive_standings(&[
        fixture(
            club_a,
            club_b,
            vec![sheet2((6, 2), (6, 3)), sheet2((6, 4), (6, 2))],
        ),
        fixture(
            club_c,
            club_a,
            vec![sheet2((2, 6), (3, 6)), sheet2((4, 6), (2, 6))],
        ),
    ]);

    let leader = row(&standings, club_a);
    assert_eq!(leader.fixtures_played, 2);
    assert_eq!(leader.fixtures_won, 2);
    assert_eq!(leader.matches_won, 4);
    assert_eq!(leader.points, 6);
    assert_eq!(leader.position, 1);
}
