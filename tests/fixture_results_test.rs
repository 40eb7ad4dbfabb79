use padelliga_backend::league::results::{
    FixtureScoreState, FixtureTally, ScoreSheet, SetScore, SetsWon, Side,
};

fn sheet2(s1: (i32, i32), s2: (i32, i32)) -> ScoreSheet {
    ScoreSheet::TwoSets {
        set1: SetScore::new(s1.0, s1.1),
        set2: SetScore::new(s2.0, s2.1),
    }
}

fn sheet3(s1: (i32, i32), s2: (i32, i32), s3: (i32, i32)) -> ScoreSheet {
    ScoreSheet::ThreeSets {
        set1: SetScore::new(s1.0, s1.1),
        set2: SetScore::new(s2.0, s2.1),
        set3: SetScore::new(s3.0, s3.1),
    }
}

#[test]
fn test_straight_sets_home_win() {
    let sheet = sheet2((6, 4), (6, 2));
    assert_eq!(sheet.sets_won(), SetsWon { home: 2, away: 0 });
    assert!(!sheet.needs_third_set());
    assert!(sheet.is_complete());
    assert_eq!(sheet.sets_won().winner(), Some(Side::Home));
}

#[test]
fn test_straight_sets_away_win() {
    let sheet = sheet2((3, 6), (4, 6));
    assert_eq!(sheet.sets_won(), SetsWon { home: 0, away: 2 });
    assert!(sheet.is_complete());
    assert_eq!(sheet.sets_won().winner(), Some(Side::Away));
}

#[test]
fn test_split_without_third_set_is_incomplete() {
    let sheet = sheet2((6, 4), (4, 6));
    assert!(sheet.needs_third_set());
    assert!(!sheet.is_complete());
}

#[test]
fn test_split_with_played_third_set_is_complete() {
    let sheet = sheet3((6, 4), (4, 6), (7, 5));
    assert!(sheet.needs_third_set());
    assert!(sheet.is_complete());
}

#[test]
fn test_split_with_unplayed_third_set_stays_incomplete() {
    // A recorded 0-0 third set does not decide anything
    let sheet = sheet3((6, 4), (4, 6), (0, 0));
    assert!(!sheet.is_complete());
}

#[test]
fn test_unplayed_first_set_blocks_completion() {
    assert!(!sheet2((0, 6), (6, 2)).is_complete());
    assert!(!sheet2((6, 0), (6, 2)).is_complete());
    assert!(!sheet2((0, 0), (6, 2)).is_complete());
}

#[test]
fn test_tied_sets_count_for_neither_side() {
    let sheet = sheet2((5, 5), (5, 5));
    assert_eq!(sheet.sets_won(), SetsWon { home: 0, away: 0 });
    // Played but winnerless, so it is not a 1-1 split and completes
    assert!(sheet.is_complete());
    assert_eq!(sheet.sets_won().winner(), None);
}

#[test]
fn test_third_set_excluded_from_sets_won() {
    let sheet = sheet3((6, 3), (2, 6), (6, 1));
    assert_eq!(sheet.sets_won(), SetsWon { home: 1, away: 1 });
}

#[test]
fn test_games_totals_include_third_set() {
    let sheet = sheet3((6, 3), (2, 6), (6, 1));
    assert_eq!(sheet.games_totals(), (14, 10));
    assert_eq!(sheet2((6, 3), (2, 6)).games_totals(), (8, 9));
}

#[test]
fn test_result_labels() {
    assert_eq!(sheet2((6, 4), (6, 2)).sets_won().label(), "Home wins 2-0");
    assert_eq!(sheet2((3, 6), (4, 6)).sets_won().label(), "Away wins 2-0");
    assert_eq!(
        sheet3((6, 4), (4, 6), (6, 3)).sets_won().label(),
        "Tied 1-1"
    );
}

#[test]
fn test_empty_state_is_vacuously_complete() {
    let state = FixtureScoreState::new();
    assert!(state.is_empty());
    assert!(state.is_complete());
    assert_eq!(state.completed_count(), 0);
    assert_eq!(state.tally(), FixtureTally::default());
}

#[test]
fn test_with_sheet_leaves_original_untouched() {
    let state = FixtureScoreState::from_sheets([(1, sheet2((6, 4), (6, 2)))]);
    let updated = state.with_sheet(2, sheet2((3, 6), (4, 6)));

    assert_eq!(state.len(), 1);
    assert_eq!(updated.len(), 2);
    assert!(state.sheet(2).is_none());
    assert!(updated.sheet(2).is_some());
}

#[test]
fn test_with_sheet_replaces_existing_match() {
    let state = FixtureScoreState::from_sheets([(1, sheet2((0, 0), (0, 0)))]);
    assert!(!state.is_complete());

    let updated = state.with_sheet(1, sheet2((6, 4), (6, 2)));
    assert_eq!(updated.len(), 1);
    assert!(updated.is_complete());
}

#[test]
fn test_fixture_tally_counts_decided_matches_only() {
    let state = FixtureScoreState::from_sheets([
        (1, sheet2((6, 4), (6, 2))),
        (2, sheet2((3, 6), (4, 6))),
        (3, sheet2((6, 1), (6, 0))),
    ]);
    assert!(state.is_complete());
    assert_eq!(state.tally(), FixtureTally { home: 2, away: 1 });
}

#[test]
fn test_three_set_match_contributes_to_neither_side() {
    // The tally compares sets won in the first two sets only, so a match
    // decided by a third set still registers as 1-1 and moves nothing.
    let state = FixtureScoreState::from_sheets([
        (1, sheet3((6, 4), (4, 6), (6, 2))),
        (2, sheet2((6, 3), (6, 4))),
    ]);
    assert!(state.is_complete());
    assert_eq!(state.tally(), FixtureTally { home: 1, away: 0 });
}

#[test]
fn test_completed_count_tracks_partial_entry() {
    let state = FixtureScoreState::from_sheets([
        (1, sheet2((6, 4), (6, 2))),
        (2, sheet2((6, 4), (4, 6))),
        (3, sheet2((0, 0), (0, 0))),
    ]);
    assert_eq!(state.completed_count(), 1);
    assert!(!state.is_complete());
}
