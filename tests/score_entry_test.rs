use uuid::Uuid;

use padelliga_backend::league::results::{ScoreSheet, SetScore};
use padelliga_backend::league::validation::LigaValidator;
use padelliga_backend::models::fixture::{MatchScoreRequest, PlayerAssignmentRequest};

fn request(
    match_number: i32,
    set1: (i32, i32),
    set2: (i32, i32),
    set3: Option<(i32, i32)>,
) -> MatchScoreRequest {
    MatchScoreRequest {
        match_number,
        set1_home: set1.0,
        set1_away: set1.1,
        set2_home: set2.0,
        set2_away: set2.1,
        set3_home: set3.map(|s| s.0),
        set3_away: set3.map(|s| s.1),
        home_sets_won: None,
        away_sets_won: None,
    }
}

#[test]
fn test_two_set_request_converts() {
    let sheet = ScoreSheet::try_from(&request(1, (6, 4), (6, 2), None)).unwrap();
    assert_eq!(
        sheet,
        ScoreSheet::TwoSets {
            set1: SetScore::new(6, 4),
            set2: SetScore::new(6, 2),
        }
    );
}

#[test]
fn test_three_set_request_converts() {
    let sheet = ScoreSheet::try_from(&request(2, (6, 4), (4, 6), Some((7, 5)))).unwrap();
    assert_eq!(
        sheet,
        ScoreSheet::ThreeSets {
            set1: SetScore::new(6, 4),
            set2: SetScore::new(4, 6),
            set3: SetScore::new(7, 5),
        }
    );
}

#[test]
fn test_half_entered_third_set_is_rejected() {
    let mut req = request(3, (6, 4), (4, 6), None);
    req.set3_home = Some(6);
    let err = ScoreSheet::try_from(&req).unwrap_err();
    assert!(err.to_string().contains("Match 3"));
}

#[test]
fn test_client_sets_won_figures_are_ignored() {
    // Whatever the console claims, the sheet derives its own count
    let mut req = request(1, (6, 4), (6, 2), None);
    req.home_sets_won = Some(0);
    req.away_sets_won = Some(2);
    let sheet = ScoreSheet::try_from(&req).unwrap();
    assert_eq!(sheet.sets_won().home, 2);
    assert_eq!(sheet.sets_won().away, 0);
}

#[test]
fn test_wire_field_names_are_camel_case() {
    let req: MatchScoreRequest = serde_json::from_value(serde_json::json!({
        "matchNumber": 2,
        "set1Home": 6, "set1Away": 4,
        "set2Home": 3, "set2Away": 6,
        "set3Home": 6, "set3Away": 1
    }))
    .unwrap();
    assert_eq!(req.match_number, 2);
    assert_eq!(req.set3_home, Some(6));
}

fn assignment(match_number: i32, players: [Uuid; 4]) -> PlayerAssignmentRequest {
    PlayerAssignmentRequest {
        match_number,
        home_player1_id: players[0],
        home_player2_id: players[1],
        away_player1_id: players[2],
        away_player2_id: players[3],
    }
}

#[test]
fn test_same_player_twice_on_one_side_is_rejected() {
    let validator = LigaValidator::new();
    let dup = Uuid::new_v4();
    let result = validator.validate_assignment(&assignment(
        1,
        [dup, dup, Uuid::new_v4(), Uuid::new_v4()],
    ));
    assert!(result.is_err());
}

#[test]
fn test_player_in_two_matches_only_warns() {
    let validator = LigaValidator::new();
    let shared = Uuid::new_v4();
    let first = assignment(1, [shared, Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()]);
    let second = assignment(2, [shared, Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()]);

    assert!(validator.validate_assignment(&first).is_ok());
    assert!(validator.validate_assignment(&second).is_ok());

    let warnings = validator.duplicate_player_warnings(&[first, second]);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains(&shared.to_string()));
    assert!(warnings[0].contains("2 matches"));
}

#[test]
fn test_gameweek_bounds() {
    let validator = LigaValidator::new();
    assert!(validator.validate_gameweek(0).is_err());
    assert!(validator.validate_gameweek(1).is_ok());
    assert!(validator.validate_gameweek(52).is_ok());
    assert!(validator.validate_gameweek(53).is_err());
}

#[test]
fn test_name_validation() {
    let validator = LigaValidator::new();
    assert!(validator.validate_name("Liga 1 East Java 2025").is_ok());
    assert!(validator.validate_name("   ").is_err());
    assert!(validator.validate_name("***").is_err());
    assert!(validator.validate_name(&"x".repeat(300)).is_err());
}

#[test]
fn test_identical_clubs_rejected() {
    let validator = LigaValidator::new();
    let club = Uuid::new_v4();
    assert!(validator.validate_clubs_distinct(club, club).is_err());
    assert!(validator
        .validate_clubs_distinct(club, Uuid::new_v4())
        .is_ok());
}
