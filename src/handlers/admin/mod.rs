pub mod club_handler;
pub mod dashboard_handler;
pub mod fixture_handler;
pub mod match_handler;
pub mod player_handler;
pub mod registration_handler;
pub mod season_handler;
pub mod standings_handler;
