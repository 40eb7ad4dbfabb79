pub mod club;
pub mod common;
pub mod fixture;
pub mod platform_match;
pub mod player;
pub mod registration;
pub mod season;
pub mod standing;
