pub mod results;
pub mod standings;
pub mod validation;
