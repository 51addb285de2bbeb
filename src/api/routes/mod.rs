pub mod contributors;
pub mod health;
pub mod matches;
