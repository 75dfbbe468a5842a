pub mod players;
pub mod teams;
pub mod events;
pub mod matches;
pub mod reports;
pub mod match_logs;
