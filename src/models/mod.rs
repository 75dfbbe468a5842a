pub mod common;
pub mod player;
pub mod team;
pub mod event;
pub mod matches;
pub mod match_log;
pub mod report;
