pub mod backend_health_handler;
pub mod player_handler;
pub mod team_handler;
pub mod event_handler;
pub mod match_handler;
pub mod report_handler;
pub mod log_handler;
