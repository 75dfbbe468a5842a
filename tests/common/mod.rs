pub mod utils;
pub mod sports_helpers;
