use actix_web::web;

pub mod backend_health;
pub mod players;
pub mod teams;
pub mod events;
pub mod matches;
pub mod queries;
pub mod logs;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(backend_health::api_test)
            .service(players::get_players)
            .service(players::get_player)
            .service(players::create_player)
            .service(players::update_player)
            .service(players::delete_player)
            .service(teams::get_teams)
            .service(teams::get_team_statistics)
            .service(teams::create_team)
            .service(events::get_events)
            .service(events::create_event)
            .service(matches::get_matches)
            .service(matches::create_match)
            .service(matches::update_match)
            .service(queries::get_stats)
            .service(queries::run_query)
            .service(logs::get_logs)
            .service(logs::get_latest_logs)
    );
}
