use actix_web::web;

use crate::handlers::admin::{
    club_handler, dashboard_handler, fixture_handler, match_handler, player_handler,
    registration_handler, season_handler, standings_handler,
};

pub fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .service(
                web::resource("/dashboard")
                    .route(web::get().to(dashboard_handler::get_dashboard)),
            )
            // Club management routes
            .service(
                web::resource("/clubs")
                    .route(web::get().to(club_handler::get_clubs)),
            )
            .service(
                web::resource("/clubs/{id}/liga")
                    .route(web::patch().to(club_handler::update_club_liga)),
            )
            // Player management routes
            .service(
                web::resource("/players")
                    .route(web::get().to(player_handler::get_players)),
            )
            .service(
                web::resource("/players/{id}")
                    .route(web::get().to(player_handler::get_player_by_id)),
            )
            .service(
                web::resource("/players/{id}/grading")
                    .route(web::patch().to(player_handler::update_player_grading)),
            )
            .service(
                web::resource("/players/{id}/achievements")
                    .route(web::post().to(player_handler::add_achievement)),
            )
            .service(
                web::resource("/players/{player_id}/achievements/{achievement_id}")
                    .route(web::delete().to(player_handler::delete_achievement)),
            )
            // Season management routes
            .service(
                web::resource("/seasons")
                    .route(web::get().to(season_handler::get_seasons))
                    .route(web::post().to(season_handler::create_season)),
            )
            .service(
                web::resource("/seasons/{id}")
                    .route(web::patch().to(season_handler::update_season)),
            )
            .service(
                web::resource("/seasons/{id}/status")
                    .route(web::patch().to(season_handler::update_season_status)),
            )
            .service(
                web::resource("/seasons/{id}/fixtures")
                    .route(web::get().to(fixture_handler::get_season_fixtures)),
            )
            .service(
                web::resource("/seasons/{id}/registrations")
                    .route(web::get().to(registration_handler::get_season_registrations)),
            )
            .service(
                web::resource("/seasons/{id}/standings")
                    .route(web::get().to(standings_handler::get_season_standings)),
            )
            // Fixture management routes
            .service(
                web::resource("/fixtures")
                    .route(web::post().to(fixture_handler::create_fixture)),
            )
            .service(
                web::resource("/fixtures/{id}")
                    .route(web::get().to(fixture_handler::get_fixture_by_id))
                    .route(web::delete().to(fixture_handler::delete_fixture)),
            )
            .service(
                web::resource("/fixtures/{id}/players")
                    .route(web::post().to(fixture_handler::assign_players)),
            )
            .service(
                web::resource("/fixtures/{id}/scores")
                    .route(web::post().to(fixture_handler::enter_scores)),
            )
            // Registration management routes
            .service(
                web::resource("/registrations/{id}/status")
                    .route(web::patch().to(registration_handler::update_registration_status)),
            )
            .service(
                web::resource("/registrations/{id}/payment")
                    .route(web::patch().to(registration_handler::update_payment_status)),
            )
            .service(
                web::resource("/registrations/{id}/notes")
                    .route(web::patch().to(registration_handler::update_admin_notes)),
            )
            // Platform match log routes
            .service(
                web::resource("/matches")
                    .route(web::get().to(match_handler::get_matches)),
            )
            .service(
                web::resource("/matches/{id}/void")
                    .route(web::post().to(match_handler::void_match)),
            ),
    );
}
