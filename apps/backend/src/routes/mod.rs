use actix_web::web;

pub mod games;
pub mod health;

/// Configure application routes for the server and for tests.
///
/// In production, `main.rs` wires these behind the CORS middleware; tests
/// register the same paths directly so endpoint behavior can be exercised
/// without the outer wrappers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: / and /health
    cfg.configure(health::configure_routes);

    // Game routes: /api/**
    cfg.service(web::scope("/api").configure(games::configure_routes));
}
