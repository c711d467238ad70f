use actix_web::{web, App, HttpServer};
use truco_backend::middleware::cors::cors_middleware;
use truco_backend::routes;
use truco_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    println!("Starting Truco Backend on http://{}:{}", host, port);

    // One match slot, shared across workers behind its own lock
    let data = web::Data::new(AppState::new());

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
