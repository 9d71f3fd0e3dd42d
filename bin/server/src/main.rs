mod constants;
mod handlers;
mod request_log;
mod state;

use actix_web::middleware::from_fn;
use actix_web::{web, App, HttpServer};
use clap::{Arg, Command};
use constants::{DEFAULT_HOST, DEFAULT_PORT, LOG_DIR, UPLOAD_DIR};
use request_log::{log_request_entry, DailyLogger};
use state::AppState;
use storage::FilesystemStorage;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing with env filter
    // Filter out actix-server worker shutdown messages
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info")
                    .add_directive("actix_server::worker=warn".parse().unwrap())
                    .add_directive("actix_server::accept=warn".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting audio upload server (PID: {})",
        std::process::id()
    );

    // Parse command line arguments
    let matches = Command::new("server")
        .arg(
            Arg::new("host")
                .long("host")
                .value_name("HOST")
                .help("Server host")
                .default_value(DEFAULT_HOST),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .value_name("PORT")
                .help("Server port")
                .default_value(DEFAULT_PORT),
        )
        .get_matches();

    // Create the storage and log directories at startup if absent
    let storage = FilesystemStorage::new(UPLOAD_DIR);
    storage.ensure_dir().await.map_err(|e| {
        error!("Failed to create upload directory: {}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to create upload directory: {}", e),
        )
    })?;
    info!("Upload directory: {:?}", storage.upload_dir());

    let request_log = DailyLogger::new(LOG_DIR);
    request_log.ensure_dir().map_err(|e| {
        error!("Failed to create log directory: {}", e);
        e
    })?;
    info!("Log directory: {}", LOG_DIR);

    // Initialize application state
    let state = web::Data::new(AppState::new(storage, request_log));

    let host = matches
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or(DEFAULT_HOST);
    let port = matches
        .get_one::<String>("port")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PORT);
    let bind_address = format!("{}:{}", host, port);

    info!("Starting server on http://{}", bind_address);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(from_fn(log_request_entry))
            .service(handlers::index::upload_page)
            .service(handlers::files::get_files)
            .service(handlers::upload::upload)
    })
    .bind(&bind_address)
    .map_err(|e| {
        error!("Failed to bind to {}: {}", bind_address, e);
        e
    })?;

    info!("Server bound successfully to http://{}", bind_address);

    server.workers(1).run().await
}
