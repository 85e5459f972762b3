use actix_web::{middleware::Logger, web, App, HttpServer};

mod config;
mod handlers;
mod middleware;
mod models;
mod services;

use config::Config;
use services::catalog::Catalog;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // A missing or invalid catalog file stops startup.
    let catalog = match Catalog::load(config.catalog_path.as_deref()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Could not load the course catalog: {}", e);
            std::process::exit(1);
        }
    };

    match config.catalog_path {
        Some(ref path) => log::info!(
            "Loaded {} categories from {}",
            catalog.categories().len(),
            path
        ),
        None => log::info!(
            "Using the built-in catalog ({} categories)",
            catalog.categories().len()
        ),
    }

    if let Some(ref path) = config.static_files_path {
        log::info!("Serving static files from: {}", path);
    }
    match config.frontend_url {
        Some(ref origin) => log::info!("Allowing cross-origin requests from {}", origin),
        None => log::warn!("FRONTEND_URL is not set; cross-origin requests will be rejected"),
    }

    let app_state = web::Data::new(models::AppState { catalog });

    log::info!("App is running at http://{}:{}", config.host, config.port);

    let frontend_url = config.frontend_url.clone();
    let static_files_path = config.static_files_path.clone();

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(middleware::cors_for(frontend_url.as_deref()))
            .configure(handlers::configure_routes);

        // Registered last: it answers every path the API does not.
        if let Some(ref path) = static_files_path {
            app = app.service(handlers::spa::static_files(path));
        }

        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
