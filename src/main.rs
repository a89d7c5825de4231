mod clinics;
mod config;
mod knowledge;
mod triage;
mod web;

use actix_cors::Cors;
use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use tera::Tera;

use clinics::ClinicDirectory;
use config::Config;
use knowledge::PhraseTable;
use web::routes;

// App state structure: static lookup tables, built once and never mutated
struct AppState {
    tera: Tera,
    knowledge: PhraseTable,
    clinics: ClinicDirectory,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting MedChat backend");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    // Create app state
    let app_state = Data::new(AppState {
        tera,
        knowledge: PhraseTable::new(),
        clinics: ClinicDirectory::new(),
    });

    let port = config.port;
    let allowed_origins = config.allowed_origins;
    info!("Listening on port {}", port);

    // Start web server
    HttpServer::new(move || {
        // Cors is not Clone, so it is rebuilt per worker
        let cors = if allowed_origins.is_empty() {
            Cors::permissive()
        } else {
            allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allow_any_method()
                .allow_any_header()
        };
        App::new()
            .app_data(app_state.clone())
            .app_data(web::json_config())
            .wrap(cors)
            .configure(routes::configure)
            .service(fs::Files::new("/static", "./static"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
