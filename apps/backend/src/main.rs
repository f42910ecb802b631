use actix_web::{web, App, HttpServer};
use backend::config::db::DbProfile;
use backend::config::server::ServerConfig;
use backend::handlers::Handlers;
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be provided by the runtime (docker env_file,
    // or `set -a; . ./.env; set +a` locally).
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    // Connects and synchronizes the schema; nothing is served on failure.
    let app_state = match build_state()
        .with_db(DbProfile::Prod)
        .with_security(config.security())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!("database connected and migrated");

    let handlers = Handlers::new(&app_state);
    let data = web::Data::new(app_state);

    info!(host = %config.host, port = config.port, "starting shopfront backend");

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure(handlers.clone()))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
