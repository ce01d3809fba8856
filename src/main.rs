use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use roommate_match::config::{LoggingSettings, Settings};
use roommate_match::error::ServiceError;
use roommate_match::routes::{self, AppState};
use roommate_match::{Ranker, Scorer};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
fn init_tracing(logging: &LoggingSettings) -> Result<(), ServiceError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = match logging.format.as_str() {
        "pretty" => subscriber.pretty().try_init(),
        "json" => subscriber.json().try_init(),
        _ => subscriber.try_init(),
    };

    result.map_err(|e| ServiceError::Logging(e.to_string()))
}

#[actix_web::main]
async fn main() -> Result<(), ServiceError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    init_tracing(&settings.logging)?;

    info!("Starting roommate-match scoring service...");

    let scorer = Scorer::new(settings.scoring.unset_policy);
    let ranker = Ranker::new(scorer);

    info!("Scorer initialized with unset policy: {:?}", scorer.policy());

    let app_state = AppState {
        ranker,
        ranking: settings.ranking.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
