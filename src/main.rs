use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trainhub::server::{config::Config, error::Error, model::app::AppState, startup};

static DEFAULT_LOG_FILTER: &str = "trainhub=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(var = e.var(), "Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let oracle = startup::build_scoring_oracle(&config)?;
    let db = startup::connect_to_database(&config).await?;
    startup::seed_demo_accounts(&config, &db).await?;

    tracing::info!("Starting server");

    let router = startup::build_router(AppState {
        db,
        oracle,
        session_ttl_hours: config.session_ttl_hours,
    });

    startup::serve(&config, router).await
}
