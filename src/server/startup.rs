use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::Error, model::app::AppState, router,
    service::{auth::AuthService, scoring::oracle::ScoringOracle},
};

/// Build the scoring oracle client with the configured timeout
///
/// Without `SCORING_API_KEY` the oracle is disabled and every score comes from the
/// local fallbacks.
pub fn build_scoring_oracle(config: &Config) -> Result<ScoringOracle, Error> {
    let client = reqwest::Client::builder()
        .timeout(config.scoring_timeout)
        .build()?;

    let oracle = ScoringOracle::new(
        client,
        &config.scoring_api_url,
        config.scoring_api_key.clone(),
        &config.scoring_model,
    );

    if !oracle.is_enabled() {
        tracing::warn!("SCORING_API_KEY is not set, evaluations will use fallback scores");
    }

    Ok(oracle)
}

/// Connect to the database with a bounded pool and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .idle_timeout(config.db_idle_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Insert the demo accounts when enabled by configuration
pub async fn seed_demo_accounts(config: &Config, db: &DatabaseConnection) -> Result<(), Error> {
    if !config.seed_demo_accounts {
        return Ok(());
    }

    let created = AuthService::new(db).seed_demo_accounts().await?;
    tracing::info!("Seeded {} demo accounts", created);

    Ok(())
}

/// Application router with request tracing and CORS for the browser client
pub fn build_router(state: AppState) -> Router {
    router::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind `0.0.0.0:SERVER_PORT` and serve until the process stops
pub async fn serve(config: &Config, router: Router) -> Result<(), Error> {
    let address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!("Listening on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}
