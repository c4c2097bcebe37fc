use sea_orm::DatabaseConnection;

use crate::server::service::scoring::oracle::ScoringOracle;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub oracle: ScoringOracle,
    /// Lifetime of a login session
    pub session_ttl_hours: i64,
}
