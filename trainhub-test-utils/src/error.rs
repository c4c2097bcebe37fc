use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Test setup failed: {0}")]
    Setup(String),
    /// Error returned by the code under test, rendered to text
    #[error("{0}")]
    Service(String),
}
