//! Test context structure and utilities.
//!
//! `TestContext` is returned by `TestBuilder::build` and owns an in-memory SQLite
//! database plus a mockito server that stands in for the scoring oracle.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_ORACLE_PATH, error::TestError};

/// Test environment handed to each test
///
/// ```ignore
/// let test = TestBuilder::new().with_training_tables().build().await?;
///
/// let teacher = test.people().insert_teacher("Teacher Tan").await?;
/// let course = test.training().insert_course(teacher.person_id, "Technical").await?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for the scoring oracle
    pub(crate) server: ServerGuard,
    /// Mock endpoints kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a context with an empty in-memory database and an idle mock server.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context without tables
    /// - `Err(TestError::DbErr)` - Connecting to SQLite failed
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Full URL of the mock scoring oracle endpoint
    pub fn oracle_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_ORACLE_PATH)
    }

    /// Execute CREATE TABLE statements in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert every mock endpoint was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
