//! Declarative test builder.
//!
//! `TestBuilder` queues tables and mock oracle endpoints, then creates them all in
//! `build()`. Database fixtures are inserted afterwards through `TestContext::people()`
//! and `TestContext::training()` since most tests need the returned models.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, setup::training_table_statements, TestContext};

/// Reply the mock scoring oracle should produce
enum OracleReply {
    /// 200 with a chat completion whose message content is the given text
    Content(String),
    /// Non-200 status with a plain body
    Status(usize),
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_training_tables: bool,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    oracle_endpoints: Vec<(OracleReply, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing queued.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_training_tables: false,
            mock_builders: Vec::new(),
            oracle_endpoints: Vec::new(),
        }
    }

    /// Add every training table (people, accounts, sessions, plans, courses,
    /// scheduled items, enrollments and evaluations).
    pub fn with_training_tables(mut self) -> Self {
        self.include_training_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use trainhub_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), trainhub_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Person)
    ///     .with_table(Course)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Mock oracle endpoint answering with a chat completion carrying `content`.
    ///
    /// # Arguments
    /// - `content` - Message content the oracle returns (e.g. `"88"`)
    /// - `expected_requests` - Number of times the endpoint should be called
    pub fn with_oracle_endpoint(mut self, content: impl Into<String>, expected_requests: usize) -> Self {
        self.oracle_endpoints
            .push((OracleReply::Content(content.into()), expected_requests));
        self
    }

    /// Mock oracle endpoint failing with the given HTTP status.
    pub fn with_oracle_error_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.oracle_endpoints
            .push((OracleReply::Status(status), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context.
    ///
    /// Creates tables first (training tables, then custom tables), then the
    /// mock endpoints (custom endpoints first so sequential matching works).
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_training_tables {
            all_tables.extend(training_table_statements());
        }
        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (reply, expected) in self.oracle_endpoints {
            let mock = match reply {
                OracleReply::Content(content) => {
                    setup.oracle().create_completion_endpoint(&content, expected)
                }
                OracleReply::Status(status) => {
                    setup.oracle().create_error_endpoint(status, expected)
                }
            };
            mocks.push(mock);
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
