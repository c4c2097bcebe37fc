//! Mock scoring oracle endpoints.

use mockito::Mock;

use crate::{
    constant::{TEST_ORACLE_API_KEY, TEST_ORACLE_PATH},
    fixtures::factory::completion_body,
    TestContext,
};

impl TestContext {
    pub fn oracle<'a>(&'a mut self) -> OracleFixtures<'a> {
        OracleFixtures { setup: self }
    }
}

pub struct OracleFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> OracleFixtures<'a> {
    /// Mock POST endpoint answering with a chat completion whose content is `content`.
    ///
    /// Requests must carry the test bearer key.
    pub fn create_completion_endpoint(&mut self, content: &str, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_ORACLE_PATH)
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_ORACLE_API_KEY).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(content).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock POST endpoint failing with `status`.
    pub fn create_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_ORACLE_PATH)
            .with_status(status)
            .with_body("upstream unavailable")
            .expect(expected_requests)
            .create()
    }
}
