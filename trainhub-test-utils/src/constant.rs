//! Constants shared by the test harness.
//!
//! Placeholder values for the scoring oracle client; none of them are real credentials.

/// Bearer key sent to the mock scoring oracle.
pub static TEST_ORACLE_API_KEY: &str = "test_oracle_api_key";

/// Model name sent to the mock scoring oracle.
pub static TEST_ORACLE_MODEL: &str = "test-chat";

/// Path the mock scoring oracle listens on.
pub static TEST_ORACLE_PATH: &str = "/chat/completions";

/// Plain-text password used by account fixtures created through the auth service.
pub static TEST_PASSWORD: &str = "secret123";
