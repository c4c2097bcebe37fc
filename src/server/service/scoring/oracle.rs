//! Client for the chat-completion API used as a scoring oracle.
//!
//! The oracle receives a rubric prompt and must reply with a bare integer between 0
//! and 100. Transport errors, non-success statuses and replies that are not a number
//! all surface as [`OracleError`] so callers can fall back.

use serde::{Deserialize, Serialize};

use crate::server::{error::oracle::OracleError, service::scoring::Ratings};

static SYSTEM_PROMPT: &str = "You are a professional training evaluation expert who assesses \
how well a learner has mastered course content.";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Handle to the scoring oracle, cheap to clone
#[derive(Clone)]
pub struct ScoringOracle {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: String,
}

impl ScoringOracle {
    /// Creates a new instance of [`ScoringOracle`]
    ///
    /// The request timeout is whatever `client` was built with. Without an `api_key`
    /// every call fails with [`OracleError::Disabled`] without touching the network.
    pub fn new(
        client: reqwest::Client,
        url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
        }
    }

    /// Oracle that always fails, leaving every score to the fallbacks
    pub fn disabled() -> Self {
        Self::new(reqwest::Client::new(), String::new(), None, String::new())
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn score_self_evaluation(
        &self,
        course_name: &str,
        comment: &str,
        ratings: Ratings,
    ) -> Result<f64, OracleError> {
        let prompt = format!(
            "Assess how well the learner mastered the course \"{course_name}\" based on their \
self-evaluation and give a score from 0 to 100.

Rubric:
- 90-100: deep understanding, can generalize and offers original insight
- 80-89: solid grasp of the key points and can apply them
- 70-79: covers the basics with good understanding
- 60-69: knows the outline of the course but understanding is shallow
- below 60: has not grasped the core content

Self-evaluation:
{comment}

Self-reported ratings:
- Understanding: {}/5
- Difficulty: {}/5
- Satisfaction: {}/5

Return only an integer 0-100 with no other text, symbols or explanation.",
            ratings.understanding, ratings.difficulty, ratings.satisfaction
        );

        self.complete(&prompt).await
    }

    pub async fn score_teacher_comment(
        &self,
        course_name: &str,
        comment: &str,
    ) -> Result<f64, OracleError> {
        let prompt = format!(
            "Score the learner's performance in the course \"{course_name}\" from 0 to 100 based \
on the teacher's comment.

Rubric:
- 90-100: excellent, actively engaged and fully proficient
- 80-89: good, studied diligently and mastered most content
- 70-79: satisfactory, covers the core content
- 60-69: fair, needs more practice
- below 60: poor, has not grasped the core content

Teacher's comment:
{comment}

Return only an integer 0-100 with no other text, symbols or explanation."
        );

        self.complete(&prompt).await
    }

    async fn complete(&self, prompt: &str) -> Result<f64, OracleError> {
        let api_key = self.api_key.as_deref().ok_or(OracleError::Disabled)?;

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            stream: false,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(OracleError::EmptyReply)?;

        parse_score(&content)
    }
}

/// Parses the oracle's reply into a score clamped to 0-100
///
/// Surrounding whitespace, trailing periods and a trailing `分` unit are tolerated.
pub fn parse_score(content: &str) -> Result<f64, OracleError> {
    let trimmed = content
        .trim()
        .trim_matches(|c: char| c == '分' || c == '.')
        .trim();

    let score: f64 = trimmed
        .parse()
        .map_err(|_| OracleError::Unparseable(content.to_string()))?;

    if !score.is_finite() {
        return Err(OracleError::Unparseable(content.to_string()));
    }

    Ok(score.clamp(0.0, 100.0))
}
