//! Evaluation scoring.
//!
//! Blends self and teacher scores into the weighted score and turns free-text comments
//! into scores through the external [`oracle::ScoringOracle`]. When the oracle is
//! disabled or fails, self-evaluations fall back to a deterministic heuristic over the
//! comment length and the three 1-5 ratings, and teacher comments fall back to a fixed
//! score.

pub mod oracle;

#[cfg(test)]
mod tests;

use self::oracle::ScoringOracle;

/// Lowest score the fallback heuristic awards
pub static FALLBACK_MIN_SCORE: f64 = 60.0;
/// Highest score the fallback heuristic awards
pub static FALLBACK_MAX_SCORE: f64 = 95.0;
/// Teacher score used when a comment cannot be scored by the oracle
pub static DEFAULT_TEACHER_SCORE: f64 = 75.0;

/// Self-reported ratings of a session, each 1-5
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratings {
    pub understanding: u8,
    pub difficulty: u8,
    pub satisfaction: u8,
}

/// Where a self-evaluation score came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreSource {
    Oracle,
    Fallback,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::Fallback => "fallback",
        }
    }
}

/// Blend of self and teacher scores, `None` until the teacher has graded
pub fn weighted_score(self_score: f64, teacher_score: Option<f64>, ratio: f64) -> Option<f64> {
    teacher_score.map(|teacher| self_score * (1.0 - ratio) + teacher * ratio)
}

/// Base component of the fallback score derived from the comment length in characters
///
/// Short comments score low, 50-200 characters score highest and very long comments
/// are mildly penalized as padding.
pub fn comment_base(comment: &str) -> f64 {
    match comment.chars().count() {
        0..=49 => 50.0,
        50..=200 => 75.0,
        201..=500 => 70.0,
        _ => 65.0,
    }
}

/// Deterministic self-evaluation score used when the oracle is unavailable
pub fn fallback_score(comment: &str, ratings: Ratings) -> f64 {
    let score = f64::from(ratings.understanding) * 20.0 * 0.3
        + f64::from(ratings.difficulty) * 20.0 * 0.1
        + f64::from(ratings.satisfaction) * 20.0 * 0.1
        + comment_base(comment) * 0.5;

    score.clamp(FALLBACK_MIN_SCORE, FALLBACK_MAX_SCORE)
}

pub struct ScoringService<'a> {
    oracle: &'a ScoringOracle,
}

impl<'a> ScoringService<'a> {
    /// Creates a new instance of [`ScoringService`]
    pub fn new(oracle: &'a ScoringOracle) -> Self {
        Self { oracle }
    }

    /// Scores a self-evaluation, never failing
    ///
    /// # Arguments
    /// - `course_name` - Course the session belongs to, given to the oracle as context
    /// - `comment` - Employee's free-text learning summary
    /// - `ratings` - Normalized 1-5 ratings
    ///
    /// # Returns
    /// The score in 0-100 and whether it came from the oracle or the fallback heuristic.
    pub async fn score_self_evaluation(
        &self,
        course_name: &str,
        comment: &str,
        ratings: Ratings,
    ) -> (f64, ScoreSource) {
        match self
            .oracle
            .score_self_evaluation(course_name, comment, ratings)
            .await
        {
            Ok(score) => (score, ScoreSource::Oracle),
            Err(err) => {
                tracing::warn!(
                    "Scoring oracle unavailable for self-evaluation, using fallback: {}",
                    err
                );

                (fallback_score(comment, ratings), ScoreSource::Fallback)
            }
        }
    }

    /// Scores a teacher's comment, falling back to [`DEFAULT_TEACHER_SCORE`]
    pub async fn score_teacher_comment(&self, course_name: &str, comment: &str) -> f64 {
        match self.oracle.score_teacher_comment(course_name, comment).await {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!(
                    "Scoring oracle unavailable for teacher comment, using default score: {}",
                    err
                );

                DEFAULT_TEACHER_SCORE
            }
        }
    }
}
