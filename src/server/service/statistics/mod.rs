//! Read-only rollups over evaluations and the schedule.
//!
//! The functions here are pure and decide what an evaluation contributes: a session is
//! *completed* once its self score exists and *graded* once its teacher score exists.
//! Personal views score completed sessions with the weighted score when graded and the
//! self score otherwise. Teacher and planner views only count graded rows. Every
//! aggregate returns zeros for empty input.
//!
//! [`records`] loads the rows these functions consume and [`overview`] builds the
//! per-role counters shown on the account and home pages.

pub mod overview;
pub mod records;

#[cfg(test)]
mod tests;

use entity::attendance_evaluation::Model as Evaluation;

use crate::{model::teacher::ScoreDistributionDto, server::service::scoring::weighted_score};

/// Score at or above which a student passes
pub static PASS_SCORE: f64 = 60.0;
/// Score at or above which a student is excellent
pub static EXCELLENT_SCORE: f64 = 85.0;

pub fn is_completed(evaluation: &Evaluation) -> bool {
    evaluation.self_score.is_some()
}

pub fn is_graded(evaluation: &Evaluation) -> bool {
    evaluation.teacher_score.is_some()
}

/// Weighted score of a graded evaluation, `None` until both scores exist
pub fn graded_score(evaluation: &Evaluation) -> Option<f64> {
    weighted_score(
        evaluation.self_score?,
        evaluation.teacher_score,
        evaluation.score_ratio,
    )
}

/// Score shown to the employee: weighted when graded, the self score otherwise
pub fn personal_score(evaluation: &Evaluation) -> Option<f64> {
    graded_score(evaluation).or(evaluation.self_score)
}

/// Count, mean and extremes of a set of scores
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreSummary {
    pub count: u64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
}

impl ScoreSummary {
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        let mut summary = Self::default();
        let mut total = 0.0;

        for score in scores {
            if summary.count == 0 {
                summary.max = score;
                summary.min = score;
            } else {
                summary.max = summary.max.max(score);
                summary.min = summary.min.min(score);
            }
            summary.count += 1;
            total += score;
        }

        if summary.count > 0 {
            summary.average = round2(total / summary.count as f64);
        }

        summary
    }
}

/// Rounds to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `part / whole` as a percentage, 0 when `whole` is 0
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }

    round2(part as f64 / whole as f64 * 100.0)
}

pub fn distribution(scores: &[f64]) -> ScoreDistributionDto {
    let mut buckets = ScoreDistributionDto::default();

    for &score in scores {
        if score < 60.0 {
            buckets.below_60 += 1;
        } else if score < 70.0 {
            buckets.from_60 += 1;
        } else if score < 80.0 {
            buckets.from_70 += 1;
        } else if score < 90.0 {
            buckets.from_80 += 1;
        } else {
            buckets.from_90 += 1;
        }
    }

    buckets
}

/// Direction of the last two scores in chronological order
pub fn trend(scores: &[f64]) -> &'static str {
    match scores {
        [.., previous, latest] if latest > previous => "up",
        [.., previous, latest] if latest < previous => "down",
        _ => "stable",
    }
}
