//! Evaluation writes: employee self-evaluations and teacher grading.
//!
//! The two writers own disjoint columns of the same row. A self-evaluation upserts the
//! self columns and a grading updates only the teacher columns, so neither can erase
//! the other's work when they race.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        employee::{EvaluationResultDto, SubmitEvaluationDto},
        teacher::{GradingResultDto, SubmitGradingDto},
    },
    server::{
        data::{
            course::CourseRepository,
            course_item::CourseItemRepository,
            evaluation::{EvaluationRepository, DEFAULT_SCORE_RATIO},
            person::PersonRepository,
            plan_employee::PlanEmployeeRepository,
        },
        error::{request::RequestError, Error},
        service::scoring::{oracle::ScoringOracle, weighted_score, Ratings, ScoringService},
        util::{
            time::{class_ended, format_datetime, local_now},
            validate,
        },
    },
};

/// Longest comment accepted from either writer
pub static MAX_COMMENT_LENGTH: usize = 1000;

pub struct EvaluationService<'a> {
    db: &'a DatabaseConnection,
    oracle: &'a ScoringOracle,
}

impl<'a> EvaluationService<'a> {
    /// Creates a new instance of [`EvaluationService`]
    pub fn new(db: &'a DatabaseConnection, oracle: &'a ScoringOracle) -> Self {
        Self { db, oracle }
    }

    /// Records an employee's self-evaluation of an ended session
    ///
    /// The score comes from the oracle and falls back to the heuristic without ever
    /// failing the request. Submitting again overwrites the previous self-evaluation.
    ///
    /// # Returns
    /// - `Ok(EvaluationResultDto)` - Stored self score along with any teacher grading
    /// - `Err(RequestError::Validation)` - Bad comment or ratings, or the session has not ended
    /// - `Err(RequestError::NotFound)` - Session or course does not exist
    /// - `Err(RequestError::Forbidden)` - Employee is not enrolled in the session's plan
    pub async fn submit_evaluation(
        &self,
        person_id: i32,
        payload: SubmitEvaluationDto,
    ) -> Result<EvaluationResultDto, Error> {
        let comment = validate::text("selfComment", &payload.self_comment, 1, MAX_COMMENT_LENGTH)?;
        let ratings = Ratings {
            understanding: validate::rating("understanding", payload.understanding)?,
            difficulty: validate::rating("difficulty", payload.difficulty)?,
            satisfaction: validate::rating("satisfaction", payload.satisfaction)?,
        };

        let item = CourseItemRepository::new(self.db)
            .find_by_id(payload.item_id)
            .await?
            .ok_or_else(|| {
                RequestError::NotFound(format!("Course session {} not found", payload.item_id))
            })?;

        if !PlanEmployeeRepository::new(self.db)
            .is_enrolled(item.plan_id, person_id)
            .await?
        {
            return Err(RequestError::Forbidden(
                "You are not enrolled in the training plan of this session".to_string(),
            )
            .into());
        }

        if !class_ended(item.class_date, item.class_end_time, local_now()) {
            return Err(RequestError::Validation(
                "The session has not ended yet and cannot be evaluated".to_string(),
            )
            .into());
        }

        let course = CourseRepository::new(self.db)
            .find_by_id(item.course_id)
            .await?
            .ok_or_else(|| {
                RequestError::NotFound(format!("Course {} not found", item.course_id))
            })?;

        let (self_score, source) = ScoringService::new(self.oracle)
            .score_self_evaluation(&course.course_name, &comment, ratings)
            .await;
        let self_score = validate::score("selfScore", self_score)?;

        let evaluation_repository = EvaluationRepository::new(self.db);
        evaluation_repository
            .upsert_self(person_id, item.item_id, self_score, &comment)
            .await?;

        let evaluation = evaluation_repository
            .find(person_id, item.item_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Evaluation of item {} by person {} missing right after upsert",
                    item.item_id, person_id
                ))
            })?;

        tracing::info!(
            "Person ID {} evaluated item ID {} with score {} ({})",
            person_id,
            item.item_id,
            self_score,
            source.as_str()
        );

        Ok(EvaluationResultDto {
            item_id: item.item_id,
            course_id: course.course_id,
            course_name: course.course_name,
            self_score,
            self_comment: evaluation.self_comment,
            teacher_score: evaluation.teacher_score,
            weighted_score: weighted_score(
                self_score,
                evaluation.teacher_score,
                evaluation.score_ratio,
            ),
            score_source: source.as_str().to_string(),
            evaluated_at: format_datetime(evaluation.updated_at),
        })
    }

    /// Records a teacher's grading of one employee's session
    ///
    /// Without an explicit score the comment is scored by the oracle, falling back to a
    /// fixed default. Only the teacher columns of the evaluation change.
    ///
    /// # Returns
    /// - `Ok(GradingResultDto)` - Stored grading with the resulting weighted score
    /// - `Err(RequestError::Validation)` - Out of range score or ratio, or neither score nor comment
    /// - `Err(RequestError::NotFound)` - Session, course or self-evaluation does not exist
    /// - `Err(RequestError::Forbidden)` - Course is taught by another teacher
    pub async fn submit_grading(
        &self,
        teacher_id: i32,
        payload: SubmitGradingDto,
    ) -> Result<GradingResultDto, Error> {
        let teacher_score = payload
            .teacher_score
            .map(|score| validate::score("teacherScore", score))
            .transpose()?;
        let score_ratio = validate::ratio(payload.score_ratio.unwrap_or(DEFAULT_SCORE_RATIO))?;
        let comment = validate::text(
            "teacherComment",
            payload.teacher_comment.as_deref().unwrap_or_default(),
            0,
            MAX_COMMENT_LENGTH,
        )?;

        if teacher_score.is_none() && comment.is_empty() {
            return Err(RequestError::Validation(
                "Either teacherScore or teacherComment is required".to_string(),
            )
            .into());
        }

        let item = CourseItemRepository::new(self.db)
            .find_by_id(payload.item_id)
            .await?
            .ok_or_else(|| {
                RequestError::NotFound(format!("Course session {} not found", payload.item_id))
            })?;
        let course = CourseRepository::new(self.db)
            .find_by_id(item.course_id)
            .await?
            .ok_or_else(|| {
                RequestError::NotFound(format!("Course {} not found", item.course_id))
            })?;

        if course.teacher_id != teacher_id {
            return Err(RequestError::Forbidden(
                "You can only grade sessions of your own courses".to_string(),
            )
            .into());
        }

        let evaluation_repository = EvaluationRepository::new(self.db);
        if evaluation_repository
            .find(payload.person_id, item.item_id)
            .await?
            .is_none()
        {
            return Err(RequestError::NotFound(
                "The employee has not submitted a self-evaluation for this session".to_string(),
            )
            .into());
        }

        let teacher_score = match teacher_score {
            Some(score) => score,
            None => {
                let score = ScoringService::new(self.oracle)
                    .score_teacher_comment(&course.course_name, &comment)
                    .await;
                validate::score("teacherScore", score)?
            }
        };

        let updated = evaluation_repository
            .update_teacher(
                payload.person_id,
                item.item_id,
                teacher_score,
                &comment,
                score_ratio,
            )
            .await?;
        let removed = || {
            RequestError::NotFound("The self-evaluation was removed while grading".to_string())
        };
        if updated == 0 {
            return Err(removed().into());
        }

        // the employee may have resubmitted since the first read
        let stored = evaluation_repository
            .find(payload.person_id, item.item_id)
            .await?
            .ok_or_else(removed)?;

        let person_name = PersonRepository::new(self.db)
            .find_by_id(payload.person_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_default();

        tracing::info!(
            "Teacher ID {} graded person ID {} on item ID {} with {}",
            teacher_id,
            payload.person_id,
            item.item_id,
            teacher_score
        );

        Ok(GradingResultDto {
            item_id: item.item_id,
            person_id: payload.person_id,
            person_name,
            self_score: stored.self_score,
            teacher_score,
            score_ratio: stored.score_ratio,
            weighted_score: stored
                .self_score
                .and_then(|s| weighted_score(s, stored.teacher_score, stored.score_ratio)),
            teacher_comment: stored.teacher_comment,
        })
    }
}
