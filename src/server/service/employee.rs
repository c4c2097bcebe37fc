//! Employee views: schedule, pending self-evaluations, scores and learning progress.
//!
//! Sessions reach an employee through plan membership. Only sessions that have ended by
//! local time can be evaluated, so every view except the schedule is limited to them.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::{
    model::employee::{
        CourseTypeScoreDto, CourseTypeScoresDto, DateRangeQuery, EmployeePendingDto,
        EmployeePendingItemDto, EmployeePendingQuery, EmployeeScheduleDayDto, EmployeeScheduleDto,
        EmployeeScoresDto, EmployeeScoresQuery, EmployeeSessionDto, LearningProgressDto,
        OverallProgressDto, PlanProgressDto, RadarDataDto, RadarIndicatorDto, RecentCourseDto,
        ScoreRowDto, ScoreSummaryDto,
    },
    server::{
        data::{
            course_item::{ItemFilter, SessionRecord},
            person::PersonRepository,
            training_plan::TrainingPlanRepository,
        },
        error::{request::RequestError, Error},
        service::statistics::{
            graded_score, is_completed, is_graded, percentage, personal_score,
            records::EmployeeRecords, ScoreSummary,
        },
        util::{
            enums::plan_status_name,
            time::{class_ended, days_between, local_now, parse_date_range, parse_optional_date},
        },
    },
};

/// Sessions listed in the learning progress view
pub static RECENT_SESSION_LIMIT: usize = 5;
/// Upper bound of every radar axis
pub static RADAR_MAX: u32 = 100;

pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new instance of [`EmployeeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sessions between two dates grouped per calendar day, days without sessions included
    pub async fn schedule(
        &self,
        person_id: i32,
        query: DateRangeQuery,
    ) -> Result<EmployeeScheduleDto, Error> {
        let (start, end) = parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())?;

        let records = EmployeeRecords::load(
            self.db,
            person_id,
            ItemFilter {
                from: Some(start),
                to: Some(end),
                ..Default::default()
            },
        )
        .await?;

        let mut by_day: BTreeMap<NaiveDate, Vec<EmployeeSessionDto>> = BTreeMap::new();
        for session in &records.sessions {
            let has_evaluated = records
                .evaluation(session.item.item_id)
                .is_some_and(is_completed);

            by_day
                .entry(session.item.class_date)
                .or_default()
                .push(EmployeeSessionDto {
                    item_id: session.item.item_id,
                    course_id: session.course.course_id,
                    course_name: session.course.course_name.clone(),
                    course_desc: session.course.course_desc.clone(),
                    course_class: session.course.course_class.clone(),
                    class_begin_time: session.item.class_begin_time,
                    class_end_time: session.item.class_end_time,
                    location: session.item.location.clone(),
                    plan_id: session.plan.plan_id,
                    plan_name: session.plan.plan_name.clone(),
                    teacher_id: session.course.teacher_id,
                    teacher_name: session.teacher_name.clone(),
                    has_evaluated,
                });
        }

        let courses = days_between(start, end)
            .into_iter()
            .map(|date| {
                let courses = by_day.remove(&date).unwrap_or_default();
                EmployeeScheduleDayDto {
                    date,
                    course_count: courses.len() as u64,
                    courses,
                }
            })
            .collect();

        Ok(EmployeeScheduleDto {
            start_date: start,
            end_date: end,
            total_courses: records.sessions.len() as u64,
            courses,
        })
    }

    /// Ended sessions awaiting a self-evaluation, newest first
    ///
    /// With `status=all` evaluated sessions are listed too. `limit` of 0 or absent means
    /// no limit; `totalCount` and `pendingCount` always cover every matching session.
    pub async fn pending_evaluations(
        &self,
        person_id: i32,
        query: EmployeePendingQuery,
    ) -> Result<EmployeePendingDto, Error> {
        let include_evaluated = match query.status.as_deref().map(str::trim) {
            None | Some("") | Some("pending") => false,
            Some("all") => true,
            Some(other) => {
                return Err(RequestError::Validation(format!(
                    "Invalid status '{}', expected pending or all",
                    other
                ))
                .into())
            }
        };

        let records = self.ended_sessions(person_id, ItemFilter::default()).await?;

        let mut courses = Vec::new();
        let mut pending_count = 0;
        for session in &records.sessions {
            let evaluated = records
                .evaluation(session.item.item_id)
                .is_some_and(is_completed);
            if !evaluated {
                pending_count += 1;
            }
            if evaluated && !include_evaluated {
                continue;
            }

            courses.push(EmployeePendingItemDto {
                item_id: session.item.item_id,
                course_id: session.course.course_id,
                course_name: session.course.course_name.clone(),
                course_desc: session.course.course_desc.clone(),
                course_class: session.course.course_class.clone(),
                class_date: session.item.class_date,
                class_begin_time: session.item.class_begin_time,
                class_end_time: session.item.class_end_time,
                location: session.item.location.clone(),
                plan_id: session.plan.plan_id,
                plan_name: session.plan.plan_name.clone(),
                teacher_id: session.course.teacher_id,
                teacher_name: session.teacher_name.clone(),
                evaluation_status: if evaluated { "evaluated" } else { "pending" }.to_string(),
            });
        }

        let total_count = courses.len() as u64;
        if let Some(limit) = query.limit.filter(|l| *l > 0) {
            courses.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(EmployeePendingDto {
            total_count,
            pending_count,
            courses,
        })
    }

    /// Score rows of ended sessions, newest first, with a summary over the rows
    pub async fn scores(
        &self,
        person_id: i32,
        query: EmployeeScoresQuery,
    ) -> Result<EmployeeScoresDto, Error> {
        let filter = ItemFilter {
            plan_ids: query.plan_id.map(|id| vec![id]),
            from: parse_optional_date("startDate", query.start_date.as_deref())?,
            to: parse_optional_date("endDate", query.end_date.as_deref())?,
            ..Default::default()
        };
        let course_class = query
            .course_class
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let mut records = self.ended_sessions(person_id, filter).await?;
        if let Some(class) = &course_class {
            records.sessions.retain(|s| &s.course.course_class == class);
        }

        let mut completed_courses = 0;
        let mut graded_courses = 0;
        let mut scores = Vec::new();
        let mut rows = Vec::with_capacity(records.sessions.len());

        for session in records.sessions.iter() {
            let evaluation = records.evaluation(session.item.item_id);

            if let Some(evaluation) = evaluation.filter(|e| is_completed(e)) {
                completed_courses += 1;
                if is_graded(evaluation) {
                    graded_courses += 1;
                }
                scores.extend(personal_score(evaluation));
            }

            rows.push(ScoreRowDto {
                item_id: session.item.item_id,
                course_id: session.course.course_id,
                course_name: session.course.course_name.clone(),
                course_desc: session.course.course_desc.clone(),
                course_class: session.course.course_class.clone(),
                class_date: session.item.class_date,
                class_begin_time: session.item.class_begin_time,
                class_end_time: session.item.class_end_time,
                location: session.item.location.clone(),
                plan_id: session.plan.plan_id,
                plan_name: session.plan.plan_name.clone(),
                teacher_id: session.course.teacher_id,
                teacher_name: session.teacher_name.clone(),
                self_score: evaluation.and_then(|e| e.self_score),
                self_comment: evaluation.map(|e| e.self_comment.clone()).unwrap_or_default(),
                teacher_score: evaluation.and_then(|e| e.teacher_score),
                teacher_comment: evaluation
                    .map(|e| e.teacher_comment.clone())
                    .unwrap_or_default(),
                score_ratio: evaluation.map(|e| e.score_ratio).unwrap_or_default(),
                weighted_score: evaluation.and_then(graded_score),
                has_teacher_score: evaluation.is_some_and(is_graded),
            });
        }

        let summary = ScoreSummary::from_scores(scores);
        let total_courses = rows.len() as u64;

        Ok(EmployeeScoresDto {
            statistics: ScoreSummaryDto {
                total_courses,
                completed_courses,
                pending_evaluation: total_courses - completed_courses,
                graded_courses,
                average_score: summary.average,
                max_score: summary.max,
                min_score: summary.min,
            },
            scores: rows,
        })
    }

    /// Scores per course class with radar chart data, best class first
    pub async fn course_type_scores(&self, person_id: i32) -> Result<CourseTypeScoresDto, Error> {
        let person = self.find_person(person_id).await?;
        let records = EmployeeRecords::load(self.db, person_id, ItemFilter::default()).await?;

        let mut by_class: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for session in &records.sessions {
            if let Some(score) = records
                .evaluation(session.item.item_id)
                .and_then(personal_score)
            {
                by_class
                    .entry(session.course.course_class.as_str())
                    .or_default()
                    .push(score);
            }
        }

        let mut course_type_scores: Vec<CourseTypeScoreDto> = by_class
            .into_iter()
            .map(|(class, scores)| {
                let summary = ScoreSummary::from_scores(scores);
                CourseTypeScoreDto {
                    course_class: class.to_string(),
                    course_count: summary.count,
                    average_score: summary.average,
                    max_score: summary.max,
                    min_score: summary.min,
                }
            })
            .collect();
        course_type_scores.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));

        let radar_data = RadarDataDto {
            indicators: course_type_scores
                .iter()
                .map(|s| RadarIndicatorDto {
                    name: s.course_class.clone(),
                    max: RADAR_MAX,
                })
                .collect(),
            values: course_type_scores.iter().map(|s| s.average_score).collect(),
        };

        Ok(CourseTypeScoresDto {
            person_id: person.person_id,
            person_name: person.name,
            course_type_scores,
            radar_data,
        })
    }

    /// Completion of ended sessions overall and per plan, plus the most recent sessions
    ///
    /// `completedCourses` counts self-evaluated sessions and `evaluatedCourses` counts the
    /// ones a teacher has graded.
    pub async fn learning_progress(&self, person_id: i32) -> Result<LearningProgressDto, Error> {
        let person = self.find_person(person_id).await?;
        let records = self.ended_sessions(person_id, ItemFilter::default()).await?;

        let overall = Progress::of(&records, records.sessions.iter());
        let evaluated_courses = records
            .sessions
            .iter()
            .filter(|s| records.evaluation(s.item.item_id).is_some_and(is_graded))
            .count() as u64;

        let mut plans = TrainingPlanRepository::new(self.db)
            .find_by_ids(&records.plan_ids)
            .await?;
        plans.sort_by(|a, b| b.plan_start_datetime.cmp(&a.plan_start_datetime));

        let plan_progress = plans
            .into_iter()
            .map(|plan| {
                let progress = Progress::of(
                    &records,
                    records
                        .sessions
                        .iter()
                        .filter(|s| s.plan.plan_id == plan.plan_id),
                );
                PlanProgressDto {
                    plan_id: plan.plan_id,
                    plan_name: plan.plan_name,
                    plan_status: plan_status_name(plan.plan_status).to_string(),
                    total_courses: progress.total,
                    completed_courses: progress.completed,
                    progress_percentage: percentage(progress.completed, progress.total),
                    average_score: progress.average,
                }
            })
            .collect();

        let recent_courses = records
            .sessions
            .iter()
            .take(RECENT_SESSION_LIMIT)
            .map(|s| RecentCourseDto {
                item_id: s.item.item_id,
                course_id: s.course.course_id,
                course_name: s.course.course_name.clone(),
                class_date: s.item.class_date,
                has_evaluated: records
                    .evaluation(s.item.item_id)
                    .is_some_and(is_completed),
            })
            .collect();

        Ok(LearningProgressDto {
            person_id: person.person_id,
            person_name: person.name,
            overall_progress: OverallProgressDto {
                total_plans: records.plan_ids.len() as u64,
                total_courses: overall.total,
                completed_courses: overall.completed,
                evaluated_courses,
                progress_percentage: percentage(overall.completed, overall.total),
                average_score: overall.average,
            },
            plan_progress,
            recent_courses,
        })
    }

    /// The employee's sessions matching `filter` that have ended, newest first
    async fn ended_sessions(
        &self,
        person_id: i32,
        filter: ItemFilter,
    ) -> Result<EmployeeRecords, Error> {
        let mut records = EmployeeRecords::load(
            self.db,
            person_id,
            ItemFilter {
                descending: true,
                ..filter
            },
        )
        .await?;

        let now = local_now();
        records.sessions.retain(|s| ended(s, now));

        Ok(records)
    }

    async fn find_person(&self, person_id: i32) -> Result<entity::person::Model, Error> {
        Ok(PersonRepository::new(self.db)
            .find_by_id(person_id)
            .await?
            .ok_or_else(|| RequestError::NotFound(format!("Person {} not found", person_id)))?)
    }
}

fn ended(session: &SessionRecord, now: NaiveDateTime) -> bool {
    class_ended(session.item.class_date, session.item.class_end_time, now)
}

/// Completion counters over a set of sessions
struct Progress {
    total: u64,
    completed: u64,
    average: f64,
}

impl Progress {
    fn of<'r>(records: &EmployeeRecords, sessions: impl Iterator<Item = &'r SessionRecord>) -> Self {
        let mut total = 0;
        let mut scores = Vec::new();

        for session in sessions {
            total += 1;
            if let Some(score) = records
                .evaluation(session.item.item_id)
                .and_then(personal_score)
            {
                scores.push(score);
            }
        }

        let summary = ScoreSummary::from_scores(scores);

        Self {
            total,
            completed: summary.count,
            average: summary.average,
        }
    }
}
