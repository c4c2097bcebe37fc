//! Teacher views: schedule, grading queue, per-course and teaching statistics.
//!
//! Scores shown to teachers are weighted scores of graded evaluations only. Student
//! counts of a session are the employees enrolled in its plan.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        employee::DateRangeQuery,
        teacher::{
            ClassStatDto, CourseClassShareDto, CourseScoreStatsDto, CourseStatisticsDto,
            CourseStatisticsQuery, PendingSessionDto, PeriodDto, RecentClassDto,
            StudentEvaluationDto, StudentTrendDto, TeacherPendingDto, TeacherPendingQuery,
            TeacherScheduleDayDto, TeacherScheduleDto, TeacherSessionDto, TeachingStatisticsDto,
            TeachingSummaryDto,
        },
    },
    server::{
        data::{
            course::CourseRepository,
            course_item::{unique, ItemFilter},
            person::PersonRepository,
        },
        error::{request::RequestError, Error},
        service::statistics::{
            distribution, graded_score, is_completed, is_graded, percentage, records::TeacherRecords,
            round2, trend, ScoreSummary, EXCELLENT_SCORE, PASS_SCORE,
        },
        util::time::{
            class_ended, day_of_week, days_between, duration_hours, format_datetime, local_now,
            parse_date_range, parse_optional_date, start_of_year,
        },
    },
};

/// Sessions listed under recent classes
pub static RECENT_CLASS_LIMIT: usize = 5;

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    /// Creates a new instance of [`TeacherService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The teacher's sessions between two dates, one entry per calendar day
    pub async fn schedule(
        &self,
        teacher_id: i32,
        query: DateRangeQuery,
    ) -> Result<TeacherScheduleDto, Error> {
        let (start, end) = parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())?;

        let records = TeacherRecords::load(
            self.db,
            teacher_id,
            ItemFilter {
                from: Some(start),
                to: Some(end),
                ..Default::default()
            },
        )
        .await?;

        let mut by_day: BTreeMap<NaiveDate, Vec<TeacherSessionDto>> = BTreeMap::new();
        for session in &records.sessions {
            let evaluated_count = records
                .evaluations(session.item.item_id)
                .iter()
                .filter(|e| is_graded(e))
                .count() as u64;

            by_day
                .entry(session.item.class_date)
                .or_default()
                .push(TeacherSessionDto {
                    item_id: session.item.item_id,
                    course_id: session.course.course_id,
                    course_name: session.course.course_name.clone(),
                    course_desc: session.course.course_desc.clone(),
                    course_require: session.course.course_require.clone(),
                    course_class: session.course.course_class.clone(),
                    class_begin_time: session.item.class_begin_time,
                    class_end_time: session.item.class_end_time,
                    location: session.item.location.clone(),
                    plan_id: session.plan.plan_id,
                    plan_name: session.plan.plan_name.clone(),
                    student_count: records.student_count(session.plan.plan_id),
                    evaluated_count,
                });
        }

        let schedule = days_between(start, end)
            .into_iter()
            .map(|date| TeacherScheduleDayDto {
                date,
                day_of_week: day_of_week(date).to_string(),
                courses: by_day.remove(&date).unwrap_or_default(),
            })
            .collect();

        Ok(TeacherScheduleDto {
            start_date: start,
            end_date: end,
            total_courses: records.sessions.len() as u64,
            schedule,
        })
    }

    /// Ended sessions with the students' self-evaluations, newest first
    ///
    /// `status=pending` (default) lists only self-evaluations not graded yet; `all` lists
    /// every self-evaluation. Sessions without a listed student are omitted.
    pub async fn pending_evaluations(
        &self,
        teacher_id: i32,
        query: TeacherPendingQuery,
    ) -> Result<TeacherPendingDto, Error> {
        let include_graded = match query.status.as_deref().map(str::trim) {
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

        let records = TeacherRecords::load(
            self.db,
            teacher_id,
            ItemFilter {
                course_ids: query.course_id.map(|id| vec![id]),
                descending: true,
                ..Default::default()
            },
        )
        .await?;

        let person_ids = unique(records.all_evaluations().map(|e| e.person_id));
        let names: HashMap<i32, String> = PersonRepository::new(self.db)
            .find_by_ids(&person_ids)
            .await?
            .into_iter()
            .map(|p| (p.person_id, p.name))
            .collect();

        let now = local_now();
        let mut pending_count = 0;
        let mut course_items = Vec::new();

        for session in &records.sessions {
            if !class_ended(session.item.class_date, session.item.class_end_time, now) {
                continue;
            }

            let students: Vec<StudentEvaluationDto> = records
                .evaluations(session.item.item_id)
                .iter()
                .filter(|e| is_completed(e) && (include_graded || !is_graded(e)))
                .map(|e| {
                    let graded = is_graded(e);
                    if !graded {
                        pending_count += 1;
                    }

                    StudentEvaluationDto {
                        person_id: e.person_id,
                        person_name: names.get(&e.person_id).cloned().unwrap_or_default(),
                        self_score: e.self_score,
                        self_comment: e.self_comment.clone(),
                        teacher_score: e.teacher_score,
                        teacher_comment: e.teacher_comment.clone(),
                        score_ratio: e.score_ratio,
                        evaluated_at: Some(format_datetime(e.updated_at)),
                        status: if graded { "evaluated" } else { "pending" }.to_string(),
                    }
                })
                .collect();

            if students.is_empty() {
                continue;
            }

            course_items.push(PendingSessionDto {
                item_id: session.item.item_id,
                course_id: session.course.course_id,
                course_name: session.course.course_name.clone(),
                course_class: session.course.course_class.clone(),
                class_date: session.item.class_date,
                class_begin_time: session.item.class_begin_time,
                class_end_time: session.item.class_end_time,
                location: session.item.location.clone(),
                plan_name: session.plan.plan_name.clone(),
                students,
            });
        }

        Ok(TeacherPendingDto {
            total_count: course_items.len() as u64,
            pending_count,
            course_items,
        })
    }

    /// Graded score statistics of one of the teacher's courses
    ///
    /// # Returns
    /// - `Ok(CourseStatisticsDto)` - Overall, per-session and per-student statistics
    /// - `Err(RequestError::Validation)` - `courseId` missing
    /// - `Err(RequestError::NotFound)` - Course does not exist
    /// - `Err(RequestError::Forbidden)` - Course is taught by another teacher
    pub async fn course_statistics(
        &self,
        teacher_id: i32,
        query: CourseStatisticsQuery,
    ) -> Result<CourseStatisticsDto, Error> {
        let course_id = query
            .course_id
            .ok_or_else(|| RequestError::Validation("courseId is required".to_string()))?;

        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| RequestError::NotFound(format!("Course {} not found", course_id)))?;
        if course.teacher_id != teacher_id {
            return Err(RequestError::Forbidden(
                "You can only view statistics of your own courses".to_string(),
            )
            .into());
        }

        let records = TeacherRecords::load(
            self.db,
            teacher_id,
            ItemFilter {
                course_ids: Some(vec![course_id]),
                ..Default::default()
            },
        )
        .await?;

        let mut all_scores = Vec::new();
        let mut by_student: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        let mut class_stat = Vec::with_capacity(records.sessions.len());

        // sessions are in chronological order, so each student's scores are too
        for session in &records.sessions {
            let scores: Vec<(i32, f64)> = records
                .evaluations(session.item.item_id)
                .iter()
                .filter_map(|e| Some((e.person_id, graded_score(e)?)))
                .collect();

            for &(person_id, score) in &scores {
                all_scores.push(score);
                by_student.entry(person_id).or_default().push(score);
            }

            class_stat.push(ClassStatDto {
                item_id: session.item.item_id,
                class_date: session.item.class_date,
                location: session.item.location.clone(),
                student_count: records.student_count(session.plan.plan_id),
                evaluated_count: scores.len() as u64,
                average_score: ScoreSummary::from_scores(scores.iter().map(|(_, s)| *s)).average,
            });
        }

        let student_ids: Vec<i32> = by_student.keys().copied().collect();
        let names: HashMap<i32, String> = PersonRepository::new(self.db)
            .find_by_ids(&student_ids)
            .await?
            .into_iter()
            .map(|p| (p.person_id, p.name))
            .collect();

        let student_scores = by_student
            .iter()
            .map(|(person_id, scores)| StudentTrendDto {
                person_id: *person_id,
                person_name: names.get(person_id).cloned().unwrap_or_default(),
                class_count: scores.len() as u64,
                average_score: ScoreSummary::from_scores(scores.iter().copied()).average,
                latest_score: scores.last().copied().unwrap_or_default(),
                trend: trend(scores).to_string(),
            })
            .collect();

        let summary = ScoreSummary::from_scores(all_scores.iter().copied());
        let pass_count = all_scores.iter().filter(|s| **s >= PASS_SCORE).count() as u64;
        let excellent_count = all_scores.iter().filter(|s| **s >= EXCELLENT_SCORE).count() as u64;

        let teacher_name = PersonRepository::new(self.db)
            .find_by_id(teacher_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_default();

        Ok(CourseStatisticsDto {
            course_id: course.course_id,
            course_name: course.course_name,
            course_class: course.course_class,
            teacher_name,
            statistics: CourseScoreStatsDto {
                total_classes: records.sessions.len() as u64,
                total_students: by_student.len() as u64,
                average_score: summary.average,
                max_score: summary.max,
                min_score: summary.min,
                pass_rate: percentage(pass_count, summary.count),
                excellent_rate: percentage(excellent_count, summary.count),
                score_distribution: distribution(&all_scores),
            },
            class_stat,
            student_scores,
        })
    }

    /// Teaching activity between two dates, defaulting to the current year so far
    pub async fn teaching_statistics(
        &self,
        teacher_id: i32,
        query: DateRangeQuery,
    ) -> Result<TeachingStatisticsDto, Error> {
        let today = local_now().date();
        let start = parse_optional_date("startDate", query.start_date.as_deref())?
            .unwrap_or_else(|| start_of_year(today));
        let end = parse_optional_date("endDate", query.end_date.as_deref())?.unwrap_or(today);
        if start > end {
            return Err(RequestError::Validation(
                "startDate must not be after endDate".to_string(),
            )
            .into());
        }

        let teacher = PersonRepository::new(self.db)
            .find_by_id(teacher_id)
            .await?
            .ok_or_else(|| RequestError::NotFound(format!("Teacher {} not found", teacher_id)))?;

        let records = TeacherRecords::load(
            self.db,
            teacher_id,
            ItemFilter {
                from: Some(start),
                to: Some(end),
                descending: true,
                ..Default::default()
            },
        )
        .await?;

        let total_hours = round2(
            records
                .sessions
                .iter()
                .map(|s| duration_hours(s.item.class_begin_time, s.item.class_end_time))
                .sum::<f64>(),
        );

        let mut students = HashSet::new();
        let mut evaluation_count = 0;
        let mut graded = Vec::new();
        let mut class_scores: HashMap<&str, Vec<f64>> = HashMap::new();

        for session in &records.sessions {
            for evaluation in records.evaluations(session.item.item_id) {
                students.insert(evaluation.person_id);
                evaluation_count += 1;

                if let Some(score) = graded_score(evaluation) {
                    graded.push(score);
                    class_scores
                        .entry(session.course.course_class.as_str())
                        .or_default()
                        .push(score);
                }
            }
        }

        let mut class_courses: BTreeMap<&str, u64> = BTreeMap::new();
        for course in &records.courses {
            *class_courses.entry(course.course_class.as_str()).or_default() += 1;
        }
        let course_type_distribution = class_courses
            .into_iter()
            .map(|(class, course_count)| CourseClassShareDto {
                course_class: class.to_string(),
                course_count,
                average_score: class_scores
                    .get(class)
                    .map(|s| ScoreSummary::from_scores(s.iter().copied()).average)
                    .unwrap_or(0.0),
            })
            .collect();

        let recent_classes = records
            .sessions
            .iter()
            .take(RECENT_CLASS_LIMIT)
            .map(|s| {
                let scores: Vec<f64> = records
                    .evaluations(s.item.item_id)
                    .iter()
                    .filter_map(graded_score)
                    .collect();

                RecentClassDto {
                    item_id: s.item.item_id,
                    course_id: s.course.course_id,
                    course_name: s.course.course_name.clone(),
                    class_date: s.item.class_date,
                    student_count: records.student_count(s.plan.plan_id),
                    evaluated_count: scores.len() as u64,
                    average_score: ScoreSummary::from_scores(scores).average,
                }
            })
            .collect();

        let graded_count = graded.len() as u64;

        Ok(TeachingStatisticsDto {
            teacher_id: teacher.person_id,
            teacher_name: teacher.name,
            period: PeriodDto {
                start_date: start,
                end_date: end,
            },
            statistics: TeachingSummaryDto {
                course_count: records.courses.len() as u64,
                class_count: records.sessions.len() as u64,
                student_count: students.len() as u64,
                total_hours,
                average_teaching_score: ScoreSummary::from_scores(graded).average,
                evaluation_rate: percentage(graded_count, evaluation_count),
                course_type_distribution,
            },
            recent_classes,
        })
    }
}

#[cfg(test)]
mod tests {
    use entity::sea_orm_active_enums::PlanStatus;
    use trainhub_test_utils::{
        model::{CourseModel, PersonModel, PlanModel},
        prelude::*,
    };

    use super::*;

    /// Teacher "Tom" with a course in a plan two employees are enrolled in
    struct Classroom {
        teacher: PersonModel,
        emma: PersonModel,
        omar: PersonModel,
        plan: PlanModel,
        course: CourseModel,
    }

    async fn classroom(test: &TestContext) -> Result<Classroom, TestError> {
        let planner = test.people().insert_planner("Paula").await?;
        let teacher = test.people().insert_teacher("Tom").await?;
        let emma = test.people().insert_employee("Emma").await?;
        let omar = test.people().insert_employee("Omar").await?;
        let plan = test
            .training()
            .insert_plan(planner.person_id, "Onboarding", PlanStatus::InProgress)
            .await?;
        let course = test
            .training()
            .insert_course(teacher.person_id, "Rust Basics", "Technical")
            .await?;
        test.training().enroll(plan.plan_id, emma.person_id).await?;
        test.training().enroll(plan.plan_id, omar.person_id).await?;

        Ok(Classroom {
            teacher,
            emma,
            omar,
            plan,
            course,
        })
    }

    fn iso(date: NaiveDate) -> Option<String> {
        Some(date.format("%Y-%m-%d").to_string())
    }

    /// Expect one entry per day with enrolled and graded counts on the session
    #[tokio::test]
    async fn schedule_lists_every_day() -> Result<(), TestError> {
        let test = test_setup_with_training_tables!()?;
        let c = classroom(&test).await?;
        let item = test
            .training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::date(2024, 1, 15),
                factory::time(14, 0),
                factory::time(16, 0),
            )
            .await?;
        test.training()
            .insert_evaluation(c.emma.person_id, item.item_id, Some(80.0), Some(90.0), 0.5)
            .await?;
        test.training()
            .insert_evaluation(c.omar.person_id, item.item_id, Some(70.0), None, 0.5)
            .await?;
        let service = TeacherService::new(&test.db);

        let schedule = service
            .schedule(
                c.teacher.person_id,
                DateRangeQuery {
                    start_date: Some("2024-01-15".to_string()),
                    end_date: Some("2024-01-17".to_string()),
                },
            )
            .await?;

        assert_eq!(schedule.total_courses, 1);
        assert_eq!(schedule.schedule.len(), 3);
        assert_eq!(schedule.schedule[0].day_of_week, "Monday");
        assert_eq!(schedule.schedule[0].courses[0].student_count, 2);
        assert_eq!(schedule.schedule[0].courses[0].evaluated_count, 1);
        assert!(schedule.schedule[1].courses.is_empty());

        let inverted = service
            .schedule(
                c.teacher.person_id,
                DateRangeQuery {
                    start_date: Some("2024-01-17".to_string()),
                    end_date: Some("2024-01-15".to_string()),
                },
            )
            .await;
        assert!(matches!(
            inverted,
            Err(Error::RequestError(RequestError::Validation(_)))
        ));

        Ok(())
    }

    /// Expect only ungraded self-evaluations by default and all of them with status=all
    #[tokio::test]
    async fn pending_lists_ungraded_students() -> Result<(), TestError> {
        let test = test_setup_with_training_tables!()?;
        let c = classroom(&test).await?;
        let ended = test
            .training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ago(1),
                factory::time(9, 0),
                factory::time(10, 0),
            )
            .await?;
        test.training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ahead(1),
                factory::time(9, 0),
                factory::time(10, 0),
            )
            .await?;
        test.training()
            .insert_evaluation(c.emma.person_id, ended.item_id, Some(72.0), None, 0.5)
            .await?;
        test.training()
            .insert_evaluation(c.omar.person_id, ended.item_id, Some(64.0), Some(80.0), 0.5)
            .await?;
        let service = TeacherService::new(&test.db);

        let pending = service
            .pending_evaluations(c.teacher.person_id, TeacherPendingQuery::default())
            .await?;
        assert_eq!(pending.total_count, 1);
        assert_eq!(pending.pending_count, 1);
        assert_eq!(pending.course_items[0].students.len(), 1);
        assert_eq!(pending.course_items[0].students[0].person_name, "Emma");
        assert_eq!(pending.course_items[0].students[0].status, "pending");

        let all = service
            .pending_evaluations(
                c.teacher.person_id,
                TeacherPendingQuery {
                    status: Some("all".to_string()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(all.course_items[0].students.len(), 2);
        assert_eq!(all.pending_count, 1);

        let invalid = service
            .pending_evaluations(
                c.teacher.person_id,
                TeacherPendingQuery {
                    status: Some("graded".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(
            invalid,
            Err(Error::RequestError(RequestError::Validation(_)))
        ));

        Ok(())
    }

    /// Expect overall, per-session and per-student figures over graded rows
    #[tokio::test]
    async fn course_statistics_over_graded_rows() -> Result<(), TestError> {
        let test = test_setup_with_training_tables!()?;
        let c = classroom(&test).await?;
        let first = test
            .training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ago(3),
                factory::time(9, 0),
                factory::time(10, 0),
            )
            .await?;
        let second = test
            .training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ago(1),
                factory::time(9, 0),
                factory::time(10, 0),
            )
            .await?;
        // weighted 80 and 50 in the first session, 90 and one ungraded row in the second
        test.training()
            .insert_evaluation(c.emma.person_id, first.item_id, Some(70.0), Some(90.0), 0.5)
            .await?;
        test.training()
            .insert_evaluation(c.omar.person_id, first.item_id, Some(50.0), Some(50.0), 0.5)
            .await?;
        test.training()
            .insert_evaluation(c.emma.person_id, second.item_id, Some(90.0), Some(90.0), 0.5)
            .await?;
        test.training()
            .insert_evaluation(c.omar.person_id, second.item_id, Some(60.0), None, 0.5)
            .await?;
        let service = TeacherService::new(&test.db);

        let stats = service
            .course_statistics(
                c.teacher.person_id,
                CourseStatisticsQuery {
                    course_id: Some(c.course.course_id),
                },
            )
            .await?;

        assert_eq!(stats.teacher_name, "Tom");
        assert_eq!(stats.statistics.total_classes, 2);
        assert_eq!(stats.statistics.total_students, 2);
        assert_eq!(stats.statistics.average_score, 73.33);
        assert_eq!(stats.statistics.max_score, 90.0);
        assert_eq!(stats.statistics.min_score, 50.0);
        assert_eq!(stats.statistics.pass_rate, 66.67);
        assert_eq!(stats.statistics.excellent_rate, 33.33);
        assert_eq!(stats.statistics.score_distribution.below_60, 1);

        assert_eq!(stats.class_stat[0].item_id, first.item_id);
        assert_eq!(stats.class_stat[0].evaluated_count, 2);
        assert_eq!(stats.class_stat[0].average_score, 65.0);
        assert_eq!(stats.class_stat[1].evaluated_count, 1);

        let emma = &stats.student_scores[0];
        assert_eq!(emma.person_name, "Emma");
        assert_eq!(emma.class_count, 2);
        assert_eq!(emma.latest_score, 90.0);
        assert_eq!(emma.trend, "up");
        assert_eq!(stats.student_scores[1].trend, "stable");

        Ok(())
    }

    /// Expect a missing id, an unknown course and another teacher's course to be rejected
    #[tokio::test]
    async fn course_statistics_checks_ownership() -> Result<(), TestError> {
        let test = test_setup_with_training_tables!()?;
        let c = classroom(&test).await?;
        let other = test.people().insert_teacher("Bea").await?;
        let service = TeacherService::new(&test.db);

        let missing_id = service
            .course_statistics(c.teacher.person_id, CourseStatisticsQuery::default())
            .await;
        assert!(matches!(
            missing_id,
            Err(Error::RequestError(RequestError::Validation(_)))
        ));

        let unknown = service
            .course_statistics(
                c.teacher.person_id,
                CourseStatisticsQuery {
                    course_id: Some(9999),
                },
            )
            .await;
        assert!(matches!(
            unknown,
            Err(Error::RequestError(RequestError::NotFound(_)))
        ));

        let foreign = service
            .course_statistics(
                other.person_id,
                CourseStatisticsQuery {
                    course_id: Some(c.course.course_id),
                },
            )
            .await;
        assert!(matches!(
            foreign,
            Err(Error::RequestError(RequestError::Forbidden(_)))
        ));

        Ok(())
    }

    /// Expect hours, evaluation rate and recent sessions limited to the period
    #[tokio::test]
    async fn teaching_statistics_within_period() -> Result<(), TestError> {
        let test = test_setup_with_training_tables!()?;
        let c = classroom(&test).await?;
        test.training()
            .insert_course(c.teacher.person_id, "Negotiation", "Soft Skills")
            .await?;
        let earlier = test
            .training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ago(3),
                factory::time(9, 0),
                factory::time(11, 0),
            )
            .await?;
        let later = test
            .training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ago(1),
                factory::time(14, 0),
                factory::time(15, 30),
            )
            .await?;
        test.training()
            .insert_item(
                c.plan.plan_id,
                c.course.course_id,
                factory::days_ago(30),
                factory::time(9, 0),
                factory::time(10, 0),
            )
            .await?;
        test.training()
            .insert_evaluation(c.emma.person_id, earlier.item_id, Some(70.0), Some(90.0), 0.5)
            .await?;
        test.training()
            .insert_evaluation(c.emma.person_id, later.item_id, Some(60.0), None, 0.5)
            .await?;

        let stats = TeacherService::new(&test.db)
            .teaching_statistics(
                c.teacher.person_id,
                DateRangeQuery {
                    start_date: iso(factory::days_ago(7)),
                    end_date: iso(factory::days_ago(0)),
                },
            )
            .await?;

        assert_eq!(stats.teacher_name, "Tom");
        assert_eq!(stats.statistics.course_count, 2);
        assert_eq!(stats.statistics.class_count, 2);
        assert_eq!(stats.statistics.student_count, 1);
        assert_eq!(stats.statistics.total_hours, 3.5);
        assert_eq!(stats.statistics.average_teaching_score, 80.0);
        assert_eq!(stats.statistics.evaluation_rate, 50.0);

        let soft = stats
            .statistics
            .course_type_distribution
            .iter()
            .find(|d| d.course_class == "Soft Skills")
            .unwrap();
        assert_eq!(soft.course_count, 1);
        assert_eq!(soft.average_score, 0.0);

        assert_eq!(stats.recent_classes.len(), 2);
        assert_eq!(stats.recent_classes[0].item_id, later.item_id);
        assert_eq!(stats.recent_classes[0].student_count, 2);

        Ok(())
    }
}
