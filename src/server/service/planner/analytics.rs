//! Platform-wide rankings and per-employee or per-course reports.
//!
//! Rows are loaded whole and grouped in memory. Only teacher-graded evaluations carry a
//! score here; self-only rows still count towards participation where noted.

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap, HashSet},
};

use entity::sea_orm_active_enums::{PlanStatus, Role};
use sea_orm::{DatabaseConnection, Iterable};

use crate::{
    model::planner::{
        AnalyticsDto, ClassAverageDto, CourseClassDistributionDto, CourseEvaluationRowDto,
        CourseEvaluationsDto, CourseRankingDto, EmployeeRankingDto, EmployeeScoreReportDto,
        ItemScoreDto, PlanRankingDto, PlanStatusCountDto, TeacherSummaryDto,
    },
    server::{
        data::{
            course::CourseRepository,
            course_item::{unique, CourseItemRepository, ItemFilter},
            evaluation::EvaluationRepository,
            person::PersonRepository,
            training_plan::TrainingPlanRepository,
        },
        error::{request::RequestError, Error},
        service::{
            planner::{course::course_not_found, person_names},
            statistics::{graded_score, ScoreSummary},
        },
        util::enums::plan_status_name,
    },
};

/// Ranking length when `topN` is absent or below 1
pub static DEFAULT_TOP_N: usize = 10;

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

/// Graded scores and distinct participants collected for one group
#[derive(Default)]
struct Tally {
    scores: Vec<f64>,
    persons: HashSet<i32>,
    items: HashSet<i32>,
}

impl Tally {
    fn add(&mut self, person_id: i32, item_id: i32, score: f64) {
        self.scores.push(score);
        self.persons.insert(person_id);
        self.items.insert(item_id);
    }

    fn average(&self) -> f64 {
        ScoreSummary::from_scores(self.scores.iter().copied()).average
    }
}

impl<'a> AnalyticsService<'a> {
    /// Creates a new instance of [`AnalyticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rankings, distributions and the teacher summary table
    ///
    /// `top_n` bounds the course, plan and employee rankings.
    pub async fn analytics(&self, top_n: Option<i64>) -> Result<AnalyticsDto, Error> {
        let top_n = resolve_top_n(top_n);

        let courses = CourseRepository::new(self.db).find_all().await?;
        let plans = TrainingPlanRepository::new(self.db).find_all().await?;
        let items: HashMap<i32, entity::plan_course_item::Model> =
            CourseItemRepository::new(self.db)
                .find(ItemFilter::default())
                .await?
                .into_iter()
                .map(|i| (i.item_id, i))
                .collect();
        let evaluations = EvaluationRepository::new(self.db).find_all().await?;

        let course_by_id: HashMap<i32, &entity::course::Model> =
            courses.iter().map(|c| (c.course_id, c)).collect();

        let mut by_course: HashMap<i32, Tally> = HashMap::new();
        let mut by_plan: HashMap<i32, Tally> = HashMap::new();
        let mut by_class: HashMap<&str, Tally> = HashMap::new();
        let mut by_employee: HashMap<i32, Tally> = HashMap::new();
        let mut by_teacher: HashMap<i32, Tally> = HashMap::new();

        for evaluation in &evaluations {
            let Some(score) = graded_score(evaluation) else {
                continue;
            };
            let Some(item) = items.get(&evaluation.item_id) else {
                continue;
            };
            let (person_id, item_id) = (evaluation.person_id, evaluation.item_id);

            by_course
                .entry(item.course_id)
                .or_default()
                .add(person_id, item_id, score);
            by_plan
                .entry(item.plan_id)
                .or_default()
                .add(person_id, item_id, score);
            by_employee
                .entry(person_id)
                .or_default()
                .add(person_id, item_id, score);

            if let Some(course) = course_by_id.get(&item.course_id) {
                by_class
                    .entry(course.course_class.as_str())
                    .or_default()
                    .add(person_id, item_id, score);
                by_teacher
                    .entry(course.teacher_id)
                    .or_default()
                    .add(person_id, item_id, score);
            }
        }

        let mut course_rankings: Vec<CourseRankingDto> = courses
            .iter()
            .filter_map(|c| {
                let tally = by_course.get(&c.course_id)?;
                Some(CourseRankingDto {
                    course_id: c.course_id,
                    course_name: c.course_name.clone(),
                    course_avg_score: tally.average(),
                    student_count: tally.persons.len() as u64,
                })
            })
            .collect();
        course_rankings.sort_by(|a, b| {
            by_score_desc(a.course_avg_score, b.course_avg_score)
                .then(a.course_id.cmp(&b.course_id))
        });
        course_rankings.truncate(top_n);

        let mut plan_rankings: Vec<PlanRankingDto> = plans
            .iter()
            .filter_map(|p| {
                let tally = by_plan.get(&p.plan_id)?;
                Some(PlanRankingDto {
                    plan_id: p.plan_id,
                    plan_name: p.plan_name.clone(),
                    plan_avg_score: tally.average(),
                })
            })
            .collect();
        plan_rankings.sort_by(|a, b| {
            by_score_desc(a.plan_avg_score, b.plan_avg_score).then(a.plan_id.cmp(&b.plan_id))
        });
        plan_rankings.truncate(top_n);

        let mut class_courses: BTreeMap<&str, u64> = BTreeMap::new();
        for course in &courses {
            *class_courses.entry(course.course_class.as_str()).or_default() += 1;
        }
        let mut course_class_distribution: Vec<CourseClassDistributionDto> = class_courses
            .into_iter()
            .map(|(class, course_count)| CourseClassDistributionDto {
                course_class: class.to_string(),
                course_count,
                avg_score: by_class.get(class).map(Tally::average).unwrap_or(0.0),
            })
            .collect();
        // stable sort keeps classes with equal counts in name order
        course_class_distribution.sort_by(|a, b| b.course_count.cmp(&a.course_count));

        let mut plan_status_statistics = Vec::new();
        for status in PlanStatus::iter() {
            let count = plans.iter().filter(|p| p.plan_status == status).count() as u64;
            if count > 0 {
                plan_status_statistics.push(PlanStatusCountDto {
                    plan_status: plan_status_name(status).to_string(),
                    count,
                });
            }
        }

        let employee_ids: Vec<i32> = by_employee.keys().copied().collect();
        let employee_names = person_names(self.db, &employee_ids).await?;
        let mut employee_rankings: Vec<EmployeeRankingDto> = by_employee
            .iter()
            .filter_map(|(person_id, tally)| {
                Some(EmployeeRankingDto {
                    person_id: *person_id,
                    person_name: employee_names.get(person_id)?.clone(),
                    avg_score: tally.average(),
                    course_count: tally.items.len() as u64,
                })
            })
            .collect();
        employee_rankings.sort_by(|a, b| {
            by_score_desc(a.avg_score, b.avg_score).then(a.person_id.cmp(&b.person_id))
        });
        employee_rankings.truncate(top_n);

        let mut sessions_by_teacher: HashMap<i32, u64> = HashMap::new();
        for item in items.values() {
            if let Some(course) = course_by_id.get(&item.course_id) {
                *sessions_by_teacher.entry(course.teacher_id).or_default() += 1;
            }
        }
        let owners: HashSet<i32> = courses.iter().map(|c| c.teacher_id).collect();
        let mut teacher_statistics: Vec<TeacherSummaryDto> = PersonRepository::new(self.db)
            .find_by_role(Role::Teacher)
            .await?
            .into_iter()
            .filter(|t| owners.contains(&t.person_id))
            .map(|t| {
                let tally = by_teacher.get(&t.person_id);
                TeacherSummaryDto {
                    teacher_id: t.person_id,
                    teacher_name: t.name,
                    course_count: sessions_by_teacher.get(&t.person_id).copied().unwrap_or(0),
                    avg_score: tally.map(Tally::average).unwrap_or(0.0),
                    student_count: tally.map(|x| x.persons.len() as u64).unwrap_or(0),
                }
            })
            .collect();
        teacher_statistics.sort_by(|a, b| {
            b.course_count
                .cmp(&a.course_count)
                .then(a.teacher_id.cmp(&b.teacher_id))
        });

        Ok(AnalyticsDto {
            course_rankings,
            plan_rankings,
            course_class_distribution,
            plan_status_statistics,
            employee_rankings,
            teacher_statistics,
        })
    }

    /// Score report of one employee across every session they evaluated
    ///
    /// `courseCount` counts evaluated sessions while averages use graded rows only.
    ///
    /// # Returns
    /// - `Ok(EmployeeScoreReportDto)` - Overall and per-class averages with per-session rows
    /// - `Err(RequestError::NotFound)` - No person with that ID holds the employee role
    pub async fn employee_scores(&self, employee_id: i32) -> Result<EmployeeScoreReportDto, Error> {
        let employee = PersonRepository::new(self.db)
            .find_by_id(employee_id)
            .await?
            .filter(|p| p.role == Role::Employee)
            .ok_or_else(|| RequestError::NotFound(format!("Employee {} not found", employee_id)))?;

        let evaluations = EvaluationRepository::new(self.db)
            .find_by_person(employee_id)
            .await?;

        let item_repository = CourseItemRepository::new(self.db);
        let item_ids = unique(evaluations.iter().map(|e| e.item_id));
        let items = item_repository.find_by_ids(&item_ids).await?;
        let mut sessions = item_repository.load_sessions(items).await?;
        sessions.sort_by(|a, b| {
            (b.item.class_date, b.item.class_begin_time)
                .cmp(&(a.item.class_date, a.item.class_begin_time))
        });

        let by_item: HashMap<i32, &entity::attendance_evaluation::Model> =
            evaluations.iter().map(|e| (e.item_id, e)).collect();

        let mut class_scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        let mut graded = Vec::new();
        let mut item_scores = Vec::with_capacity(sessions.len());

        for session in sessions {
            let Some(evaluation) = by_item.get(&session.item.item_id) else {
                continue;
            };
            let weighted = graded_score(evaluation);

            let class = class_scores
                .entry(session.course.course_class.clone())
                .or_default();
            if let Some(score) = weighted {
                class.push(score);
                graded.push(score);
            }

            item_scores.push(ItemScoreDto {
                item_id: session.item.item_id,
                course_name: session.course.course_name,
                course_class: session.course.course_class,
                class_date: session.item.class_date,
                class_begin_time: session.item.class_begin_time,
                class_end_time: session.item.class_end_time,
                self_score: evaluation.self_score,
                teacher_score: evaluation.teacher_score,
                weighted_score: weighted,
            });
        }

        let mut course_class_scores: Vec<ClassAverageDto> = class_scores
            .into_iter()
            .map(|(course_class, scores)| ClassAverageDto {
                course_class,
                avg_weighted_score: ScoreSummary::from_scores(scores).average,
            })
            .collect();
        course_class_scores
            .sort_by(|a, b| by_score_desc(a.avg_weighted_score, b.avg_weighted_score));

        Ok(EmployeeScoreReportDto {
            person_id: employee.person_id,
            person_name: employee.name,
            overall_avg_score: ScoreSummary::from_scores(graded).average,
            course_count: item_scores.len() as u64,
            course_class_scores,
            item_scores,
        })
    }

    /// Every evaluation of a course's sessions with graded score statistics
    ///
    /// # Returns
    /// - `Ok(CourseEvaluationsDto)` - Rows newest session first, best weighted score first within a day
    /// - `Err(RequestError::NotFound)` - Course does not exist
    pub async fn course_evaluations(&self, course_id: i32) -> Result<CourseEvaluationsDto, Error> {
        let course = CourseRepository::new(self.db)
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| course_not_found(course_id))?;

        let items: HashMap<i32, entity::plan_course_item::Model> =
            CourseItemRepository::new(self.db)
                .find(ItemFilter {
                    course_ids: Some(vec![course_id]),
                    ..Default::default()
                })
                .await?
                .into_iter()
                .map(|i| (i.item_id, i))
                .collect();

        let item_ids: Vec<i32> = items.keys().copied().collect();
        let evaluations = EvaluationRepository::new(self.db)
            .find_by_items(&item_ids)
            .await?;

        let person_ids = unique(evaluations.iter().map(|e| e.person_id));
        let names = person_names(self.db, &person_ids).await?;
        let summary = ScoreSummary::from_scores(evaluations.iter().filter_map(graded_score));

        let mut rows: Vec<CourseEvaluationRowDto> = evaluations
            .into_iter()
            .filter_map(|e| {
                let item = items.get(&e.item_id)?;
                let person_name = names.get(&e.person_id)?.clone();
                let weighted_score = graded_score(&e);

                Some(CourseEvaluationRowDto {
                    person_id: e.person_id,
                    person_name,
                    item_id: e.item_id,
                    class_date: item.class_date,
                    self_score: e.self_score,
                    self_comment: e.self_comment,
                    teacher_score: e.teacher_score,
                    teacher_comment: e.teacher_comment,
                    weighted_score,
                })
            })
            .collect();
        // ungraded rows sort after graded ones within a day
        rows.sort_by(|a, b| {
            b.class_date.cmp(&a.class_date).then_with(|| {
                by_score_desc(
                    a.weighted_score.unwrap_or(f64::MIN),
                    b.weighted_score.unwrap_or(f64::MIN),
                )
            })
        });

        Ok(CourseEvaluationsDto {
            course_id: course.course_id,
            course_name: course.course_name,
            course_avg_score: summary.average,
            student_count: person_ids.len() as u64,
            max_score: summary.max,
            min_score: summary.min,
            evaluations: rows,
        })
    }
}

/// Ranking length for a requested `topN`, falling back to the default when absent or below 1
pub fn resolve_top_n(top_n: Option<i64>) -> usize {
    match top_n {
        Some(n) if n >= 1 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => DEFAULT_TOP_N,
    }
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
