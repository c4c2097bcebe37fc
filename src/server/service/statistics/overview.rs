//! Per-role counters for the account page and the home page.

use std::collections::HashSet;

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{PlanStatus, Role};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        auth::{EmployeeAccountStatsDto, PlannerAccountStatsDto, TeacherAccountStatsDto},
        home::{
            EmployeePersonalStatsDto, HomeStatisticsDto, PersonalStatsDto, TeacherPersonalStatsDto,
        },
    },
    server::{
        data::{
            course::CourseRepository,
            course_item::{CourseItemRepository, ItemFilter},
            evaluation::EvaluationRepository,
            person::PersonRepository,
            plan_employee::PlanEmployeeRepository,
            training_plan::TrainingPlanRepository,
        },
        error::Error,
        model::session::CurrentUser,
        service::statistics::{
            graded_score, is_completed, personal_score,
            records::{EmployeeRecords, TeacherRecords},
            ScoreSummary,
        },
        util::time::{local_now, week_bounds},
    },
};

/// Counters of an employee's assigned sessions
#[derive(Debug, Default, PartialEq)]
pub struct EmployeeOverview {
    pub plan_count: u64,
    pub session_count: u64,
    pub completed_count: u64,
    pub average_score: f64,
    pub today_count: u64,
    pub week_count: u64,
}

/// Counters of a teacher's scheduled sessions
#[derive(Debug, Default, PartialEq)]
pub struct TeacherOverview {
    pub course_count: u64,
    pub class_count: u64,
    pub student_count: u64,
    pub average_teaching_score: f64,
    pub today_count: u64,
    pub week_count: u64,
}

impl From<EmployeeOverview> for EmployeeAccountStatsDto {
    fn from(overview: EmployeeOverview) -> Self {
        Self {
            training_plan_count: overview.plan_count,
            total_course_count: overview.session_count,
            completed_course_count: overview.completed_count,
            average_score: overview.average_score,
        }
    }
}

impl From<EmployeeOverview> for EmployeePersonalStatsDto {
    fn from(overview: EmployeeOverview) -> Self {
        Self {
            my_plan_count: overview.plan_count,
            my_total_course_count: overview.session_count,
            my_completed_course_count: overview.completed_count,
            my_average_score: overview.average_score,
            my_today_course_count: overview.today_count,
            my_week_course_count: overview.week_count,
        }
    }
}

impl From<TeacherOverview> for TeacherAccountStatsDto {
    fn from(overview: TeacherOverview) -> Self {
        Self {
            course_count: overview.course_count,
            class_count: overview.class_count,
            student_count: overview.student_count,
            average_teaching_score: overview.average_teaching_score,
        }
    }
}

impl From<TeacherOverview> for TeacherPersonalStatsDto {
    fn from(overview: TeacherOverview) -> Self {
        Self {
            my_course_count: overview.course_count,
            my_class_count: overview.class_count,
            my_student_count: overview.student_count,
            my_average_teaching_score: overview.average_teaching_score,
            my_today_class_count: overview.today_count,
            my_week_class_count: overview.week_count,
        }
    }
}

fn day_counts(dates: impl Iterator<Item = NaiveDate>, today: NaiveDate) -> (u64, u64) {
    let (monday, sunday) = week_bounds(today);

    dates.fold((0, 0), |(today_count, week_count), date| {
        (
            today_count + u64::from(date == today),
            week_count + u64::from(date >= monday && date <= sunday),
        )
    })
}

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    /// Creates a new instance of [`StatisticsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counters over every session of the employee's plans
    ///
    /// `today` anchors the today and this-week counters.
    pub async fn employee_overview(
        &self,
        person_id: i32,
        today: NaiveDate,
    ) -> Result<EmployeeOverview, Error> {
        let records = EmployeeRecords::load(self.db, person_id, ItemFilter::default()).await?;

        let completed: Vec<_> = records
            .sessions
            .iter()
            .filter_map(|s| records.evaluation(s.item.item_id))
            .filter(|e| is_completed(e))
            .collect();
        let summary = ScoreSummary::from_scores(completed.iter().filter_map(|e| personal_score(e)));
        let (today_count, week_count) =
            day_counts(records.sessions.iter().map(|s| s.item.class_date), today);

        Ok(EmployeeOverview {
            plan_count: records.plan_ids.len() as u64,
            session_count: records.sessions.len() as u64,
            completed_count: completed.len() as u64,
            average_score: summary.average,
            today_count,
            week_count,
        })
    }

    /// Counters over every session of the teacher's courses
    ///
    /// Students are the distinct employees who evaluated any of those sessions and the
    /// average covers teacher scores of graded rows.
    pub async fn teacher_overview(
        &self,
        teacher_id: i32,
        today: NaiveDate,
    ) -> Result<TeacherOverview, Error> {
        let records = TeacherRecords::load(self.db, teacher_id, ItemFilter::default()).await?;

        let students: HashSet<i32> = records.all_evaluations().map(|e| e.person_id).collect();
        let summary =
            ScoreSummary::from_scores(records.all_evaluations().filter_map(|e| e.teacher_score));
        let (today_count, week_count) =
            day_counts(records.sessions.iter().map(|s| s.item.class_date), today);

        Ok(TeacherOverview {
            course_count: records.courses.len() as u64,
            class_count: records.sessions.len() as u64,
            student_count: students.len() as u64,
            average_teaching_score: summary.average,
            today_count,
            week_count,
        })
    }

    /// Counters over the plans a planner created
    pub async fn planner_overview(&self, planner_id: i32) -> Result<PlannerAccountStatsDto, Error> {
        let plan_ids: Vec<i32> = TrainingPlanRepository::new(self.db)
            .find_all()
            .await?
            .into_iter()
            .filter(|p| p.creator_id == planner_id)
            .map(|p| p.plan_id)
            .collect();

        if plan_ids.is_empty() {
            return Ok(PlannerAccountStatsDto {
                plan_count: 0,
                total_course_count: 0,
                total_student_count: 0,
                average_plan_score: 0.0,
            });
        }

        let items = CourseItemRepository::new(self.db)
            .find(ItemFilter {
                plan_ids: Some(plan_ids.clone()),
                ..Default::default()
            })
            .await?;
        let item_ids: Vec<i32> = items.iter().map(|i| i.item_id).collect();

        let plan_employee_repository = PlanEmployeeRepository::new(self.db);
        let mut student_count = 0;
        for plan_id in &plan_ids {
            student_count += plan_employee_repository.count_by_plan(*plan_id).await?;
        }

        let evaluations = EvaluationRepository::new(self.db)
            .find_by_items(&item_ids)
            .await?;
        let summary = ScoreSummary::from_scores(evaluations.iter().filter_map(graded_score));

        Ok(PlannerAccountStatsDto {
            plan_count: plan_ids.len() as u64,
            total_course_count: items.len() as u64,
            total_student_count: student_count,
            average_plan_score: summary.average,
        })
    }

    /// Platform wide counters without personal statistics
    pub async fn global(&self) -> Result<HomeStatisticsDto, Error> {
        let person_repository = PersonRepository::new(self.db);
        let plan_repository = TrainingPlanRepository::new(self.db);

        let evaluations = EvaluationRepository::new(self.db).find_all().await?;
        let summary = ScoreSummary::from_scores(evaluations.iter().filter_map(graded_score));

        Ok(HomeStatisticsDto {
            course_count: CourseRepository::new(self.db).count().await?,
            teacher_count: person_repository.count_by_role(Role::Teacher).await?,
            plan_count: plan_repository.count().await?,
            average_satisfaction: summary.average.trunc() as i64,
            total_student_count: person_repository.count_by_role(Role::Employee).await?,
            total_class_count: CourseItemRepository::new(self.db).count().await?,
            ongoing_plan_count: plan_repository
                .count_by_status(PlanStatus::InProgress)
                .await?,
            completed_plan_count: plan_repository
                .count_by_status(PlanStatus::Completed)
                .await?,
            personal_stats: None,
        })
    }

    /// Platform counters, plus the caller's own counters for employees and teachers
    pub async fn home(&self, caller: Option<CurrentUser>) -> Result<HomeStatisticsDto, Error> {
        let mut statistics = self.global().await?;
        let today = local_now().date();

        statistics.personal_stats = match caller {
            Some(CurrentUser {
                person_id,
                role: Role::Employee,
            }) => Some(PersonalStatsDto::Employee(
                self.employee_overview(person_id, today).await?.into(),
            )),
            Some(CurrentUser {
                person_id,
                role: Role::Teacher,
            }) => Some(PersonalStatsDto::Teacher(
                self.teacher_overview(person_id, today).await?.into(),
            )),
            _ => None,
        };

        Ok(statistics)
    }
}
