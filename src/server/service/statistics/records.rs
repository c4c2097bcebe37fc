//! Loaders gathering the rows the statistics functions consume.

use std::collections::HashMap;

use entity::attendance_evaluation::Model as Evaluation;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::{
    course::CourseRepository,
    course_item::{unique, CourseItemRepository, ItemFilter, SessionRecord},
    evaluation::EvaluationRepository,
    plan_employee::PlanEmployeeRepository,
};

/// Sessions assigned to one employee through plan membership, with their evaluations
pub struct EmployeeRecords {
    pub plan_ids: Vec<i32>,
    pub sessions: Vec<SessionRecord>,
    /// The employee's evaluations keyed by item ID
    pub evaluations: HashMap<i32, Evaluation>,
}

impl EmployeeRecords {
    /// Loads the employee's sessions matching `filter`
    ///
    /// `filter.plan_ids` narrows the employee's plans, it never widens them.
    pub async fn load<C: ConnectionTrait>(
        db: &C,
        person_id: i32,
        mut filter: ItemFilter,
    ) -> Result<Self, DbErr> {
        let plan_ids = PlanEmployeeRepository::new(db)
            .find_plan_ids(person_id)
            .await?;

        let scoped: Vec<i32> = match filter.plan_ids.take() {
            Some(wanted) => plan_ids
                .iter()
                .copied()
                .filter(|id| wanted.contains(id))
                .collect(),
            None => plan_ids.clone(),
        };

        if scoped.is_empty() {
            return Ok(Self {
                plan_ids,
                sessions: Vec::new(),
                evaluations: HashMap::new(),
            });
        }

        filter.plan_ids = Some(scoped);

        let item_repository = CourseItemRepository::new(db);
        let items = item_repository.find(filter).await?;
        let sessions = item_repository.load_sessions(items).await?;

        let evaluations = EvaluationRepository::new(db)
            .find_by_person(person_id)
            .await?
            .into_iter()
            .map(|e| (e.item_id, e))
            .collect();

        Ok(Self {
            plan_ids,
            sessions,
            evaluations,
        })
    }

    pub fn evaluation(&self, item_id: i32) -> Option<&Evaluation> {
        self.evaluations.get(&item_id)
    }
}

/// Sessions of one teacher's courses with every evaluation and plan enrollment size
pub struct TeacherRecords {
    pub courses: Vec<entity::course::Model>,
    pub sessions: Vec<SessionRecord>,
    evaluations: HashMap<i32, Vec<Evaluation>>,
    enrolled: HashMap<i32, u64>,
}

impl TeacherRecords {
    /// Loads the teacher's sessions matching `filter`
    ///
    /// `filter.course_ids` narrows the teacher's courses, it never widens them.
    pub async fn load<C: ConnectionTrait>(
        db: &C,
        teacher_id: i32,
        mut filter: ItemFilter,
    ) -> Result<Self, DbErr> {
        let mut courses = CourseRepository::new(db).find_by_teacher(teacher_id).await?;
        if let Some(wanted) = filter.course_ids.take() {
            courses.retain(|c| wanted.contains(&c.course_id));
        }

        let course_ids: Vec<i32> = courses.iter().map(|c| c.course_id).collect();
        if course_ids.is_empty() {
            return Ok(Self {
                courses,
                sessions: Vec::new(),
                evaluations: HashMap::new(),
                enrolled: HashMap::new(),
            });
        }

        filter.course_ids = Some(course_ids);

        let item_repository = CourseItemRepository::new(db);
        let items = item_repository.find(filter).await?;
        let sessions = item_repository.load_sessions(items).await?;

        let item_ids: Vec<i32> = sessions.iter().map(|s| s.item.item_id).collect();
        let mut evaluations: HashMap<i32, Vec<Evaluation>> = HashMap::new();
        for evaluation in EvaluationRepository::new(db)
            .find_by_items(&item_ids)
            .await?
        {
            evaluations
                .entry(evaluation.item_id)
                .or_default()
                .push(evaluation);
        }

        let plan_employee_repository = PlanEmployeeRepository::new(db);
        let mut enrolled = HashMap::new();
        for plan_id in unique(sessions.iter().map(|s| s.plan.plan_id)) {
            let count = plan_employee_repository.count_by_plan(plan_id).await?;
            enrolled.insert(plan_id, count);
        }

        Ok(Self {
            courses,
            sessions,
            evaluations,
            enrolled,
        })
    }

    /// Evaluations of one session in creation order
    pub fn evaluations(&self, item_id: i32) -> &[Evaluation] {
        self.evaluations
            .get(&item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every evaluation of the loaded sessions
    pub fn all_evaluations(&self) -> impl Iterator<Item = &Evaluation> {
        self.evaluations.values().flatten()
    }

    /// Employees enrolled in the plan of a session
    pub fn student_count(&self, plan_id: i32) -> u64 {
        self.enrolled.get(&plan_id).copied().unwrap_or(0)
    }
}
