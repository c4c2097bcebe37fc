use chrono::{NaiveDateTime, NaiveTime};
use entity::sea_orm_active_enums::Role;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{
        api::PageDto,
        planner::{
            AddEmployeesDto, AddEmployeesResultDto, CreatePlanDto, PlanDetailDto, PlanDto,
            PlanListQuery, PlanMemberDto, PlanSessionDto, PlanSummaryDto, UpdatePlanDto,
        },
    },
    server::{
        data::{
            course_item::{unique, CourseItemRepository, ItemFilter},
            evaluation::EvaluationRepository,
            person::PersonRepository,
            plan_employee::PlanEmployeeRepository,
            training_plan::{PlanChanges, PlanFilter, TrainingPlanRepository},
        },
        error::{request::RequestError, Error},
        service::planner::person_names,
        util::{
            enums::{parse_plan_status, plan_status_name},
            time::{format_datetime, parse_datetime, parse_optional_date},
            validate,
        },
    },
};

/// Longest accepted plan name
pub static MAX_PLAN_NAME_LENGTH: usize = 100;

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    /// Creates a new instance of [`PlanService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of plans with creator name, enrollment and session counts
    pub async fn list(&self, query: PlanListQuery) -> Result<PageDto<PlanSummaryDto>, Error> {
        let (page, page_size) = validate::pagination(query.page, query.page_size)?;

        let filter = PlanFilter {
            status: query
                .status
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(parse_plan_status)
                .transpose()?,
            starts_from: parse_optional_date("startDate", query.start_date.as_deref())?
                .map(|d| d.and_time(NaiveTime::MIN)),
            ends_by: parse_optional_date("endDate", query.end_date.as_deref())?
                .and_then(|d| d.and_hms_opt(23, 59, 59)),
            keyword: query
                .keyword
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            sort_by: sort_column(query.sort_by.as_deref())?,
            descending: validate::descending(query.sort_order.as_deref(), true)?,
        };

        let (plans, total) = TrainingPlanRepository::new(self.db)
            .find_page(filter, page, page_size)
            .await?;

        let creator_ids = unique(plans.iter().map(|p| p.creator_id));
        let creators = person_names(self.db, &creator_ids).await?;

        let enrollment_repository = PlanEmployeeRepository::new(self.db);
        let item_repository = CourseItemRepository::new(self.db);

        let mut list = Vec::with_capacity(plans.len());
        for plan in plans {
            let employee_count = enrollment_repository.count_by_plan(plan.plan_id).await?;
            let course_count = item_repository.count_by_plan(plan.plan_id).await?;

            list.push(PlanSummaryDto {
                plan_id: plan.plan_id,
                creator_name: creators.get(&plan.creator_id).cloned().unwrap_or_default(),
                plan_name: plan.plan_name,
                plan_status: plan_status_name(plan.plan_status).to_string(),
                plan_start_datetime: format_datetime(plan.plan_start_datetime),
                plan_end_datetime: format_datetime(plan.plan_end_datetime),
                creator_id: plan.creator_id,
                employee_count,
                course_count,
            });
        }

        Ok(PageDto {
            total,
            page,
            page_size,
            list,
        })
    }

    /// Creates a plan owned by `creator_id`
    ///
    /// # Returns
    /// - `Ok(PlanDto)` - The stored plan
    /// - `Err(RequestError::Validation)` - Bad name, status or datetimes, or start not before end
    pub async fn create(&self, creator_id: i32, payload: CreatePlanDto) -> Result<PlanDto, Error> {
        let name = validate::text("planName", &payload.plan_name, 1, MAX_PLAN_NAME_LENGTH)?;
        let status = parse_plan_status(&payload.plan_status)?;
        let start = parse_datetime("planStartDatetime", &payload.plan_start_datetime)?;
        let end = parse_datetime("planEndDatetime", &payload.plan_end_datetime)?;
        ensure_ordered(start, end)?;

        let plan = TrainingPlanRepository::new(self.db)
            .create(&name, status, start, end, creator_id)
            .await?;

        tracing::info!(
            "Person ID {} created training plan ID {} ({})",
            creator_id,
            plan.plan_id,
            plan.plan_name
        );

        self.plan_dto(plan).await
    }

    /// A plan with its sessions in schedule order and its enrolled employees
    pub async fn detail(&self, plan_id: i32) -> Result<PlanDetailDto, Error> {
        let plan = self.find_plan(plan_id).await?;

        let item_repository = CourseItemRepository::new(self.db);
        let items = item_repository
            .find(ItemFilter {
                plan_ids: Some(vec![plan_id]),
                ..Default::default()
            })
            .await?;
        let course_items = item_repository
            .load_sessions(items)
            .await?
            .into_iter()
            .map(|s| PlanSessionDto {
                item_id: s.item.item_id,
                course_id: s.course.course_id,
                course_name: s.course.course_name,
                course_class: s.course.course_class,
                teacher_id: s.course.teacher_id,
                teacher_name: s.teacher_name,
                class_date: s.item.class_date,
                class_begin_time: s.item.class_begin_time,
                class_end_time: s.item.class_end_time,
                location: s.item.location,
            })
            .collect();

        let member_ids = PlanEmployeeRepository::new(self.db)
            .find_person_ids(plan_id)
            .await?;
        let mut members = PersonRepository::new(self.db)
            .find_by_ids(&member_ids)
            .await?;
        members.sort_by_key(|p| p.person_id);
        let employees = members
            .into_iter()
            .map(|p| PlanMemberDto {
                person_id: p.person_id,
                name: p.name,
            })
            .collect();

        let creator_name = person_names(self.db, &[plan.creator_id])
            .await?
            .remove(&plan.creator_id)
            .unwrap_or_default();

        Ok(PlanDetailDto {
            plan_id: plan.plan_id,
            plan_name: plan.plan_name,
            plan_status: plan_status_name(plan.plan_status).to_string(),
            plan_start_datetime: format_datetime(plan.plan_start_datetime),
            plan_end_datetime: format_datetime(plan.plan_end_datetime),
            creator_id: plan.creator_id,
            creator_name,
            course_items,
            employees,
        })
    }

    /// Applies the fields present in `payload`
    ///
    /// The resulting start and end are re-validated against each other even when only
    /// one of them changes.
    pub async fn update(&self, plan_id: i32, payload: UpdatePlanDto) -> Result<PlanDto, Error> {
        if payload.plan_name.is_none()
            && payload.plan_status.is_none()
            && payload.plan_start_datetime.is_none()
            && payload.plan_end_datetime.is_none()
        {
            return Err(RequestError::Validation("No fields to update".to_string()).into());
        }

        let changes = PlanChanges {
            plan_name: payload
                .plan_name
                .as_deref()
                .map(|n| validate::text("planName", n, 1, MAX_PLAN_NAME_LENGTH))
                .transpose()?,
            plan_status: payload
                .plan_status
                .as_deref()
                .map(parse_plan_status)
                .transpose()?,
            plan_start_datetime: payload
                .plan_start_datetime
                .as_deref()
                .map(|v| parse_datetime("planStartDatetime", v))
                .transpose()?,
            plan_end_datetime: payload
                .plan_end_datetime
                .as_deref()
                .map(|v| parse_datetime("planEndDatetime", v))
                .transpose()?,
        };

        let plan = self.find_plan(plan_id).await?;
        ensure_ordered(
            changes.plan_start_datetime.unwrap_or(plan.plan_start_datetime),
            changes.plan_end_datetime.unwrap_or(plan.plan_end_datetime),
        )?;

        let plan = TrainingPlanRepository::new(self.db)
            .update(plan, changes)
            .await?;

        tracing::info!("Updated training plan ID {}", plan.plan_id);

        self.plan_dto(plan).await
    }

    /// Deletes a plan, refusing while sessions or enrollments exist unless `force` is set
    ///
    /// A forced delete removes evaluations of the plan's sessions, the sessions, the
    /// enrollments and the plan in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Plan deleted
    /// - `Err(RequestError::NotFound)` - Plan does not exist
    /// - `Err(RequestError::BlockedByDependents)` - Dependents exist and `force` is false,
    ///   carrying `courseItemCount` and `employeeCount`
    pub async fn delete(&self, plan_id: i32, force: bool) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        if TrainingPlanRepository::new(&txn)
            .find_by_id(plan_id)
            .await?
            .is_none()
        {
            return Err(plan_not_found(plan_id).into());
        }

        let item_repository = CourseItemRepository::new(&txn);
        let enrollment_repository = PlanEmployeeRepository::new(&txn);

        let course_item_count = item_repository.count_by_plan(plan_id).await?;
        let employee_count = enrollment_repository.count_by_plan(plan_id).await?;

        if (course_item_count > 0 || employee_count > 0) && !force {
            return Err(RequestError::BlockedByDependents {
                message: format!(
                    "Plan has {} scheduled sessions and {} enrolled employees, pass force=true to delete them too",
                    course_item_count, employee_count
                ),
                data: json!({
                    "courseItemCount": course_item_count,
                    "employeeCount": employee_count,
                }),
            }
            .into());
        }

        let item_ids: Vec<i32> = item_repository
            .find(ItemFilter {
                plan_ids: Some(vec![plan_id]),
                ..Default::default()
            })
            .await?
            .into_iter()
            .map(|i| i.item_id)
            .collect();

        let evaluations = EvaluationRepository::new(&txn)
            .delete_by_items(&item_ids)
            .await?;
        item_repository.delete_by_plan(plan_id).await?;
        enrollment_repository.remove_by_plan(plan_id).await?;
        TrainingPlanRepository::new(&txn).delete(plan_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted training plan ID {} with {} sessions, {} enrollments and {} evaluations",
            plan_id,
            course_item_count,
            employee_count,
            evaluations
        );

        Ok(())
    }

    /// Enrolls employees in a plan, skipping those already enrolled
    ///
    /// # Returns
    /// - `Ok(AddEmployeesResultDto)` - Counts of added and skipped IDs
    /// - `Err(RequestError::NotFound)` - Plan does not exist
    /// - `Err(RequestError::Validation)` - Empty list, or an ID that is not an employee
    pub async fn add_employees(
        &self,
        plan_id: i32,
        payload: AddEmployeesDto,
    ) -> Result<AddEmployeesResultDto, Error> {
        let employee_ids = unique(payload.employee_ids.into_iter());
        if employee_ids.is_empty() {
            return Err(RequestError::Validation("employeeIds must not be empty".to_string()).into());
        }

        let txn = self.db.begin().await?;

        if TrainingPlanRepository::new(&txn)
            .find_by_id(plan_id)
            .await?
            .is_none()
        {
            return Err(plan_not_found(plan_id).into());
        }

        let employees = PersonRepository::new(&txn)
            .find_by_ids(&employee_ids)
            .await?;
        let invalid: Vec<i32> = employee_ids
            .iter()
            .copied()
            .filter(|id| {
                !employees
                    .iter()
                    .any(|p| p.person_id == *id && p.role == Role::Employee)
            })
            .collect();
        if !invalid.is_empty() {
            return Err(RequestError::Validation(format!(
                "Not employees: {:?}",
                invalid
            ))
            .into());
        }

        let enrollment_repository = PlanEmployeeRepository::new(&txn);
        let mut added_count = 0;
        let mut skipped_count = 0;
        for person_id in employee_ids {
            if enrollment_repository.is_enrolled(plan_id, person_id).await? {
                skipped_count += 1;
                continue;
            }

            enrollment_repository.enroll(plan_id, person_id).await?;
            added_count += 1;
        }

        txn.commit().await?;

        tracing::info!(
            "Enrolled {} employees in plan ID {} ({} already enrolled)",
            added_count,
            plan_id,
            skipped_count
        );

        Ok(AddEmployeesResultDto {
            added_count,
            skipped_count,
        })
    }

    /// Removes an employee from a plan
    ///
    /// Evaluations the employee wrote for the plan's sessions block the removal unless
    /// `force` is set, in which case they are deleted in the same transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Employee removed
    /// - `Err(RequestError::NotFound)` - Plan missing or employee not enrolled
    /// - `Err(RequestError::BlockedByDependents)` - Evaluations exist, carrying `evaluationCount`
    pub async fn remove_employee(
        &self,
        plan_id: i32,
        employee_id: i32,
        force: bool,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let enrollment_repository = PlanEmployeeRepository::new(&txn);
        if !enrollment_repository.is_enrolled(plan_id, employee_id).await? {
            return Err(RequestError::NotFound(format!(
                "Employee {} is not enrolled in plan {}",
                employee_id, plan_id
            ))
            .into());
        }

        let item_ids: Vec<i32> = CourseItemRepository::new(&txn)
            .find(ItemFilter {
                plan_ids: Some(vec![plan_id]),
                ..Default::default()
            })
            .await?
            .into_iter()
            .map(|i| i.item_id)
            .collect();

        let evaluation_repository = EvaluationRepository::new(&txn);
        let evaluation_count = evaluation_repository
            .count_by_person_in_items(employee_id, &item_ids)
            .await?;

        if evaluation_count > 0 {
            if !force {
                return Err(RequestError::BlockedByDependents {
                    message: format!(
                        "Employee has {} evaluations in this plan, pass force=true to delete them too",
                        evaluation_count
                    ),
                    data: json!({ "evaluationCount": evaluation_count }),
                }
                .into());
            }

            evaluation_repository
                .delete_by_person_in_items(employee_id, &item_ids)
                .await?;
        }

        enrollment_repository.remove(plan_id, employee_id).await?;

        txn.commit().await?;

        tracing::info!(
            "Removed person ID {} from plan ID {} ({} evaluations deleted)",
            employee_id,
            plan_id,
            evaluation_count
        );

        Ok(())
    }

    async fn find_plan(&self, plan_id: i32) -> Result<entity::training_plan::Model, Error> {
        Ok(TrainingPlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| plan_not_found(plan_id))?)
    }

    async fn plan_dto(&self, plan: entity::training_plan::Model) -> Result<PlanDto, Error> {
        let creator_name = person_names(self.db, &[plan.creator_id])
            .await?
            .remove(&plan.creator_id)
            .unwrap_or_default();

        Ok(PlanDto {
            plan_id: plan.plan_id,
            plan_name: plan.plan_name,
            plan_status: plan_status_name(plan.plan_status).to_string(),
            plan_start_datetime: format_datetime(plan.plan_start_datetime),
            plan_end_datetime: format_datetime(plan.plan_end_datetime),
            creator_id: plan.creator_id,
            creator_name,
        })
    }
}

fn plan_not_found(plan_id: i32) -> RequestError {
    RequestError::NotFound(format!("Training plan {} not found", plan_id))
}

fn ensure_ordered(start: NaiveDateTime, end: NaiveDateTime) -> Result<(), RequestError> {
    if start >= end {
        return Err(RequestError::Validation(
            "planStartDatetime must be before planEndDatetime".to_string(),
        ));
    }

    Ok(())
}

fn sort_column(sort_by: Option<&str>) -> Result<entity::training_plan::Column, RequestError> {
    use entity::training_plan::Column;

    match sort_by.map(str::trim) {
        None | Some("") | Some("plan_start_datetime") => Ok(Column::PlanStartDatetime),
        Some("plan_end_datetime") => Ok(Column::PlanEndDatetime),
        Some("plan_name") => Ok(Column::PlanName),
        Some("plan_id") => Ok(Column::PlanId),
        Some(other) => Err(RequestError::Validation(format!(
            "Invalid sortBy '{}', expected plan_start_datetime, plan_end_datetime, plan_name or plan_id",
            other
        ))),
    }
}
