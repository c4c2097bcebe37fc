use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ForceQuery, PageDto},
        planner::{
            AddEmployeesDto, AddEmployeesResultDto, CreatePlanDto, PlanDetailDto, PlanDto,
            PlanListQuery, PlanSummaryDto, UpdatePlanDto,
        },
    },
    server::{
        controller::{accept, done, ok, ok_with, planner::PLANNER_TAG},
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::planner::plan::PlanService,
    },
};

/// Paginated, filterable list of training plans
#[utoipa::path(
    get,
    path = "/api/planner/plans",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        PlanListQuery
    ),
    responses(
        (status = 200, description = "Plans", body = ApiResponse<PageDto<PlanSummaryDto>>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn list_plans(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<PlanListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Query(query) = accept(query)?;

    let page = PlanService::new(&state.db).list(query).await?;

    Ok(ok(page))
}

/// Create a training plan owned by the caller
#[utoipa::path(
    post,
    path = "/api/planner/plans",
    tag = PLANNER_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    request_body = CreatePlanDto,
    responses(
        (status = 200, description = "Plan created", body = ApiResponse<PlanDto>),
        (status = 400, description = "Invalid plan", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CreatePlanDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Json(payload) = accept(payload)?;

    let plan = PlanService::new(&state.db)
        .create(user.person_id, payload)
        .await?;

    Ok(ok_with("Plan created", plan))
}

/// A plan with its sessions and enrolled employees
#[utoipa::path(
    get,
    path = "/api/planner/plans/{planId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("planId" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Plan detail", body = ApiResponse<PlanDetailDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    user: CurrentUser,
    plan_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(plan_id) = accept(plan_id)?;

    let detail = PlanService::new(&state.db).detail(plan_id).await?;

    Ok(ok(detail))
}

/// Partially update a plan
#[utoipa::path(
    put,
    path = "/api/planner/plans/{planId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("planId" = i32, Path, description = "Plan ID")
    ),
    request_body = UpdatePlanDto,
    responses(
        (status = 200, description = "Plan updated", body = ApiResponse<PlanDto>),
        (status = 400, description = "Invalid or empty update", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn update_plan(
    State(state): State<AppState>,
    user: CurrentUser,
    plan_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdatePlanDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(plan_id) = accept(plan_id)?;
    let Json(payload) = accept(payload)?;

    let plan = PlanService::new(&state.db).update(plan_id, payload).await?;

    Ok(ok_with("Plan updated", plan))
}

/// Delete a plan, its sessions and enrollments with `force=true`
#[utoipa::path(
    delete,
    path = "/api/planner/plans/{planId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("planId" = i32, Path, description = "Plan ID"),
        ForceQuery
    ),
    responses(
        (status = 200, description = "Plan deleted", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Plan has sessions or enrollments, data carries their counts", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    user: CurrentUser,
    plan_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<ForceQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(plan_id) = accept(plan_id)?;
    let Query(query) = accept(query)?;

    PlanService::new(&state.db)
        .delete(plan_id, query.force.unwrap_or(false))
        .await?;

    Ok(done("Plan deleted"))
}

/// Enroll employees in a plan, skipping those already enrolled
#[utoipa::path(
    post,
    path = "/api/planner/plans/{planId}/employees",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("planId" = i32, Path, description = "Plan ID")
    ),
    request_body = AddEmployeesDto,
    responses(
        (status = 200, description = "Employees enrolled", body = ApiResponse<AddEmployeesResultDto>),
        (status = 400, description = "Empty list or an ID that is not an employee", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Plan not found", body = ErrorDto)
    ),
)]
pub async fn add_employees(
    State(state): State<AppState>,
    user: CurrentUser,
    plan_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AddEmployeesDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(plan_id) = accept(plan_id)?;
    let Json(payload) = accept(payload)?;

    let result = PlanService::new(&state.db)
        .add_employees(plan_id, payload)
        .await?;

    Ok(ok_with("Employees added", result))
}

/// Remove an employee from a plan, dropping their evaluations with `force=true`
#[utoipa::path(
    delete,
    path = "/api/planner/plans/{planId}/employees/{employeeId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("planId" = i32, Path, description = "Plan ID"),
        ("employeeId" = i32, Path, description = "Person ID of the employee"),
        ForceQuery
    ),
    responses(
        (status = 200, description = "Employee removed", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Employee has evaluations, data carries their count", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Employee not enrolled in the plan", body = ErrorDto)
    ),
)]
pub async fn remove_employee(
    State(state): State<AppState>,
    user: CurrentUser,
    ids: Result<Path<(i32, i32)>, PathRejection>,
    query: Result<Query<ForceQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path((plan_id, employee_id)) = accept(ids)?;
    let Query(query) = accept(query)?;

    PlanService::new(&state.db)
        .remove_employee(plan_id, employee_id, query.force.unwrap_or(false))
        .await?;

    Ok(done("Employee removed"))
}
