use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
};
use entity::sea_orm_active_enums::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        planner::{AnalyticsDto, AnalyticsQuery, CourseEvaluationsDto, EmployeeScoreReportDto},
    },
    server::{
        controller::{accept, ok, planner::PLANNER_TAG},
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::planner::analytics::AnalyticsService,
    },
};

/// Platform rankings and distributions over graded evaluations
#[utoipa::path(
    get,
    path = "/api/planner/analytics",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        AnalyticsQuery
    ),
    responses(
        (status = 200, description = "Analytics", body = ApiResponse<AnalyticsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn analytics(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<AnalyticsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Query(query) = accept(query)?;

    let analytics = AnalyticsService::new(&state.db)
        .analytics(query.top_n)
        .await?;

    Ok(ok(analytics))
}

/// Score report of one employee
#[utoipa::path(
    get,
    path = "/api/planner/employees/{employeeId}/scores",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("employeeId" = i32, Path, description = "Person ID of the employee")
    ),
    responses(
        (status = 200, description = "Employee scores", body = ApiResponse<EmployeeScoreReportDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto)
    ),
)]
pub async fn employee_scores(
    State(state): State<AppState>,
    user: CurrentUser,
    employee_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(employee_id) = accept(employee_id)?;

    let report = AnalyticsService::new(&state.db)
        .employee_scores(employee_id)
        .await?;

    Ok(ok(report))
}

/// Every evaluation of one course with its score summary
#[utoipa::path(
    get,
    path = "/api/planner/courses/{courseId}/evaluations",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("courseId" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course evaluations", body = ApiResponse<CourseEvaluationsDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn course_evaluations(
    State(state): State<AppState>,
    user: CurrentUser,
    course_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(course_id) = accept(course_id)?;

    let evaluations = AnalyticsService::new(&state.db)
        .course_evaluations(course_id)
        .await?;

    Ok(ok(evaluations))
}
