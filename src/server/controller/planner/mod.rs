//! Endpoints reserved for planners: plans, courses, sessions, pick lists and analytics.

pub mod analytics;
pub mod course;
pub mod course_item;
pub mod plan;

use axum::{extract::State, response::IntoResponse};
use entity::sea_orm_active_enums::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ListDto},
        planner::{EmployeeOptionDto, TeacherOptionDto},
    },
    server::{
        controller::ok,
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::planner::people::PeopleService,
    },
};

pub static PLANNER_TAG: &str = "planner";

/// Every teacher, for course assignment
#[utoipa::path(
    get,
    path = "/api/planner/teachers",
    tag = PLANNER_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    responses(
        (status = 200, description = "Teachers", body = ApiResponse<ListDto<TeacherOptionDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn teachers(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;

    let teachers = PeopleService::new(&state.db).teachers().await?;

    Ok(ok(teachers))
}

/// Every employee, for plan enrollment
#[utoipa::path(
    get,
    path = "/api/planner/employees",
    tag = PLANNER_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    responses(
        (status = 200, description = "Employees", body = ApiResponse<ListDto<EmployeeOptionDto>>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn employees(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;

    let employees = PeopleService::new(&state.db).employees().await?;

    Ok(ok(employees))
}
