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
        api::{ApiResponse, ErrorDto, PageDto},
        planner::{CourseDto, CourseListQuery, CourseSummaryDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        controller::{accept, done, ok, ok_with, planner::PLANNER_TAG},
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::planner::course::CourseService,
    },
};

/// Paginated course catalog with the number of scheduled sessions
#[utoipa::path(
    get,
    path = "/api/planner/courses",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        CourseListQuery
    ),
    responses(
        (status = 200, description = "Courses", body = ApiResponse<PageDto<CourseSummaryDto>>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<CourseListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Query(query) = accept(query)?;

    let page = CourseService::new(&state.db).list(query).await?;

    Ok(ok(page))
}

/// Add a course taught by an existing teacher
#[utoipa::path(
    post,
    path = "/api/planner/courses",
    tag = PLANNER_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    request_body = CreateCourseDto,
    responses(
        (status = 200, description = "Course created", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid course or teacher", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CreateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Json(payload) = accept(payload)?;

    let course = CourseService::new(&state.db).create(payload).await?;

    Ok(ok_with("Course created", course))
}

/// Partially update a course
#[utoipa::path(
    put,
    path = "/api/planner/courses/{courseId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("courseId" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseDto>),
        (status = 400, description = "Invalid or empty update", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    user: CurrentUser,
    course_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCourseDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(course_id) = accept(course_id)?;
    let Json(payload) = accept(payload)?;

    let course = CourseService::new(&state.db)
        .update(course_id, payload)
        .await?;

    Ok(ok_with("Course updated", course))
}

/// Delete a course that has no scheduled sessions
#[utoipa::path(
    delete,
    path = "/api/planner/courses/{courseId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("courseId" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Course is scheduled, data carries the session count", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    user: CurrentUser,
    course_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(course_id) = accept(course_id)?;

    CourseService::new(&state.db).delete(course_id).await?;

    Ok(done("Course deleted"))
}
