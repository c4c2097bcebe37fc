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
            CourseItemDto, CourseItemListQuery, CourseItemSummaryDto, CreateCourseItemDto,
            UpdateCourseItemDto,
        },
    },
    server::{
        controller::{accept, done, ok, ok_with, planner::PLANNER_TAG},
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::planner::course_item::CourseItemService,
    },
};

/// Paginated list of scheduled sessions
#[utoipa::path(
    get,
    path = "/api/planner/course-items",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        CourseItemListQuery
    ),
    responses(
        (status = 200, description = "Sessions", body = ApiResponse<PageDto<CourseItemSummaryDto>>),
        (status = 400, description = "Invalid filter or pagination", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto)
    ),
)]
pub async fn list_course_items(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<CourseItemListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Query(query) = accept(query)?;

    let page = CourseItemService::new(&state.db).list(query).await?;

    Ok(ok(page))
}

/// Schedule a session of a course within a plan
///
/// # Responses
/// - 200 (OK): Session scheduled
/// - 400 (Bad Request): Invalid date, times or location, or the teacher already has an
///   overlapping session that day
/// - 404 (Not Found): Plan or course does not exist
#[utoipa::path(
    post,
    path = "/api/planner/course-items",
    tag = PLANNER_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    request_body = CreateCourseItemDto,
    responses(
        (status = 200, description = "Session scheduled", body = ApiResponse<CourseItemDto>),
        (status = 400, description = "Invalid session or schedule conflict", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Plan or course not found", body = ErrorDto)
    ),
)]
pub async fn create_course_item(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<CreateCourseItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Json(payload) = accept(payload)?;

    let item = CourseItemService::new(&state.db).create(payload).await?;

    Ok(ok_with("Course item created", item))
}

/// Partially update a session, re-checking the teacher's calendar
#[utoipa::path(
    put,
    path = "/api/planner/course-items/{itemId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("itemId" = i32, Path, description = "Session ID")
    ),
    request_body = UpdateCourseItemDto,
    responses(
        (status = 200, description = "Session updated", body = ApiResponse<CourseItemDto>),
        (status = 400, description = "Invalid update or schedule conflict", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Session, plan or course not found", body = ErrorDto)
    ),
)]
pub async fn update_course_item(
    State(state): State<AppState>,
    user: CurrentUser,
    item_id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCourseItemDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(item_id) = accept(item_id)?;
    let Json(payload) = accept(payload)?;

    let item = CourseItemService::new(&state.db)
        .update(item_id, payload)
        .await?;

    Ok(ok_with("Course item updated", item))
}

/// Delete a session, dropping its evaluations with `force=true`
#[utoipa::path(
    delete,
    path = "/api/planner/course-items/{itemId}",
    tag = PLANNER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        ("itemId" = i32, Path, description = "Session ID"),
        ForceQuery
    ),
    responses(
        (status = 200, description = "Session deleted", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Session has evaluations, data carries their count", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a planner", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto)
    ),
)]
pub async fn delete_course_item(
    State(state): State<AppState>,
    user: CurrentUser,
    item_id: Result<Path<i32>, PathRejection>,
    query: Result<Query<ForceQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Planner)?;
    let Path(item_id) = accept(item_id)?;
    let Query(query) = accept(query)?;

    CourseItemService::new(&state.db)
        .delete(item_id, query.force.unwrap_or(false))
        .await?;

    Ok(done("Course item deleted"))
}
