//! Endpoints reserved for teachers.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::Role;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        employee::DateRangeQuery,
        teacher::{
            CourseStatisticsDto, CourseStatisticsQuery, GradingResultDto, SubmitGradingDto,
            TeacherPendingDto, TeacherPendingQuery, TeacherScheduleDto, TeachingStatisticsDto,
        },
    },
    server::{
        controller::{accept, ok, ok_with},
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::{evaluation::EvaluationService, teacher::TeacherService},
    },
};

pub static TEACHER_TAG: &str = "teacher";

/// Sessions of the caller's courses between two dates, one entry per day
#[utoipa::path(
    get,
    path = "/api/teacher/schedule",
    tag = TEACHER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Schedule", body = ApiResponse<TeacherScheduleDto>),
        (status = 400, description = "Missing or invalid dates", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a teacher", body = ErrorDto)
    ),
)]
pub async fn schedule(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Teacher)?;
    let Query(query) = accept(query)?;

    let schedule = TeacherService::new(&state.db)
        .schedule(user.person_id, query)
        .await?;

    Ok(ok(schedule))
}

/// Ended sessions with self-evaluations waiting to be graded
#[utoipa::path(
    get,
    path = "/api/teacher/pending-evaluations",
    tag = TEACHER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        TeacherPendingQuery
    ),
    responses(
        (status = 200, description = "Grading queue", body = ApiResponse<TeacherPendingDto>),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a teacher", body = ErrorDto)
    ),
)]
pub async fn pending_evaluations(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<TeacherPendingQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Teacher)?;
    let Query(query) = accept(query)?;

    let pending = TeacherService::new(&state.db)
        .pending_evaluations(user.person_id, query)
        .await?;

    Ok(ok(pending))
}

/// Grade an employee's self-evaluation
///
/// Without `teacherScore` the score is derived from `teacherComment` by the oracle.
///
/// # Responses
/// - 200 (OK): Grading stored with the weighted score
/// - 400 (Bad Request): Out of range score or ratio, or neither score nor comment
/// - 403 (Forbidden): Caller is not a teacher or does not teach the session's course
/// - 404 (Not Found): Session or self-evaluation does not exist
#[utoipa::path(
    post,
    path = "/api/teacher/submit-grading",
    tag = TEACHER_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    request_body = SubmitGradingDto,
    responses(
        (status = 200, description = "Grading stored", body = ApiResponse<GradingResultDto>),
        (status = 400, description = "Invalid grading", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to grade this session", body = ErrorDto),
        (status = 404, description = "Session or self-evaluation not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_grading(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<SubmitGradingDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Teacher)?;
    let Json(payload) = accept(payload)?;

    let result = EvaluationService::new(&state.db, &state.oracle)
        .submit_grading(user.person_id, payload)
        .await?;

    Ok(ok_with("Grading submitted", result))
}

/// Score statistics of one of the caller's courses
#[utoipa::path(
    get,
    path = "/api/teacher/course-statistics",
    tag = TEACHER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        CourseStatisticsQuery
    ),
    responses(
        (status = 200, description = "Course statistics", body = ApiResponse<CourseStatisticsDto>),
        (status = 400, description = "Missing courseId", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Course taught by another teacher", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn course_statistics(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<CourseStatisticsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Teacher)?;
    let Query(query) = accept(query)?;

    let statistics = TeacherService::new(&state.db)
        .course_statistics(user.person_id, query)
        .await?;

    Ok(ok(statistics))
}

/// Teaching activity over a period, the current year by default
#[utoipa::path(
    get,
    path = "/api/teacher/teaching-statistics",
    tag = TEACHER_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Teaching statistics", body = ApiResponse<TeachingStatisticsDto>),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a teacher", body = ErrorDto)
    ),
)]
pub async fn teaching_statistics(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Teacher)?;
    let Query(query) = accept(query)?;

    let statistics = TeacherService::new(&state.db)
        .teaching_statistics(user.person_id, query)
        .await?;

    Ok(ok(statistics))
}
