//! Endpoints reserved for employees.

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
        employee::{
            CourseTypeScoresDto, DateRangeQuery, EmployeePendingDto, EmployeePendingQuery,
            EmployeeScheduleDto, EmployeeScoresDto, EmployeeScoresQuery, EvaluationResultDto,
            LearningProgressDto, SubmitEvaluationDto,
        },
    },
    server::{
        controller::{accept, ok, ok_with},
        error::Error,
        model::{app::AppState, session::CurrentUser},
        service::{employee::EmployeeService, evaluation::EvaluationService},
    },
};

pub static EMPLOYEE_TAG: &str = "employee";

/// Sessions of the caller's plans between two dates, one entry per day
#[utoipa::path(
    get,
    path = "/api/employee/schedule",
    tag = EMPLOYEE_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        DateRangeQuery
    ),
    responses(
        (status = 200, description = "Schedule", body = ApiResponse<EmployeeScheduleDto>),
        (status = 400, description = "Missing or invalid dates", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto)
    ),
)]
pub async fn schedule(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<DateRangeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Employee)?;
    let Query(query) = accept(query)?;

    let schedule = EmployeeService::new(&state.db)
        .schedule(user.person_id, query)
        .await?;

    Ok(ok(schedule))
}

/// Ended sessions and whether the caller has evaluated them
#[utoipa::path(
    get,
    path = "/api/employee/pending-evaluations",
    tag = EMPLOYEE_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        EmployeePendingQuery
    ),
    responses(
        (status = 200, description = "Pending evaluations", body = ApiResponse<EmployeePendingDto>),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto)
    ),
)]
pub async fn pending_evaluations(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<EmployeePendingQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Employee)?;
    let Query(query) = accept(query)?;

    let pending = EmployeeService::new(&state.db)
        .pending_evaluations(user.person_id, query)
        .await?;

    Ok(ok(pending))
}

/// Submit or replace the caller's self-evaluation of an ended session
///
/// # Responses
/// - 200 (OK): Evaluation stored, `scoreSource` tells whether the oracle or the fallback scored it
/// - 400 (Bad Request): Invalid comment or ratings, or the session has not ended
/// - 403 (Forbidden): Caller is not an employee or not enrolled in the session's plan
/// - 404 (Not Found): Session does not exist
#[utoipa::path(
    post,
    path = "/api/employee/submit-evaluation",
    tag = EMPLOYEE_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    request_body = SubmitEvaluationDto,
    responses(
        (status = 200, description = "Evaluation stored", body = ApiResponse<EvaluationResultDto>),
        (status = 400, description = "Invalid evaluation", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to evaluate this session", body = ErrorDto),
        (status = 404, description = "Session not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_evaluation(
    State(state): State<AppState>,
    user: CurrentUser,
    payload: Result<Json<SubmitEvaluationDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Employee)?;
    let Json(payload) = accept(payload)?;

    let result = EvaluationService::new(&state.db, &state.oracle)
        .submit_evaluation(user.person_id, payload)
        .await?;

    Ok(ok_with("Evaluation submitted", result))
}

/// Score rows of ended sessions with a summary
#[utoipa::path(
    get,
    path = "/api/employee/scores",
    tag = EMPLOYEE_TAG,
    params(
        ("Session-ID" = String, Header, description = "Session token from login"),
        EmployeeScoresQuery
    ),
    responses(
        (status = 200, description = "Scores", body = ApiResponse<EmployeeScoresDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto)
    ),
)]
pub async fn scores(
    State(state): State<AppState>,
    user: CurrentUser,
    query: Result<Query<EmployeeScoresQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Employee)?;
    let Query(query) = accept(query)?;

    let scores = EmployeeService::new(&state.db)
        .scores(user.person_id, query)
        .await?;

    Ok(ok(scores))
}

/// Scores per course class with radar chart data
#[utoipa::path(
    get,
    path = "/api/employee/course-type-scores",
    tag = EMPLOYEE_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    responses(
        (status = 200, description = "Scores per course class", body = ApiResponse<CourseTypeScoresDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto)
    ),
)]
pub async fn course_type_scores(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Employee)?;

    let scores = EmployeeService::new(&state.db)
        .course_type_scores(user.person_id)
        .await?;

    Ok(ok(scores))
}

/// Overall and per-plan completion with the most recent sessions
#[utoipa::path(
    get,
    path = "/api/employee/learning-progress",
    tag = EMPLOYEE_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    responses(
        (status = 200, description = "Learning progress", body = ApiResponse<LearningProgressDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an employee", body = ErrorDto)
    ),
)]
pub async fn learning_progress(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    user.require(Role::Employee)?;

    let progress = EmployeeService::new(&state.db)
        .learning_progress(user.person_id)
        .await?;

    Ok(ok(progress))
}
