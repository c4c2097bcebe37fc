use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{CurrentUserDto, LoginDto, LoginResultDto, RegisterDto, RegisteredDto},
    },
    server::{
        controller::{accept, done, ok, ok_with},
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            session::{session_token, CurrentUser},
        },
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
///
/// Creates the person and its login account together.
///
/// # Responses
/// - 200 (OK): Account created
/// - 400 (Bad Request): Invalid field, unknown role or username already taken
/// - 500 (Internal Server Error): Database or hashing failure
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created", body = ApiResponse<RegisteredDto>),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = accept(payload)?;

    let registered = AuthService::new(&state.db).register(payload).await?;

    Ok(ok_with("Registration successful", registered))
}

/// Log in with username and password
///
/// The returned token must be sent in the `Session-ID` header of later requests.
///
/// # Responses
/// - 200 (OK): Session opened
/// - 401 (Unauthorized): Wrong username or password
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session opened", body = ApiResponse<LoginResultDto>),
        (status = 401, description = "Incorrect username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = accept(payload)?;

    let result = AuthService::new(&state.db)
        .login(payload, state.session_ttl_hours)
        .await?;

    Ok(ok_with("Login successful", result))
}

/// Close the caller's session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<serde_json::Value>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    _user: CurrentUser,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    let token = session_token(&headers).ok_or(AuthError::MissingSession)?;

    AuthService::new(&state.db).logout(&token).await?;

    Ok(done("Logout successful"))
}

/// Profile and role specific statistics of the caller
#[utoipa::path(
    get,
    path = "/api/auth/current-user",
    tag = AUTH_TAG,
    params(("Session-ID" = String, Header, description = "Session token from login")),
    responses(
        (status = 200, description = "Current user", body = ApiResponse<CurrentUserDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_user(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let current = AuthService::new(&state.db).current_user(user).await?;

    Ok(ok(current))
}
