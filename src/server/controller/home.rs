use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        home::HomeStatisticsDto,
    },
    server::{
        controller::ok,
        error::Error,
        model::{app::AppState, session::MaybeUser},
        service::statistics::overview::StatisticsService,
    },
};

pub static HOME_TAG: &str = "home";

/// Platform wide counters for the landing page
///
/// A valid `Session-ID` adds the caller's own counters for employees and teachers;
/// a missing or expired one is ignored.
#[utoipa::path(
    get,
    path = "/api/home/statistics",
    tag = HOME_TAG,
    params(("Session-ID" = Option<String>, Header, description = "Optional session token")),
    responses(
        (status = 200, description = "Statistics", body = ApiResponse<HomeStatisticsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn statistics(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
) -> Result<impl IntoResponse, Error> {
    let statistics = StatisticsService::new(&state.db).home(user).await?;

    Ok(ok(statistics))
}
