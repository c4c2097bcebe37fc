//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered through utoipa-axum so its OpenAPI annotation lands in a
//! single document. Swagger UI serves that document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        self, auth::AUTH_TAG, employee::EMPLOYEE_TAG, health::HEALTH_TAG, home::HOME_TAG,
        planner::PLANNER_TAG, teacher::TEACHER_TAG,
    },
    model::app::AppState,
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so each path carries all of its
/// methods. Authentication is not a layer: handlers that need a caller extract
/// [`CurrentUser`](crate::server::model::session::CurrentUser) and check its role.
///
/// # Swagger UI
/// Interactive documentation is served at `/api/docs` and the raw specification at
/// `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with every route, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Trainhub", description = "Training management API"),
        tags(
            (name = AUTH_TAG, description = "Registration, login and sessions"),
            (name = EMPLOYEE_TAG, description = "Employee schedule, self-evaluations and scores"),
            (name = TEACHER_TAG, description = "Teacher schedule, grading and statistics"),
            (name = PLANNER_TAG, description = "Plans, courses, sessions and analytics"),
            (name = HOME_TAG, description = "Public landing page statistics"),
            (name = HEALTH_TAG, description = "Liveness probe"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::home::statistics))
        // auth
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::current_user))
        // employee
        .routes(routes!(controller::employee::schedule))
        .routes(routes!(controller::employee::pending_evaluations))
        .routes(routes!(controller::employee::submit_evaluation))
        .routes(routes!(controller::employee::scores))
        .routes(routes!(controller::employee::course_type_scores))
        .routes(routes!(controller::employee::learning_progress))
        // teacher
        .routes(routes!(controller::teacher::schedule))
        .routes(routes!(controller::teacher::pending_evaluations))
        .routes(routes!(controller::teacher::submit_grading))
        .routes(routes!(controller::teacher::course_statistics))
        .routes(routes!(controller::teacher::teaching_statistics))
        // planner
        .routes(routes!(controller::planner::teachers))
        .routes(routes!(controller::planner::employees))
        .routes(routes!(
            controller::planner::plan::list_plans,
            controller::planner::plan::create_plan
        ))
        .routes(routes!(
            controller::planner::plan::get_plan,
            controller::planner::plan::update_plan,
            controller::planner::plan::delete_plan
        ))
        .routes(routes!(controller::planner::plan::add_employees))
        .routes(routes!(controller::planner::plan::remove_employee))
        .routes(routes!(
            controller::planner::course::list_courses,
            controller::planner::course::create_course
        ))
        .routes(routes!(
            controller::planner::course::update_course,
            controller::planner::course::delete_course
        ))
        .routes(routes!(
            controller::planner::course_item::list_course_items,
            controller::planner::course_item::create_course_item
        ))
        .routes(routes!(
            controller::planner::course_item::update_course_item,
            controller::planner::course_item::delete_course_item
        ))
        .routes(routes!(controller::planner::analytics::analytics))
        .routes(routes!(controller::planner::analytics::employee_scores))
        .routes(routes!(controller::planner::analytics::course_evaluations))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
