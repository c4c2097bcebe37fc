use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub username: String,
    pub password: String,
    pub name: String,
    /// `employee`, `teacher` or `planner`
    pub role: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredDto {
    pub person_id: i32,
    pub account_id: i32,
    pub username: String,
    pub name: String,
    pub role: String,
    pub role_display: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserDto {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub role_display: String,
    pub account_id: i32,
}

/// Issued session token; clients send it back in the `Session-ID` header
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResultDto {
    pub token: String,
    pub expires_at: String,
    pub user: SessionUserDto,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAccountStatsDto {
    pub training_plan_count: u64,
    pub total_course_count: u64,
    pub completed_course_count: u64,
    pub average_score: f64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherAccountStatsDto {
    pub course_count: u64,
    pub class_count: u64,
    pub student_count: u64,
    pub average_teaching_score: f64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlannerAccountStatsDto {
    pub plan_count: u64,
    pub total_course_count: u64,
    pub total_student_count: u64,
    pub average_plan_score: f64,
}

/// Role specific statistics attached to the current user
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum AccountStatsDto {
    Employee(EmployeeAccountStatsDto),
    Teacher(TeacherAccountStatsDto),
    Planner(PlannerAccountStatsDto),
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserDto {
    pub person_id: i32,
    pub name: String,
    pub role: String,
    pub role_display: String,
    pub account_id: i32,
    pub username: String,
    pub statistics: AccountStatsDto,
}
