use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherOptionDto {
    pub person_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeOptionDto {
    pub person_id: i32,
    pub person_name: String,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlanListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub keyword: Option<String>,
    /// `plan_start_datetime`, `plan_end_datetime`, `plan_name` or `plan_id`
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub sort_order: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummaryDto {
    pub plan_id: i32,
    pub plan_name: String,
    pub plan_status: String,
    pub plan_start_datetime: String,
    pub plan_end_datetime: String,
    pub creator_id: i32,
    pub creator_name: String,
    pub employee_count: u64,
    pub course_count: u64,
}

/// Datetimes use `YYYY-MM-DD HH:MM:SS`
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanDto {
    pub plan_name: String,
    pub plan_status: String,
    pub plan_start_datetime: String,
    pub plan_end_datetime: String,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanDto {
    pub plan_name: Option<String>,
    pub plan_status: Option<String>,
    pub plan_start_datetime: Option<String>,
    pub plan_end_datetime: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDto {
    pub plan_id: i32,
    pub plan_name: String,
    pub plan_status: String,
    pub plan_start_datetime: String,
    pub plan_end_datetime: String,
    pub creator_id: i32,
    pub creator_name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanSessionDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub course_class: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanMemberDto {
    pub person_id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDetailDto {
    pub plan_id: i32,
    pub plan_name: String,
    pub plan_status: String,
    pub plan_start_datetime: String,
    pub plan_end_datetime: String,
    pub creator_id: i32,
    pub creator_name: String,
    pub course_items: Vec<PlanSessionDto>,
    pub employees: Vec<PlanMemberDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeesDto {
    pub employee_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeesResultDto {
    pub added_count: u64,
    pub skipped_count: u64,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CourseListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub course_class: Option<String>,
    pub keyword: Option<String>,
    pub teacher_id: Option<i32>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryDto {
    pub course_id: i32,
    pub course_name: String,
    pub course_desc: String,
    pub course_require: String,
    pub course_class: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub scheduled_count: u64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub course_name: String,
    #[serde(default)]
    pub course_desc: String,
    #[serde(default)]
    pub course_require: String,
    pub course_class: String,
    pub teacher_id: i32,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    pub course_name: Option<String>,
    pub course_desc: Option<String>,
    pub course_require: Option<String>,
    pub course_class: Option<String>,
    pub teacher_id: Option<i32>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub course_id: i32,
    pub course_name: String,
    pub course_desc: String,
    pub course_require: String,
    pub course_class: String,
    pub teacher_id: i32,
    pub teacher_name: String,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CourseItemListQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub plan_id: Option<i32>,
    pub course_id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// `asc` (default) or `desc` by date and begin time
    pub sort_order: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseItemSummaryDto {
    pub item_id: i32,
    pub plan_id: i32,
    pub plan_name: String,
    pub course_id: i32,
    pub course_name: String,
    pub course_class: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
}

/// Date uses `YYYY-MM-DD`, times `HH:MM` or `HH:MM:SS`
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseItemDto {
    pub plan_id: i32,
    pub course_id: i32,
    pub class_date: String,
    pub class_begin_time: String,
    pub class_end_time: String,
    pub location: String,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseItemDto {
    pub course_id: Option<i32>,
    pub class_date: Option<String>,
    pub class_begin_time: Option<String>,
    pub class_end_time: Option<String>,
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseItemDto {
    pub item_id: i32,
    pub plan_id: i32,
    pub plan_name: String,
    pub course_id: i32,
    pub course_name: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AnalyticsQuery {
    pub top_n: Option<i64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRankingDto {
    pub course_id: i32,
    pub course_name: String,
    pub course_avg_score: f64,
    pub student_count: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanRankingDto {
    pub plan_id: i32,
    pub plan_name: String,
    pub plan_avg_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseClassDistributionDto {
    pub course_class: String,
    pub course_count: u64,
    pub avg_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanStatusCountDto {
    pub plan_status: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRankingDto {
    pub person_id: i32,
    pub person_name: String,
    pub avg_score: f64,
    pub course_count: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSummaryDto {
    pub teacher_id: i32,
    pub teacher_name: String,
    /// Scheduled sessions across the teacher's courses
    pub course_count: u64,
    pub avg_score: f64,
    pub student_count: u64,
}

/// Platform rankings; only teacher-graded evaluations contribute scores
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsDto {
    pub course_rankings: Vec<CourseRankingDto>,
    pub plan_rankings: Vec<PlanRankingDto>,
    pub course_class_distribution: Vec<CourseClassDistributionDto>,
    pub plan_status_statistics: Vec<PlanStatusCountDto>,
    pub employee_rankings: Vec<EmployeeRankingDto>,
    pub teacher_statistics: Vec<TeacherSummaryDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassAverageDto {
    pub course_class: String,
    pub avg_weighted_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemScoreDto {
    pub item_id: i32,
    pub course_name: String,
    pub course_class: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub self_score: Option<f64>,
    pub teacher_score: Option<f64>,
    /// `null` until the teacher has graded the session
    pub weighted_score: Option<f64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeScoreReportDto {
    pub person_id: i32,
    pub person_name: String,
    pub overall_avg_score: f64,
    pub course_count: u64,
    pub course_class_scores: Vec<ClassAverageDto>,
    pub item_scores: Vec<ItemScoreDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseEvaluationRowDto {
    pub person_id: i32,
    pub person_name: String,
    pub item_id: i32,
    pub class_date: NaiveDate,
    pub self_score: Option<f64>,
    pub self_comment: String,
    pub teacher_score: Option<f64>,
    pub teacher_comment: String,
    pub weighted_score: Option<f64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseEvaluationsDto {
    pub course_id: i32,
    pub course_name: String,
    pub course_avg_score: f64,
    pub student_count: u64,
    pub max_score: f64,
    pub min_score: f64,
    pub evaluations: Vec<CourseEvaluationRowDto>,
}
