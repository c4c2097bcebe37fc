use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Inclusive `YYYY-MM-DD` date range
#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSessionDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub course_desc: String,
    pub course_class: String,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub has_evaluated: bool,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeScheduleDayDto {
    pub date: NaiveDate,
    pub course_count: u64,
    pub courses: Vec<EmployeeSessionDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeScheduleDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_courses: u64,
    pub courses: Vec<EmployeeScheduleDayDto>,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeePendingQuery {
    /// `pending` (default) or `all`
    pub status: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePendingItemDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub course_desc: String,
    pub course_class: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    /// `pending` or `evaluated`
    pub evaluation_status: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePendingDto {
    pub total_count: u64,
    pub pending_count: u64,
    pub courses: Vec<EmployeePendingItemDto>,
}

/// Self-evaluation of an ended session; ratings are 1-5, with 0 or absent meaning 3
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEvaluationDto {
    pub item_id: i32,
    pub self_comment: String,
    pub understanding: Option<i32>,
    pub difficulty: Option<i32>,
    pub satisfaction: Option<i32>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResultDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub self_score: f64,
    pub self_comment: String,
    pub teacher_score: Option<f64>,
    pub weighted_score: Option<f64>,
    /// `oracle` or `fallback`
    pub score_source: String,
    pub evaluated_at: String,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct EmployeeScoresQuery {
    pub plan_id: Option<i32>,
    pub course_class: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRowDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub course_desc: String,
    pub course_class: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
    pub plan_id: i32,
    pub plan_name: String,
    pub teacher_id: i32,
    pub teacher_name: String,
    pub self_score: Option<f64>,
    pub self_comment: String,
    pub teacher_score: Option<f64>,
    pub teacher_comment: String,
    pub score_ratio: f64,
    pub weighted_score: Option<f64>,
    pub has_teacher_score: bool,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummaryDto {
    pub total_courses: u64,
    pub completed_courses: u64,
    pub pending_evaluation: u64,
    pub graded_courses: u64,
    pub average_score: f64,
    pub max_score: f64,
    pub min_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmployeeScoresDto {
    pub statistics: ScoreSummaryDto,
    pub scores: Vec<ScoreRowDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseTypeScoreDto {
    pub course_class: String,
    pub course_count: u64,
    pub average_score: f64,
    pub max_score: f64,
    pub min_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RadarIndicatorDto {
    pub name: String,
    pub max: u32,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RadarDataDto {
    pub indicators: Vec<RadarIndicatorDto>,
    pub values: Vec<f64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseTypeScoresDto {
    pub person_id: i32,
    pub person_name: String,
    pub course_type_scores: Vec<CourseTypeScoreDto>,
    pub radar_data: RadarDataDto,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgressDto {
    pub total_plans: u64,
    pub total_courses: u64,
    pub completed_courses: u64,
    pub evaluated_courses: u64,
    pub progress_percentage: f64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgressDto {
    pub plan_id: i32,
    pub plan_name: String,
    pub plan_status: String,
    pub total_courses: u64,
    pub completed_courses: u64,
    pub progress_percentage: f64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentCourseDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub class_date: NaiveDate,
    pub has_evaluated: bool,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgressDto {
    pub person_id: i32,
    pub person_name: String,
    pub overall_progress: OverallProgressDto,
    pub plan_progress: Vec<PlanProgressDto>,
    pub recent_courses: Vec<RecentCourseDto>,
}
