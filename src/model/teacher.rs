use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherSessionDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub course_desc: String,
    pub course_require: String,
    pub course_class: String,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
    pub plan_id: i32,
    pub plan_name: String,
    /// Employees enrolled in the session's plan
    pub student_count: u64,
    /// Evaluations of the session already graded
    pub evaluated_count: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherScheduleDayDto {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub courses: Vec<TeacherSessionDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherScheduleDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_courses: u64,
    pub schedule: Vec<TeacherScheduleDayDto>,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TeacherPendingQuery {
    pub course_id: Option<i32>,
    /// `pending` (default) or `all`
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentEvaluationDto {
    pub person_id: i32,
    pub person_name: String,
    pub self_score: Option<f64>,
    pub self_comment: String,
    pub teacher_score: Option<f64>,
    pub teacher_comment: String,
    pub score_ratio: f64,
    pub evaluated_at: Option<String>,
    /// `pending` or `evaluated`
    pub status: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendingSessionDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub course_class: String,
    pub class_date: NaiveDate,
    pub class_begin_time: NaiveTime,
    pub class_end_time: NaiveTime,
    pub location: String,
    pub plan_name: String,
    pub students: Vec<StudentEvaluationDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPendingDto {
    pub total_count: u64,
    pub pending_count: u64,
    pub course_items: Vec<PendingSessionDto>,
}

/// Teacher grading of one employee's session
///
/// Without `teacherScore` the score is derived from `teacherComment`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGradingDto {
    pub item_id: i32,
    pub person_id: i32,
    pub teacher_score: Option<f64>,
    pub teacher_comment: Option<String>,
    /// Weight of the teacher score, defaults to 0.5
    pub score_ratio: Option<f64>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradingResultDto {
    pub item_id: i32,
    pub person_id: i32,
    pub person_name: String,
    pub self_score: Option<f64>,
    pub teacher_score: f64,
    pub score_ratio: f64,
    pub weighted_score: Option<f64>,
    pub teacher_comment: String,
}

#[derive(Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CourseStatisticsQuery {
    pub course_id: Option<i32>,
}

#[derive(Default, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ScoreDistributionDto {
    #[serde(rename = "0-59")]
    pub below_60: u64,
    #[serde(rename = "60-69")]
    pub from_60: u64,
    #[serde(rename = "70-79")]
    pub from_70: u64,
    #[serde(rename = "80-89")]
    pub from_80: u64,
    #[serde(rename = "90-100")]
    pub from_90: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseScoreStatsDto {
    pub total_classes: u64,
    pub total_students: u64,
    pub average_score: f64,
    pub max_score: f64,
    pub min_score: f64,
    pub pass_rate: f64,
    pub excellent_rate: f64,
    pub score_distribution: ScoreDistributionDto,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassStatDto {
    pub item_id: i32,
    pub class_date: NaiveDate,
    pub location: String,
    pub student_count: u64,
    pub evaluated_count: u64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentTrendDto {
    pub person_id: i32,
    pub person_name: String,
    pub class_count: u64,
    pub average_score: f64,
    pub latest_score: f64,
    /// `up`, `down` or `stable`
    pub trend: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatisticsDto {
    pub course_id: i32,
    pub course_name: String,
    pub course_class: String,
    pub teacher_name: String,
    pub statistics: CourseScoreStatsDto,
    pub class_stat: Vec<ClassStatDto>,
    pub student_scores: Vec<StudentTrendDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseClassShareDto {
    pub course_class: String,
    pub course_count: u64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeachingSummaryDto {
    pub course_count: u64,
    pub class_count: u64,
    pub student_count: u64,
    pub total_hours: f64,
    pub average_teaching_score: f64,
    pub evaluation_rate: f64,
    pub course_type_distribution: Vec<CourseClassShareDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentClassDto {
    pub item_id: i32,
    pub course_id: i32,
    pub course_name: String,
    pub class_date: NaiveDate,
    pub student_count: u64,
    pub evaluated_count: u64,
    pub average_score: f64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeachingStatisticsDto {
    pub teacher_id: i32,
    pub teacher_name: String,
    pub period: PeriodDto,
    pub statistics: TeachingSummaryDto,
    pub recent_classes: Vec<RecentClassDto>,
}
