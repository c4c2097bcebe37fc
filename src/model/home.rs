use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePersonalStatsDto {
    pub my_plan_count: u64,
    pub my_total_course_count: u64,
    pub my_completed_course_count: u64,
    pub my_average_score: f64,
    pub my_today_course_count: u64,
    pub my_week_course_count: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPersonalStatsDto {
    pub my_course_count: u64,
    pub my_class_count: u64,
    pub my_student_count: u64,
    pub my_average_teaching_score: f64,
    pub my_today_class_count: u64,
    pub my_week_class_count: u64,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum PersonalStatsDto {
    Employee(EmployeePersonalStatsDto),
    Teacher(TeacherPersonalStatsDto),
}

/// Platform wide counts shown on the landing page
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeStatisticsDto {
    pub course_count: u64,
    pub teacher_count: u64,
    pub plan_count: u64,
    /// Average graded weighted score, truncated
    pub average_satisfaction: i64,
    pub total_student_count: u64,
    pub total_class_count: u64,
    pub ongoing_plan_count: u64,
    pub completed_plan_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_stats: Option<PersonalStatsDto>,
}
