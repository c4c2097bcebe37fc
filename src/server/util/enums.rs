//! Wire names of the role and plan status enums.

use entity::sea_orm_active_enums::{PlanStatus, Role};

use crate::server::error::request::RequestError;

pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::Employee => "employee",
        Role::Teacher => "teacher",
        Role::Planner => "planner",
    }
}

/// Human readable role label shown by the client
pub fn role_display(role: Role) -> &'static str {
    match role {
        Role::Employee => "Employee",
        Role::Teacher => "Teacher",
        Role::Planner => "Training Planner",
    }
}

pub fn parse_role(value: &str) -> Result<Role, RequestError> {
    match value.trim() {
        "employee" => Ok(Role::Employee),
        "teacher" => Ok(Role::Teacher),
        "planner" => Ok(Role::Planner),
        other => Err(RequestError::Validation(format!(
            "Invalid role '{}', expected employee, teacher or planner",
            other
        ))),
    }
}

pub fn plan_status_name(status: PlanStatus) -> &'static str {
    match status {
        PlanStatus::Planning => "planning",
        PlanStatus::InProgress => "in-progress",
        PlanStatus::Completed => "completed",
    }
}

pub fn parse_plan_status(value: &str) -> Result<PlanStatus, RequestError> {
    match value.trim() {
        "planning" => Ok(PlanStatus::Planning),
        "in-progress" => Ok(PlanStatus::InProgress),
        "completed" => Ok(PlanStatus::Completed),
        other => Err(RequestError::Validation(format!(
            "Invalid plan status '{}', expected planning, in-progress or completed",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_parse_back() {
        for role in [Role::Employee, Role::Teacher, Role::Planner] {
            assert_eq!(parse_role(role_name(role)).unwrap(), role);
        }
        assert!(parse_role("admin").is_err());
    }

    #[test]
    fn plan_status_names_parse_back() {
        for status in [
            PlanStatus::Planning,
            PlanStatus::InProgress,
            PlanStatus::Completed,
        ] {
            assert_eq!(parse_plan_status(plan_status_name(status)).unwrap(), status);
        }
        assert!(parse_plan_status("in_progress").is_err());
    }
}
