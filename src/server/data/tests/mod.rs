mod auth_session;
mod course_item;
mod evaluation;
mod person;
mod plan_employee;
mod training_plan;

use trainhub_test_utils::prelude::*;
