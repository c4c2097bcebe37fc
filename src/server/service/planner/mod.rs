//! Planner back office: plans and their members, the course catalogue, the session
//! schedule, pick lists and platform analytics.
//!
//! Guarded deletes report their dependent row counts through
//! [`RequestError::BlockedByDependents`](crate::server::error::request::RequestError)
//! and only cascade when the caller passes `force`. Every cascade runs in one
//! transaction.

pub mod analytics;
pub mod course;
pub mod course_item;
pub mod people;
pub mod plan;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DbErr};

use crate::server::data::person::PersonRepository;

/// Names of the given persons keyed by ID
async fn person_names<C: ConnectionTrait>(
    db: &C,
    person_ids: &[i32],
) -> Result<HashMap<i32, String>, DbErr> {
    Ok(PersonRepository::new(db)
        .find_by_ids(person_ids)
        .await?
        .into_iter()
        .map(|p| (p.person_id, p.name))
        .collect())
}
