//! Teacher double-booking guard.
//!
//! Sessions are half-open `[begin, end)` intervals. The check runs inside the caller's
//! transaction after locking the teacher's person row, so two concurrent schedulings of
//! the same teacher are serialized and cannot both pass.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::ConnectionTrait;

use crate::server::{
    data::{course::CourseRepository, course_item::CourseItemRepository, person::PersonRepository},
    error::{request::RequestError, Error},
};

/// Whether `[begin, end)` intersects `[existing_begin, existing_end)`
pub fn overlaps(
    existing_begin: NaiveTime,
    existing_end: NaiveTime,
    begin: NaiveTime,
    end: NaiveTime,
) -> bool {
    existing_begin < end && existing_end > begin
}

pub struct ConflictChecker<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConflictChecker<'a, C> {
    /// Creates a new instance of [`ConflictChecker`]
    ///
    /// `db` should be a transaction that also performs the subsequent write.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Rejects a prospective session of `teacher_id` on `date` that overlaps one they already teach
    ///
    /// `exclude_item_id` skips the session being rescheduled.
    ///
    /// # Returns
    /// - `Ok(())` - No overlapping session
    /// - `Err(RequestError::NotFound)` - Teacher does not exist
    /// - `Err(RequestError::ScheduleConflict)` - Overlap found, names the teacher
    pub async fn ensure_available(
        &self,
        teacher_id: i32,
        date: NaiveDate,
        begin: NaiveTime,
        end: NaiveTime,
        exclude_item_id: Option<i32>,
    ) -> Result<(), Error> {
        let teacher = PersonRepository::new(self.db)
            .lock(teacher_id)
            .await?
            .ok_or_else(|| RequestError::NotFound(format!("Teacher {} not found", teacher_id)))?;

        let course_ids: Vec<i32> = CourseRepository::new(self.db)
            .find_by_teacher(teacher_id)
            .await?
            .into_iter()
            .map(|c| c.course_id)
            .collect();

        let same_day = CourseItemRepository::new(self.db)
            .find_on_date(&course_ids, date, exclude_item_id)
            .await?;

        if let Some(clash) = same_day
            .iter()
            .find(|i| overlaps(i.class_begin_time, i.class_end_time, begin, end))
        {
            tracing::debug!(
                "Session {}-{} on {} for teacher ID {} clashes with item ID {}",
                begin,
                end,
                date,
                teacher_id,
                clash.item_id
            );

            return Err(RequestError::ScheduleConflict {
                teacher_name: teacher.name,
            }
            .into());
        }

        Ok(())
    }
}
