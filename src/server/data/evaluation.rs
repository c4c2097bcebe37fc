use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use entity::attendance_evaluation::Column;

/// Weight of the teacher score for rows created by a self-evaluation
pub static DEFAULT_SCORE_RATIO: f64 = 0.5;

pub struct EvaluationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EvaluationRepository<'a, C> {
    /// Creates a new instance of [`EvaluationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        person_id: i32,
        item_id: i32,
    ) -> Result<Option<entity::attendance_evaluation::Model>, DbErr> {
        entity::prelude::AttendanceEvaluation::find_by_id((person_id, item_id))
            .one(self.db)
            .await
    }

    /// Writes the self-evaluation columns of `(person_id, item_id)`.
    ///
    /// Inserts the row when absent. On conflict only the self columns and `updated_at`
    /// change, so a concurrent teacher grading of the same row is never overwritten.
    pub async fn upsert_self(
        &self,
        person_id: i32,
        item_id: i32,
        self_score: f64,
        self_comment: &str,
    ) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        let evaluation = entity::attendance_evaluation::ActiveModel {
            person_id: ActiveValue::Set(person_id),
            item_id: ActiveValue::Set(item_id),
            self_score: ActiveValue::Set(Some(self_score)),
            self_comment: ActiveValue::Set(self_comment.to_string()),
            teacher_score: ActiveValue::Set(None),
            teacher_comment: ActiveValue::Set(String::new()),
            score_ratio: ActiveValue::Set(DEFAULT_SCORE_RATIO),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        entity::prelude::AttendanceEvaluation::insert(evaluation)
            .on_conflict(
                OnConflict::columns([Column::PersonId, Column::ItemId])
                    .update_columns([Column::SelfScore, Column::SelfComment, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Writes the teacher columns of an existing row, leaving the self columns untouched.
    ///
    /// Returns the number of rows updated, 0 when no self-evaluation exists.
    pub async fn update_teacher(
        &self,
        person_id: i32,
        item_id: i32,
        teacher_score: f64,
        teacher_comment: &str,
        score_ratio: f64,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::AttendanceEvaluation::update_many()
            .col_expr(Column::TeacherScore, Expr::value(Some(teacher_score)))
            .col_expr(Column::TeacherComment, Expr::value(teacher_comment))
            .col_expr(Column::ScoreRatio, Expr::value(score_ratio))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(Column::PersonId.eq(person_id))
            .filter(Column::ItemId.eq(item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn find_by_person(
        &self,
        person_id: i32,
    ) -> Result<Vec<entity::attendance_evaluation::Model>, DbErr> {
        entity::prelude::AttendanceEvaluation::find()
            .filter(Column::PersonId.eq(person_id))
            .order_by_asc(Column::ItemId)
            .all(self.db)
            .await
    }

    /// Evaluations of any of `item_ids`, ordered by item then creation time
    pub async fn find_by_items(
        &self,
        item_ids: &[i32],
    ) -> Result<Vec<entity::attendance_evaluation::Model>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::AttendanceEvaluation::find()
            .filter(Column::ItemId.is_in(item_ids.iter().copied()))
            .order_by_asc(Column::ItemId)
            .order_by_asc(Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::attendance_evaluation::Model>, DbErr> {
        entity::prelude::AttendanceEvaluation::find()
            .order_by_asc(Column::ItemId)
            .all(self.db)
            .await
    }

    pub async fn count_by_item(&self, item_id: i32) -> Result<u64, DbErr> {
        entity::prelude::AttendanceEvaluation::find()
            .filter(Column::ItemId.eq(item_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_person_in_items(
        &self,
        person_id: i32,
        item_ids: &[i32],
    ) -> Result<u64, DbErr> {
        if item_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::AttendanceEvaluation::find()
            .filter(Column::PersonId.eq(person_id))
            .filter(Column::ItemId.is_in(item_ids.iter().copied()))
            .count(self.db)
            .await
    }

    pub async fn delete_by_items(&self, item_ids: &[i32]) -> Result<u64, DbErr> {
        if item_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::AttendanceEvaluation::delete_many()
            .filter(Column::ItemId.is_in(item_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_by_person_in_items(
        &self,
        person_id: i32,
        item_ids: &[i32],
    ) -> Result<u64, DbErr> {
        if item_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::AttendanceEvaluation::delete_many()
            .filter(Column::PersonId.eq(person_id))
            .filter(Column::ItemId.is_in(item_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
