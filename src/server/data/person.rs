use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str, role: Role) -> Result<entity::person::Model, DbErr> {
        let person = entity::person::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            role: ActiveValue::Set(role),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn find_by_id(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }

    /// Persons matching any of `person_ids`, in no particular order
    pub async fn find_by_ids(&self, person_ids: &[i32]) -> Result<Vec<entity::person::Model>, DbErr> {
        if person_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Person::find()
            .filter(entity::person::Column::PersonId.is_in(person_ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// All persons holding `role`, ordered by ID
    pub async fn find_by_role(&self, role: Role) -> Result<Vec<entity::person::Model>, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Role.eq(role))
            .order_by_asc(entity::person::Column::PersonId)
            .all(self.db)
            .await
    }

    pub async fn count_by_role(&self, role: Role) -> Result<u64, DbErr> {
        entity::prelude::Person::find()
            .filter(entity::person::Column::Role.eq(role))
            .count(self.db)
            .await
    }

    /// Lock the person row until the surrounding transaction ends.
    ///
    /// Used to serialize scheduling of a teacher's sessions. SQLite ignores the lock.
    pub async fn lock(&self, person_id: i32) -> Result<Option<entity::person::Model>, DbErr> {
        use sea_orm::QuerySelect;

        entity::prelude::Person::find_by_id(person_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }
}
