use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        api::ListDto,
        planner::{EmployeeOptionDto, TeacherOptionDto},
    },
    server::{data::person::PersonRepository, error::Error},
};

/// Pick lists for the planner's forms
pub struct PeopleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PeopleService<'a> {
    /// Creates a new instance of [`PeopleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn teachers(&self) -> Result<ListDto<TeacherOptionDto>, Error> {
        let list: Vec<TeacherOptionDto> = PersonRepository::new(self.db)
            .find_by_role(Role::Teacher)
            .await?
            .into_iter()
            .map(|p| TeacherOptionDto {
                person_id: p.person_id,
                name: p.name,
            })
            .collect();

        Ok(ListDto {
            total: list.len() as u64,
            list,
        })
    }

    pub async fn employees(&self) -> Result<ListDto<EmployeeOptionDto>, Error> {
        let list: Vec<EmployeeOptionDto> = PersonRepository::new(self.db)
            .find_by_role(Role::Employee)
            .await?
            .into_iter()
            .map(|p| EmployeeOptionDto {
                person_id: p.person_id,
                person_name: p.name,
            })
            .collect();

        Ok(ListDto {
            total: list.len() as u64,
            list,
        })
    }
}
