use sea_orm::{sea_query::TableCreateStatement, DbBackend, Schema};

/// Statements creating every training table, ordered so foreign keys resolve.
pub fn training_table_statements() -> Vec<TableCreateStatement> {
    let schema = Schema::new(DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(entity::prelude::Person),
        schema.create_table_from_entity(entity::prelude::Account),
        schema.create_table_from_entity(entity::prelude::AuthSession),
        schema.create_table_from_entity(entity::prelude::TrainingPlan),
        schema.create_table_from_entity(entity::prelude::Course),
        schema.create_table_from_entity(entity::prelude::PlanCourseItem),
        schema.create_table_from_entity(entity::prelude::PlanEmployee),
        schema.create_table_from_entity(entity::prelude::AttendanceEvaluation),
    ]
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_training_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;
            setup
                .with_tables($crate::setup::training_table_statements())
                .await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
