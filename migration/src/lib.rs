pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_category_table;
mod m20240301_000003_create_course_table;
mod m20240301_000004_create_lesson_table;
mod m20240301_000005_create_file_table;
mod m20240301_000006_create_chat_tables;
mod m20240301_000007_create_custom_learn_courses_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_category_table::Migration),
            Box::new(m20240301_000003_create_course_table::Migration),
            Box::new(m20240301_000004_create_lesson_table::Migration),
            Box::new(m20240301_000005_create_file_table::Migration),
            Box::new(m20240301_000006_create_chat_tables::Migration),
            Box::new(m20240301_000007_create_custom_learn_courses_table::Migration),
        ]
    }
}
