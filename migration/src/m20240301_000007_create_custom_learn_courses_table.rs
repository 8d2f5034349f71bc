use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CustomLearnCourses {
    Table,
    UserId,
    CourseId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // Create custom_learn_courses join table
        m.create_table(
            Table::create()
                .table(CustomLearnCourses::Table)
                .if_not_exists()
                .col(ColumnDef::new(CustomLearnCourses::UserId).integer().not_null())
                .col(ColumnDef::new(CustomLearnCourses::CourseId).integer().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_custom_learn_courses")
                        .col(CustomLearnCourses::UserId)
                        .col(CustomLearnCourses::CourseId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_custom_learn_courses_user")
                        .from(CustomLearnCourses::Table, CustomLearnCourses::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_custom_learn_courses_course")
                        .from(CustomLearnCourses::Table, CustomLearnCourses::CourseId)
                        .to(Course::Table, Course::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_custom_learn_courses_course")
                .table(CustomLearnCourses::Table)
                .col(CustomLearnCourses::CourseId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(CustomLearnCourses::Table).if_exists().to_owned()).await
    }
}
