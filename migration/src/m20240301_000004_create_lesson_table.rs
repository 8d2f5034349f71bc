use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Lesson {
    Table,
    Id,
    Name,
    Description,
    Text,
    CourseId,
}

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Lesson::Table)
                .if_not_exists()
                .col(ColumnDef::new(Lesson::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Lesson::Name).string_len(64).not_null())
                .col(ColumnDef::new(Lesson::Description).string_len(127))
                .col(ColumnDef::new(Lesson::Text).text())
                .col(ColumnDef::new(Lesson::CourseId).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_lesson_course")
                        .from(Lesson::Table, Lesson::CourseId)
                        .to(Course::Table, Course::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_lesson_course")
                .table(Lesson::Table)
                .col(Lesson::CourseId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Lesson::Table).if_exists().to_owned()).await
    }
}
