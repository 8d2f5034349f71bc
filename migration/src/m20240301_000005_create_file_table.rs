use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum File {
    Table,
    Id,
    Name,
    Url,
    LessonId,
}

#[derive(DeriveIden)]
enum Lesson {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(File::Table)
                .if_not_exists()
                .col(ColumnDef::new(File::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(File::Name).string_len(64).not_null())
                .col(ColumnDef::new(File::Url).string_len(256).not_null())
                .col(ColumnDef::new(File::LessonId).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_file_lesson")
                        .from(File::Table, File::LessonId)
                        .to(Lesson::Table, Lesson::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;
        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(File::Table).if_exists().to_owned()).await
    }
}
