use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Course {
    Table,
    Id,
    Name,
    CategoryId,
    UserId,
}

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Course::Table)
                .if_not_exists()
                .col(ColumnDef::new(Course::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Course::Name).string_len(64).not_null())
                .col(ColumnDef::new(Course::CategoryId).integer().not_null())
                .col(ColumnDef::new(Course::UserId).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_course_category")
                        .from(Course::Table, Course::CategoryId)
                        .to(Category::Table, Category::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_course_user")
                        .from(Course::Table, Course::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_course_category")
                .table(Course::Table)
                .col(Course::CategoryId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_course_user")
                .table(Course::Table)
                .col(Course::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Course::Table).if_exists().to_owned()).await
    }
}
