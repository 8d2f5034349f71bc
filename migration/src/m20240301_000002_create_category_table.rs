use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Category {
    Table,
    Id,
    Name,
    Description,
    ParentId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Category::Table)
                .if_not_exists()
                .col(ColumnDef::new(Category::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Category::Name).string_len(64).not_null())
                .col(ColumnDef::new(Category::Description).string_len(127))
                .col(ColumnDef::new(Category::ParentId).integer())
                // Deleting a category that still has children is refused.
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_category_parent")
                        .from(Category::Table, Category::ParentId)
                        .to(Category::Table, Category::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_category_parent")
                .table(Category::Table)
                .col(Category::ParentId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Category::Table).if_exists().to_owned()).await
    }
}
