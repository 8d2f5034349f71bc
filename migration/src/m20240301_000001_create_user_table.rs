use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(User::Name)
                            .string_len(64)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(User::Email)
                            .string_len(64)
                            .not_null()
                            .unique_key()
                    )
                    .col(ColumnDef::new(User::PasswordHash).string_len(128))
                    .col(
                        ColumnDef::new(User::BadLogins)
                            .integer()
                            .not_null()
                            .default(0)
                    )
                    .col(ColumnDef::new(User::LastAttempt).timestamp_with_time_zone())
                    .col(ColumnDef::new(User::LastLoginIp).string_len(128))
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(User::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    BadLogins,
    LastAttempt,
    LastLoginIp,
}
