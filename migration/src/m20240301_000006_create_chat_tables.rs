use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Chat {
    Table,
    Id,
    Name,
    LessonId,
}

#[derive(DeriveIden)]
enum ChatMessage {
    Table,
    Id,
    Text,
    ChatId,
    UserId,
    Datetime,
}

#[derive(DeriveIden)]
enum Lesson {
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
        // One chat per lesson
        m.create_table(
            Table::create()
                .table(Chat::Table)
                .if_not_exists()
                .col(ColumnDef::new(Chat::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Chat::Name).string_len(127).not_null())
                .col(ColumnDef::new(Chat::LessonId).integer().not_null().unique_key())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_chat_lesson")
                        .from(Chat::Table, Chat::LessonId)
                        .to(Lesson::Table, Lesson::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(ChatMessage::Table)
                .if_not_exists()
                .col(ColumnDef::new(ChatMessage::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(ChatMessage::Text).text().not_null())
                .col(ColumnDef::new(ChatMessage::ChatId).integer().not_null())
                .col(ColumnDef::new(ChatMessage::UserId).integer().not_null())
                .col(
                    ColumnDef::new(ChatMessage::Datetime)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_chat_message_chat")
                        .from(ChatMessage::Table, ChatMessage::ChatId)
                        .to(Chat::Table, Chat::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_chat_message_user")
                        .from(ChatMessage::Table, ChatMessage::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_chat_message_chat")
                .table(ChatMessage::Table)
                .col(ChatMessage::ChatId)
                .col(ChatMessage::Datetime)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(ChatMessage::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Chat::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
