use entity::chat::{ActiveModel as ChatActive, Entity as Chat, Model as ChatModel};
use entity::chat_message::{ActiveModel as MessageActive, Entity as ChatMessage, Model as MessageModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;

impl DatabaseService {
    /// A lesson has at most one chat; a second one is `AlreadyExists`.
    pub async fn open_lesson_chat(&self, lesson_id: i32, name: String) -> Result<ChatModel, AppError> {
        Ok(ChatActive {
            name: Set(name),
            lesson_id: Set(lesson_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_lesson_chat(&self, lesson_id: i32) -> Result<Option<ChatModel>, AppError> {
        let lesson = self.get_lesson(lesson_id).await?;
        Ok(lesson.find_related(Chat).one(&self.database_connection).await?)
    }

    pub async fn get_chat(&self, id: i32) -> Result<ChatModel, AppError> {
        Ok(Chat::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Chat not found".into()))?)
    }

    /// Stores a message stamped with the time of this call.
    pub async fn post_chat_message(&self, chat_id: i32, user_id: i32, text: String) -> Result<MessageModel, AppError> {
        Ok(MessageActive {
            text: Set(text),
            chat_id: Set(chat_id),
            user_id: Set(user_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    /// Oldest first.
    pub async fn list_chat_messages(&self, chat_id: i32) -> Result<Vec<MessageModel>, AppError> {
        let chat = self.get_chat(chat_id).await?;
        Ok(chat
            .find_related(ChatMessage)
            .order_by_asc(entity::chat_message::Column::Datetime)
            .order_by_asc(entity::chat_message::Column::Id)
            .all(&self.database_connection)
            .await?)
    }
}
