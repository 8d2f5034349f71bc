use entity::file::{ActiveModel as FileActive, Entity as File, Model as FileModel};
use entity::lesson::{ActiveModel as LessonActive, Entity as Lesson, Model as LessonModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, ModelTrait, QueryOrder, Set};

use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, lesson::DBLessonCreate};

impl DatabaseService {
    pub async fn create_lesson(&self, payload: DBLessonCreate) -> Result<LessonModel, AppError> {
        Ok(LessonActive {
            name: Set(payload.name),
            description: Set(payload.description),
            text: Set(payload.text),
            course_id: Set(payload.course_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_lesson(&self, id: i32) -> Result<LessonModel, AppError> {
        Ok(Lesson::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Lesson not found".into()))?)
    }

    /// Removes the lesson together with its files and chat.
    pub async fn delete_lesson(&self, id: i32) -> Result<(), AppError> {
        let res = Lesson::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn add_lesson_file(&self, lesson_id: i32, name: String, url: String) -> Result<FileModel, AppError> {
        Ok(FileActive {
            name: Set(name),
            url: Set(url),
            lesson_id: Set(lesson_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn list_lesson_files(&self, lesson_id: i32) -> Result<Vec<FileModel>, AppError> {
        let lesson = self.get_lesson(lesson_id).await?;
        Ok(lesson
            .find_related(File)
            .order_by_asc(entity::file::Column::Id)
            .all(&self.database_connection)
            .await?)
    }
}
