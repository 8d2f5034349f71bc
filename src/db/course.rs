use entity::course::{ActiveModel as CourseActive, Entity as Course, Model as CourseModel};
use entity::custom_learn_courses::{ActiveModel as EnrollmentActive, Entity as Enrollment};
use entity::lesson::{Entity as Lesson, Model as LessonModel};
use entity::user::Model as UserModel;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;

impl DatabaseService {
    /// Category and creator are not looked up first; the foreign keys reject dangling ids.
    pub async fn create_course(&self, name: String, category_id: i32, creator_id: i32) -> Result<CourseModel, AppError> {
        Ok(CourseActive {
            name: Set(name),
            category_id: Set(category_id),
            user_id: Set(creator_id),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn get_course(&self, id: i32) -> Result<CourseModel, AppError> {
        Ok(Course::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Course not found".into()))?)
    }

    pub async fn list_courses_by_creator(&self, user_id: i32) -> Result<Vec<CourseModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user
            .find_related(Course)
            .order_by_asc(entity::course::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn rename_course(&self, id: i32, name: String) -> Result<CourseModel, AppError> {
        let mut am: CourseActive = self.get_course(id).await?.into();
        am.name = Set(name);
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_course(&self, id: i32) -> Result<(), AppError> {
        let res = Course::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Enrolling twice is reported as `AlreadyExists`.
    pub async fn enroll_user(&self, user_id: i32, course_id: i32) -> Result<(), AppError> {
        Enrollment::insert(EnrollmentActive {
            user_id: Set(user_id),
            course_id: Set(course_id),
        })
        .exec_without_returning(&self.database_connection)
        .await?;
        Ok(())
    }

    pub async fn unenroll_user(&self, user_id: i32, course_id: i32) -> Result<(), AppError> {
        let res = Enrollment::delete_many()
            .filter(entity::custom_learn_courses::Column::UserId.eq(user_id))
            .filter(entity::custom_learn_courses::Column::CourseId.eq(course_id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Courses the user follows, as opposed to the ones they created.
    pub async fn list_learn_courses(&self, user_id: i32) -> Result<Vec<CourseModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user
            .find_linked(entity::user::LearnCourses)
            .order_by_asc(entity::course::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn list_course_students(&self, course_id: i32) -> Result<Vec<UserModel>, AppError> {
        let course = self.get_course(course_id).await?;
        Ok(course
            .find_linked(entity::course::Students)
            .order_by_asc(entity::user::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Lessons in the order they were added.
    pub async fn list_course_lessons(&self, course_id: i32) -> Result<Vec<LessonModel>, AppError> {
        let course = self.get_course(course_id).await?;
        Ok(course
            .find_related(Lesson)
            .order_by_asc(entity::lesson::Column::Id)
            .all(&self.database_connection)
            .await?)
    }
}
