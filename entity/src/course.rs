use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category_id: i32,      // FK -> category.id
    pub user_id: i32,          // FK -> user.id (creator)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to   = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Category,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,

    #[sea_orm(has_many = "super::lesson::Entity")]
    Lesson,

    #[sea_orm(has_many = "super::custom_learn_courses::Entity")]
    CustomLearnCourses,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef { Relation::Category.def() }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef { Relation::Lesson.def() }
}

impl Related<super::custom_learn_courses::Entity> for Entity {
    fn to() -> RelationDef { Relation::CustomLearnCourses.def() }
}

/// Users enrolled in this course.
#[derive(Debug)]
pub struct Students;

impl Linked for Students {
    type FromEntity = Entity;
    type ToEntity = super::user::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::custom_learn_courses::Relation::Course.def().rev(),
            super::custom_learn_courses::Relation::User.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
