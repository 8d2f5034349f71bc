use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub bad_logins: i32,
    pub last_attempt: Option<DateTimeUtc>,
    pub last_login_ip: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course::Entity")]
    Course,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
    #[sea_orm(has_many = "super::custom_learn_courses::Entity")]
    CustomLearnCourses,
}

/// Courses this user created.
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessage.def()
    }
}

impl Related<super::custom_learn_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomLearnCourses.def()
    }
}

/// Courses this user is enrolled in, through `custom_learn_courses`.
#[derive(Debug)]
pub struct LearnCourses;

impl Linked for LearnCourses {
    type FromEntity = Entity;
    type ToEntity = super::course::Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::custom_learn_courses::Relation::User.def().rev(),
            super::custom_learn_courses::Relation::Course.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
