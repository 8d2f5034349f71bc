use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lesson")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub text: Option<String>,
    pub course_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to   = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,

    #[sea_orm(has_many = "super::file::Entity")]
    File,

    #[sea_orm(has_one = "super::chat::Entity")]
    Chat,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef { Relation::Course.def() }
}

impl Related<super::file::Entity> for Entity {
    fn to() -> RelationDef { Relation::File.def() }
}

impl Related<super::chat::Entity> for Entity {
    fn to() -> RelationDef { Relation::Chat.def() }
}

impl ActiveModelBehavior for ActiveModel {}
