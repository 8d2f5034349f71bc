use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DBLessonCreate {
    pub course_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub text: Option<String>,
}
