use entity::user::Model as UserModel;
use serde::{Deserialize, Serialize};

/// Body of `POST /user`.
#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserCreateRes {
    pub id: i32,
    pub message: String,
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRes {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<UserModel> for UserRes {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
