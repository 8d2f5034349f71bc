use serde::{Deserialize, Serialize};

use crate::types::user::UserRes;

#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    pub email: String,
    pub password: String,
}

/// `session_id` is what the session layer stores and later hands back to the `LoginManager`.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub session_id: String,
    pub user: UserRes,
}
