use actix_web::{post, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserCreateRes};

#[post("")]
async fn create(
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let body = body.into_inner();
    if body.email.trim().is_empty() || !body.email.contains('@') {
        return Err(AppError::Validation("email is invalid".into()));
    }
    if body.password.is_empty() {
        return Err(AppError::Validation("password must not be empty".into()));
    }

    let id = db.create_user(body).await?;

    Ok(ApiResponse::Created(UserCreateRes {
        id,
        message: "User created".to_string(),
    }))
}
