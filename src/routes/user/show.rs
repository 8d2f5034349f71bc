use actix_web::{get, web};

use crate::auth::LoginManager;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("/{id}")]
async fn show(
    login_manager: web::Data<LoginManager<DatabaseService>>,
    path: web::Path<String>,
) -> ApiResult<UserRes> {
    let user = login_manager
        .current_user(Some(path.as_str()))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(ApiResponse::Ok(user.into()))
}
