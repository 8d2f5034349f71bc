use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct HealthRes {
    pub status: String,
    pub database: bool,
}

#[get("")]
async fn health(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<HealthRes> {
    let database = db.connection().ping().await.is_ok();
    let status = if database { "ok" } else { "degraded" };

    Ok(ApiResponse::Ok(HealthRes { status: status.to_string(), database }))
}
