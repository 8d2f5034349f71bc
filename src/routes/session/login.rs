use actix_web::{post, web, HttpRequest};
use std::sync::Arc;

use crate::auth::AuthUser;
use crate::config::EnvConfig;
use crate::db::database_service::DatabaseService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::{LoginRes, RLogin};

#[post("/login")]
async fn login(
    req: HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    config: web::Data<EnvConfig>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    // Forwarding headers are client controlled, only the socket peer is recorded.
    let ip = req.peer_addr().map(|addr| addr.ip().to_string());

    let user = db
        .authenticate(&body.email, &body.password, ip, &config.login.policy())
        .await?;

    Ok(ApiResponse::Ok(LoginRes {
        session_id: user.get_id(),
        user: user.into(),
    }))
}
