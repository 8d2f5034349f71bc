use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::EnvConfig;

/// Bearer guard for user administration routes: the token must equal the configured admin key.
pub async fn validate_admin_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let authorized = req
        .app_data::<web::Data<EnvConfig>>()
        .map(|config| !config.admin_key.is_empty() && credentials.token() == config.admin_key)
        .unwrap_or(false);

    if authorized {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
