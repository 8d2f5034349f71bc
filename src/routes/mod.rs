use crate::utils::webutils::validate_admin_token;
use actix_web::web;

pub mod health;
pub mod session;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin_token);

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/user")
            .service(user::create::create)
            .service(user::show::show)
            .wrap(admin_auth)
    );
    cfg.service(
        web::scope("/session").service(session::login::login)
    );
}
