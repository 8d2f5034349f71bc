use actix_web::{web, App, HttpServer};
use coursehub::auth::LoginManager;
use coursehub::config::{config, EnvConfig, CONFIG};
use coursehub::db::database_service::DatabaseService;
use coursehub::routes::configure_routes;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let _ = CONFIG.set(EnvConfig::from_env());
    let addr = format!("0.0.0.0:{}", config().port);

    let database_service = match DatabaseService::new(&config().db_url).await {
        Ok(service) => Arc::new(service),
        Err(e) => {
            error!("Failed to initialize database: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let login_manager = LoginManager::new(Arc::clone(&database_service));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config().clone()))
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(web::Data::new(login_manager.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
