#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{web, App};
use coursehub::auth::LoginManager;
use coursehub::config::{EnvConfig, LoginConfig};
use coursehub::db::database_service::DatabaseService;

pub const ADMIN_KEY: &str = "test_admin_key";

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh, migrated database per test. In-memory SQLite unless `TEST_DATABASE_URL` is set.
    pub async fn new() -> TestContext {
        let db_url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

        let db = Arc::new(
            DatabaseService::new(&db_url)
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }

    pub async fn create_test_user(&self, email: &str, password: &str) -> i32 {
        self.db
            .create_user(test_data::user_with(email, password))
            .await
            .expect("Failed to create user")
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(get_test_config()))
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(LoginManager::new(Arc::clone(&self.db))))
            .configure(coursehub::routes::configure_routes)
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(), // Not used in tests
        admin_key: ADMIN_KEY.to_string(),
        login: LoginConfig::from_secs(3, 600).expect("valid login config"),
    }
}

// Test data helpers
pub mod test_data {
    use coursehub::types::lesson::DBLessonCreate;
    use coursehub::types::user::RUserCreate;

    pub fn sample_user() -> RUserCreate {
        user_with("test@example.com", "correct horse battery staple")
    }

    pub fn user_with(email: &str, password: &str) -> RUserCreate {
        RUserCreate {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn lesson(course_id: i32, name: &str) -> DBLessonCreate {
        DBLessonCreate {
            course_id,
            name: name.to_string(),
            description: Some("short".to_string()),
            text: Some("long form body".to_string()),
        }
    }
}
