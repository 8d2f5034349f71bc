use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::{debug, info, warn};

use crate::auth::{Credential, LoginPolicy, UserLoader};
use crate::db::{database_service::DatabaseService, for_update};
use crate::types::{error::AppError, user::RUserCreate};

impl DatabaseService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn find_user_by_id(&self, id: i32) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.database_connection).await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(self
            .find_user_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Signup: create user with a freshly hashed password.
    pub async fn create_user(&self, payload: RUserCreate) -> Result<i32, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }

        let mut am = UserActive {
            name: Set(payload.name),
            email: Set(payload.email),
            bad_logins: Set(0),
            last_attempt: Set(None),
            last_login_ip: Set(None),
            ..Default::default()
        };
        am.set_password(&payload.password)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        // Racing signups are still caught by the unique index.
        let user = am.insert(&self.database_connection).await?;
        info!(user_id = user.id, "user created");
        Ok(user.id)
    }

    pub async fn update_user_password(&self, user_id: i32, password: &str) -> Result<(), AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        am.set_password(password)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(am.update(&self.database_connection).await.map(|_| ())?)
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        let res = User::delete_by_id(user_id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Password login with attempt tracking.
    ///
    /// Every attempt stamps `last_attempt`. A failure bumps `bad_logins`; a success
    /// clears it and records `ip` as `last_login_ip`. While `policy` considers the
    /// user locked the password is not even checked.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        ip: Option<String>,
        policy: &LoginPolicy,
    ) -> Result<UserModel, AppError> {
        let txn = self.database_connection.begin().await?;

        // Row lock so parallel attempts queue up behind each other.
        let Some(user) = for_update(&txn, User::find().filter(entity::user::Column::Email.eq(email)))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            debug!("login for unknown email");
            return Err(AppError::Unauthorized);
        };

        let now = Utc::now();

        if policy.is_locked(&user, now) {
            let mut am: UserActive = user.into();
            am.last_attempt = Set(Some(now));
            am.update(&txn).await?;
            txn.commit().await?;
            warn!("login refused, account locked");
            return Err(AppError::TooManyAttempts);
        }

        if user.verify_password(password) {
            let mut am: UserActive = user.into();
            am.last_attempt = Set(Some(now));
            am.bad_logins = Set(0);
            am.last_login_ip = Set(ip);
            let user = am.update(&txn).await?;
            txn.commit().await?;
            info!(user_id = user.id, "login succeeded");
            Ok(user)
        } else {
            // Incremented in SQL, never from the value read above.
            User::update_many()
                .col_expr(
                    entity::user::Column::BadLogins,
                    Expr::col(entity::user::Column::BadLogins).add(1),
                )
                .col_expr(entity::user::Column::LastAttempt, Expr::value(Some(now)))
                .filter(entity::user::Column::Id.eq(user.id))
                .exec(&txn)
                .await?;
            txn.commit().await?;
            warn!(user_id = user.id, "login failed");
            Err(AppError::Unauthorized)
        }
    }
}

#[async_trait]
impl UserLoader for DatabaseService {
    type User = UserModel;

    /// Session identifiers are stringified primary keys; anything else names nobody.
    async fn load_user(&self, user_id: &str) -> Result<Option<UserModel>, AppError> {
        match user_id.trim().parse::<i32>() {
            Ok(id) => self.find_user_by_id(id).await,
            Err(_) => {
                debug!("malformed session user id {user_id:?}");
                Ok(None)
            }
        }
    }
}
