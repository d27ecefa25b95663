//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find any user holding either the username or the email
    async fn find_by_username_or_email(&self, username: &str, email: &str)
        -> AppResult<Option<User>>;

    /// Insert a user. A taken username or email surfaces as `Conflict`.
    async fn create(&self, username: String, email: String, password_hash: String)
        -> AppResult<User>;
}

/// SeaORM-backed `UserRepository`
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(username))
                    .add(user::Column::Email.eq(email)),
            )
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn create(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(username),
            email: Set(email),
            password: Set(password_hash),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write("User", e))?;
        Ok(User::from(model))
    }
}
