//! Topic repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Select, Set,
};

use super::entities::topic::{self, ActiveModel, Entity as TopicEntity};
use crate::domain::Topic;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Topic repository trait for dependency injection.
///
/// Listings are newest first.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create(&self, user_id: i32, title: String, description: String) -> AppResult<Topic>;

    async fn list(&self) -> AppResult<Vec<Topic>>;

    async fn list_by_author(&self, user_id: i32) -> AppResult<Vec<Topic>>;
}

/// SeaORM-backed `TopicRepository`
pub struct TopicStore {
    db: DatabaseConnection,
}

impl TopicStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Newest first; id breaks ties between equal timestamps
fn newest_first(select: Select<TopicEntity>) -> Select<TopicEntity> {
    select
        .order_by_desc(topic::Column::CreatedAt)
        .order_by_desc(topic::Column::Id)
}

#[async_trait]
impl TopicRepository for TopicStore {
    async fn create(&self, user_id: i32, title: String, description: String) -> AppResult<Topic> {
        let active_model = ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            title: Set(title),
            description: Set(description),
            created_at: Set(Utc::now()),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write("Topic", e))?;
        Ok(Topic::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Topic>> {
        let models = newest_first(TopicEntity::find()).all(&self.db).await?;

        Ok(models.into_iter().map(Topic::from).collect())
    }

    async fn list_by_author(&self, user_id: i32) -> AppResult<Vec<Topic>> {
        let models = newest_first(TopicEntity::find().filter(topic::Column::UserId.eq(user_id)))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Topic::from).collect())
    }
}
