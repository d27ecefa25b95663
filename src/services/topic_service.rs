//! Topic service - opening and listing topics.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Topic;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Topic service trait for dependency injection.
#[async_trait]
pub trait TopicService: Send + Sync {
    /// Open a topic. An unknown author is a `Validation` error.
    async fn create_topic(&self, user_id: i32, title: String, description: String)
        -> AppResult<Topic>;

    /// Every topic, newest first
    async fn list_topics(&self) -> AppResult<Vec<Topic>>;

    /// Topics opened by one user, newest first
    async fn list_topics_by_author(&self, user_id: i32) -> AppResult<Vec<Topic>>;
}

/// Concrete implementation of TopicService using Unit of Work.
pub struct TopicCatalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TopicCatalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TopicService for TopicCatalog<U> {
    async fn create_topic(
        &self,
        user_id: i32,
        title: String,
        description: String,
    ) -> AppResult<Topic> {
        let topic = self.uow.topics().create(user_id, title, description).await?;
        tracing::info!(topic_id = topic.id, user_id, "Topic created");
        Ok(topic)
    }

    async fn list_topics(&self) -> AppResult<Vec<Topic>> {
        self.uow.topics().list().await
    }

    async fn list_topics_by_author(&self, user_id: i32) -> AppResult<Vec<Topic>> {
        self.uow.topics().list_by_author(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::repositories::MockTopicRepository;
    use crate::services::test_support::{at, TestUnitOfWork};
    use mockall::predicate::eq;

    fn topic(id: i32, user_id: i32) -> Topic {
        Topic {
            id,
            user_id,
            title: format!("topic {}", id),
            description: String::new(),
            created_at: at(id as i64),
        }
    }

    #[tokio::test]
    async fn test_create_topic_passes_fields_through() {
        let mut repo = MockTopicRepository::new();
        repo.expect_create()
            .with(eq(3), eq("Rust?".to_string()), eq("Why not.".to_string()))
            .times(1)
            .returning(|user_id, title, description| {
                Ok(Topic {
                    id: 10,
                    user_id,
                    title,
                    description,
                    created_at: at(0),
                })
            });

        let catalog = TopicCatalog::new(Arc::new(TestUnitOfWork::with_topics(repo)));
        let created = catalog
            .create_topic(3, "Rust?".into(), "Why not.".into())
            .await
            .unwrap();

        assert_eq!(created.id, 10);
        assert_eq!(created.user_id, 3);
    }

    #[tokio::test]
    async fn test_create_topic_propagates_store_rejection() {
        let mut repo = MockTopicRepository::new();
        repo.expect_create()
            .returning(|_, _, _| Err(AppError::validation("Topic references a missing user or topic")));

        let catalog = TopicCatalog::new(Arc::new(TestUnitOfWork::with_topics(repo)));
        let result = catalog.create_topic(99, "t".into(), "d".into()).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_list_topics_by_author_filters_on_author() {
        let mut repo = MockTopicRepository::new();
        repo.expect_list_by_author()
            .with(eq(5))
            .returning(|user_id| Ok(vec![topic(2, user_id), topic(1, user_id)]));

        let catalog = TopicCatalog::new(Arc::new(TestUnitOfWork::with_topics(repo)));
        let topics = catalog.list_topics_by_author(5).await.unwrap();

        assert_eq!(topics.len(), 2);
        assert!(topics.iter().all(|t| t.user_id == 5));
    }
}
