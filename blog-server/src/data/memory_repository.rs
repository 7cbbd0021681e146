//! In-memory and always-failing `BlogRepository`s used by the handler and
//! service tests.

use crate::data::blog_repository::BlogRepository;
use crate::domain::blog::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::domain::error::StoreError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::io;
use tokio::sync::RwLock;

/// Keeps documents in insertion order, which stands in for the store's
/// natural order.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Stores a document as-is, like a write from another client would.
    pub async fn insert_document(&self, post: BlogPost) {
        self.posts.write().await.push(post);
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let post = post.into_post(ObjectId::new());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<BlogPost>, StoreError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: ObjectId, changes: BlogPostChanges) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        match posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                changes.apply_to(post);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }
}

/// Every call fails as if the server had dropped the connection.
pub struct FailingBlogRepository;

impl FailingBlogRepository {
    fn unavailable() -> StoreError {
        let cause = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
        StoreError::Database(mongodb::error::Error::from(cause))
    }
}

#[async_trait]
impl BlogRepository for FailingBlogRepository {
    async fn insert(&self, _post: NewBlogPost) -> Result<BlogPost, StoreError> {
        Err(Self::unavailable())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        Err(Self::unavailable())
    }

    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<BlogPost>, StoreError> {
        Err(Self::unavailable())
    }

    async fn update(&self, _id: ObjectId, _changes: BlogPostChanges) -> Result<bool, StoreError> {
        Err(Self::unavailable())
    }

    async fn delete(&self, _id: ObjectId) -> Result<bool, StoreError> {
        Err(Self::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryBlogRepository::new();
        let post = repo
            .insert(NewBlogPost::new("Hi".into(), "World".into(), None))
            .await
            .unwrap();

        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(post));
        assert_eq!(repo.find_by_id(ObjectId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_anything_was_removed() {
        let repo = InMemoryBlogRepository::new();
        let post = repo
            .insert(NewBlogPost::new("Hi".into(), "World".into(), None))
            .await
            .unwrap();

        assert!(repo.delete(post.id).await.unwrap());
        assert!(!repo.delete(post.id).await.unwrap());
        assert_eq!(repo.len().await, 0);
    }
}
