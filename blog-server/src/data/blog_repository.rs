use crate::domain::blog::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::domain::error::StoreError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{DateTime as BsonDateTime, doc};
use futures_util::TryStreamExt;
use mongodb::{Collection, Database};
use tracing::error;

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, StoreError>;
    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<BlogPost>, StoreError>;
    /// Returns `false` when no document matched `id`.
    async fn update(&self, id: ObjectId, changes: BlogPostChanges) -> Result<bool, StoreError>;
    /// Returns `false` when no document matched `id`.
    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError>;
}

#[derive(Clone)]
pub struct MongoBlogRepository {
    collection: Collection<BlogPost>,
}

impl MongoBlogRepository {
    pub fn new(database: &Database, collection: &str) -> Self {
        Self {
            collection: database.collection(collection),
        }
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let result = self
            .collection
            .clone_with_type::<NewBlogPost>()
            .insert_one(&post)
            .await
            .map_err(|e| {
                error!("failed to create post: {}", e);
                StoreError::from(e)
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;

        Ok(post.into_post(id))
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, StoreError> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            error!("db error while fetching posts: {}", e);
            StoreError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            error!("db error while reading posts cursor: {}", e);
            StoreError::from(e)
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<BlogPost>, StoreError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                error!("db error find_by_id {}: {}", id, e);
                StoreError::from(e)
            })
    }

    async fn update(&self, id: ObjectId, changes: BlogPostChanges) -> Result<bool, StoreError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "title": changes.title,
                        "body": changes.body,
                        "author": changes.author,
                        "updatedAt": BsonDateTime::from_chrono(changes.updated_at),
                    }
                },
            )
            .await
            .map_err(|e| {
                error!("failed to update post {}: {}", id, e);
                StoreError::from(e)
            })?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                error!("failed to delete post {}: {}", id, e);
                StoreError::from(e)
            })?;

        Ok(result.deleted_count > 0)
    }
}
