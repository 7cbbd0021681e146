use std::sync::Arc;

use crate::application::validation::validate_inputs;
use crate::data::blog_repository::BlogRepository;
use crate::domain::blog::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::domain::error::{DomainError, Operation};
use crate::presentation::dto::BlogPostRequest;
use bson::Bson;
use bson::oid::ObjectId;
use serde_json::Value;
use tracing::instrument;

#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, request))]
    pub async fn create_post(&self, request: BlogPostRequest) -> Result<BlogPost, DomainError> {
        let (title, body, author) = checked_fields(request, Operation::Create)?;
        self.repo
            .insert(NewBlogPost::new(title, body, author))
            .await
            .map_err(|e| DomainError::store(Operation::Create, e))
    }

    pub async fn list_posts(&self) -> Result<Vec<BlogPost>, DomainError> {
        self.repo
            .find_all()
            .await
            .map_err(|e| DomainError::store(Operation::List, e))
    }

    pub async fn get_post(&self, id: &str) -> Result<BlogPost, DomainError> {
        let id = parse_id(id, Operation::Get)?;
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::store(Operation::Get, e))?
            .ok_or(DomainError::PostNotFound)
    }

    #[instrument(skip(self, request))]
    pub async fn update_post(&self, id: &str, request: BlogPostRequest) -> Result<(), DomainError> {
        let (title, body, author) = checked_fields(request, Operation::Update)?;
        let id = parse_id(id, Operation::Update)?;

        let matched = self
            .repo
            .update(id, BlogPostChanges::new(title, body, author))
            .await
            .map_err(|e| DomainError::store(Operation::Update, e))?;

        if matched {
            Ok(())
        } else {
            Err(DomainError::PostNotFound)
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        let id = parse_id(id, Operation::Delete)?;

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::store(Operation::Delete, e))?;

        if deleted {
            Ok(())
        } else {
            Err(DomainError::PostNotFound)
        }
    }
}

// Malformed identifiers share the store-failure path of the operation.
fn parse_id(id: &str, operation: Operation) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id).map_err(|e| DomainError::store(operation, e))
}

/// `title` and `body` must be present as non-blank strings; `author` is
/// passed through whatever its JSON type.
fn checked_fields(
    request: BlogPostRequest,
    operation: Operation,
) -> Result<(String, String, Option<Bson>), DomainError> {
    let title = request.title.as_ref().and_then(Value::as_str);
    let body = request.body.as_ref().and_then(Value::as_str);
    if validate_inputs(title, body) {
        return Err(DomainError::MissingFields);
    }
    let (Some(title), Some(body)) = (title, body) else {
        return Err(DomainError::MissingFields);
    };

    let author = request
        .author
        .map(|author| bson::to_bson(&author))
        .transpose()
        .map_err(|e| DomainError::store(operation, e))?;

    Ok((title.to_owned(), body.to_owned(), author))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory_repository::InMemoryBlogRepository;
    use serde_json::json;

    fn request(title: Option<&str>, body: Option<&str>, author: Option<&str>) -> BlogPostRequest {
        BlogPostRequest {
            title: title.map(Value::from),
            body: body.map(Value::from),
            author: author.map(Value::from),
        }
    }

    fn service() -> (BlogService, Arc<InMemoryBlogRepository>) {
        let repo = Arc::new(InMemoryBlogRepository::new());
        (BlogService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_rejects_blank_fields_without_writing() {
        let (service, repo) = service();

        let err = service
            .create_post(request(Some("   "), Some("World"), None))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingFields));
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn create_keeps_text_as_received() {
        let (service, _) = service();

        let post = service
            .create_post(request(Some(" Hi "), Some("World"), Some("ann")))
            .await
            .unwrap();

        assert_eq!(post.title, Some(Bson::from(" Hi ")));
        assert_eq!(post.author, Some(Bson::from("ann")));
        assert!(post.updated_at.is_none());
    }

    #[tokio::test]
    async fn malformed_id_is_a_store_failure_of_the_operation() {
        let (service, _) = service();

        let err = service.get_post("nope").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Store {
                operation: Operation::Get,
                ..
            }
        ));

        let err = service.delete_post("nope").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Store {
                operation: Operation::Delete,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn update_validates_before_parsing_the_id() {
        let (service, _) = service();

        let err = service
            .update_post("nope", request(None, Some("World"), None))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::MissingFields));
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_post_are_not_found() {
        let (service, _) = service();
        let id = ObjectId::new().to_hex();

        let err = service
            .update_post(&id, request(Some("Hi"), Some("World"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound));

        let err = service.delete_post(&id).await.unwrap_err();
        assert!(matches!(err, DomainError::PostNotFound));
    }

    #[tokio::test]
    async fn non_string_title_or_body_counts_as_missing() {
        let (service, repo) = service();

        for (title, body) in [(json!(5), json!("World")), (json!("Hi"), json!(["World"]))] {
            let err = service
                .create_post(BlogPostRequest {
                    title: Some(title),
                    body: Some(body),
                    author: None,
                })
                .await
                .unwrap_err();
            assert!(matches!(err, DomainError::MissingFields));
        }
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn author_is_stored_whatever_its_type() {
        let (service, _) = service();

        let post = service
            .create_post(BlogPostRequest {
                title: Some(json!("Hi")),
                body: Some(json!("World")),
                author: Some(json!({ "name": "ann", "id": 5 })),
            })
            .await
            .unwrap();

        assert_eq!(
            post.author,
            Some(Bson::Document(bson::doc! { "name": "ann", "id": 5_i64 }))
        );
    }
}
