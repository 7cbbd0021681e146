use crate::application::blog_service::BlogService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{BlogPostRequest, BlogPostResponse, MessageResponse};
use crate::presentation::middleware::RequestId;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, delete, get, post, put, web};
use tracing::info;

#[post("/blogs")]
pub async fn create_post(
    req: HttpRequest,
    service: web::Data<BlogService>,
    payload: BlogPostRequest,
) -> Result<HttpResponse, DomainError> {
    let post = service.create_post(payload).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post created"
    );

    Ok(HttpResponse::Created().json(BlogPostResponse::from(post)))
}

#[get("/blogs")]
pub async fn get_posts(
    req: HttpRequest,
    service: web::Data<BlogService>,
) -> Result<HttpResponse, DomainError> {
    let posts: Vec<BlogPostResponse> = service
        .list_posts()
        .await?
        .into_iter()
        .map(BlogPostResponse::from)
        .collect();

    info!(
        request_id = %request_id(&req),
        total = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}

#[get("/blogs/{id}")]
pub async fn get_post(
    service: web::Data<BlogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post = service.get_post(&path).await?;
    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

#[put("/blogs/{id}")]
pub async fn update_post(
    req: HttpRequest,
    service: web::Data<BlogService>,
    path: web::Path<String>,
    payload: BlogPostRequest,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    service.update_post(&post_id, payload).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post updated"
    );

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "updated successfully",
    }))
}

#[delete("/blogs/{id}")]
pub async fn delete_post(
    req: HttpRequest,
    service: web::Data<BlogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    service.delete_post(&post_id).await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post_id,
        "post deleted"
    );

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "post deleted successfully",
    }))
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
