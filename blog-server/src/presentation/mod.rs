pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod utils;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::blog::create_post)
        .service(handlers::blog::get_posts)
        .service(handlers::blog::get_post)
        .service(handlers::blog::update_post)
        .service(handlers::blog::delete_post);
}
