pub mod blog_service;
pub mod validation;
