pub mod blog_repository;
#[cfg(test)]
pub mod memory_repository;
