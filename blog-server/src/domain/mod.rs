pub mod blog;
pub mod error;
