//! Custom extractors that turn rejections into [`AppError`](crate::AppError)
//! JSON responses.

pub mod id_path;
pub mod json;

pub use id_path::IdPath;
pub use json::AppJson;
