//! Infrastructure Layer
//!
//! Database implementations and file storage.

pub mod postgres;
pub mod storage;

pub use postgres::PgEventRepository;
pub use storage::{ImageStore, ImageUpload};
