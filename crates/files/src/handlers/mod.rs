pub mod error;
pub mod fallback;
pub mod files;
pub mod health;

pub use error::AppError;
