pub mod error;
pub mod extract;
pub mod fallback;
pub mod health;
pub mod items;

pub use error::AppError;
