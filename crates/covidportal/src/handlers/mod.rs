pub mod districts;
pub mod error;
pub mod states;

pub use error::AppError;
