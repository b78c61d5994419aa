pub mod anime;
pub mod error;
pub mod greet;

pub use error::ApiError;
