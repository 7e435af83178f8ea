pub mod health_service;
pub mod postal_service;

pub use health_service::*;
pub use postal_service::*;
