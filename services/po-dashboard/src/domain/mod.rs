//! Domain layer

pub mod order_status;
pub mod reports;
pub mod repository;

pub use order_status::*;
pub use reports::*;
pub use repository::*;
