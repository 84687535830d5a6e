//! Application layer

pub mod handler;
pub mod queries;

pub use handler::ReportingHandler;
pub use queries::*;
