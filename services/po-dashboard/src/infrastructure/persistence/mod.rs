//! Persistence implementations

mod postgres;
mod rows;

pub use postgres::PostgresReportRepository;
