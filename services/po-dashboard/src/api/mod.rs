//! API layer - HTTP 报表接口

mod routes;

pub use routes::{
    AppState, HealthResponse, ReadinessResponse, RecentActivityParams, router,
};
