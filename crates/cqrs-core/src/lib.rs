//! cuba-cqrs-core - CQRS 读侧核心库
//!
//! Query trait、QueryHandler 与查询中间件

mod middleware;
mod query;

pub use middleware::*;
pub use query::*;
