//! Query trait 定义

use async_trait::async_trait;
use cuba_errors::AppResult;

/// Query trait
pub trait Query: Send + Sync {
    type Result: Send;

    /// 查询名称，用作日志字段与指标标签
    fn name(&self) -> &'static str;
}

/// Query Handler trait
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    async fn handle(&self, query: Q) -> AppResult<Q::Result>;
}
