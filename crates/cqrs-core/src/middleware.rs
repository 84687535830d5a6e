//! 查询中间件
//!
//! 包装任意 `QueryHandler`，为每次查询记录日志和耗时指标。
//! 结果与错误原样透传，不做重试。

use std::fmt::Debug;
use std::time::Instant;

use async_trait::async_trait;
use cuba_errors::AppResult;
use metrics::{counter, histogram};
use tracing::{debug, warn};

use crate::{Query, QueryHandler};

/// 带日志与指标的查询处理器
pub struct Instrumented<H> {
    inner: H,
}

impl<H> Instrumented<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<Q, H> QueryHandler<Q> for Instrumented<H>
where
    Q: Query + Debug + 'static,
    H: QueryHandler<Q>,
{
    async fn handle(&self, query: Q) -> AppResult<Q::Result> {
        let name = query.name();
        debug!(query = name, params = ?query, "Executing query");

        let start = Instant::now();
        let result = self.inner.handle(query).await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        counter!(
            "report_queries_total",
            "query" => name,
            "success" => result.is_ok().to_string()
        )
        .increment(1);
        histogram!("report_query_duration_ms", "query" => name).record(elapsed_ms);

        match &result {
            Ok(_) => debug!(query = name, elapsed_ms, "Query executed successfully"),
            Err(e) => warn!(query = name, elapsed_ms, error = %e, "Query failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuba_errors::AppError;

    #[derive(Debug)]
    struct Echo(i64);

    impl Query for Echo {
        type Result = i64;

        fn name(&self) -> &'static str {
            "echo"
        }
    }

    struct EchoHandler;

    #[async_trait]
    impl QueryHandler<Echo> for EchoHandler {
        async fn handle(&self, query: Echo) -> AppResult<i64> {
            if query.0 < 0 {
                return Err(AppError::connection("database unreachable"));
            }
            Ok(query.0)
        }
    }

    #[tokio::test]
    async fn test_instrumented_passes_result_through() {
        let handler = Instrumented::new(EchoHandler);
        assert_eq!(handler.handle(Echo(7)).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_instrumented_propagates_error_unmodified() {
        let handler = Instrumented::new(EchoHandler);
        let err = handler.handle(Echo(-1)).await.unwrap_err();
        assert!(matches!(err, AppError::Connection(msg) if msg == "database unreachable"));
    }
}
