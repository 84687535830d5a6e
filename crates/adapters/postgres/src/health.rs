//! PostgreSQL 健康检查模块
//!
//! 提供连接池级别的健康检查

use std::time::{Duration, Instant};

use cuba_errors::AppResult;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, error};

use crate::error::map_sqlx_error;

/// 健康检查结果
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    /// 是否健康
    pub healthy: bool,
    /// 延迟（毫秒）
    pub latency_ms: Option<u64>,
    /// 错误信息
    pub error: Option<String>,
    /// 连接池状态
    pub pool_status: PoolHealthStatus,
    /// 数据库版本
    pub db_version: Option<String>,
}

/// 连接池健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolHealthStatus {
    /// 连接池大小
    pub size: u32,
    /// 空闲连接数
    pub idle: u32,
    /// 活跃连接数
    pub active: u32,
}

impl PoolHealthStatus {
    pub fn new(size: u32, idle: u32) -> Self {
        Self {
            size,
            idle,
            active: size.saturating_sub(idle),
        }
    }
}

/// 健康检查器
#[derive(Clone)]
pub struct HealthChecker {
    pool: PgPool,
    timeout: Duration,
}

impl HealthChecker {
    /// 创建新的健康检查器
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            timeout: Duration::from_secs(5),
        }
    }

    /// 设置超时时间
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 获取连接池状态
    pub fn pool_status(&self) -> PoolHealthStatus {
        PoolHealthStatus::new(self.pool.size(), self.pool.num_idle() as u32)
    }

    /// 执行健康检查
    pub async fn check(&self) -> HealthCheckResult {
        let start = Instant::now();

        match tokio::time::timeout(self.timeout, self.server_version()).await {
            Ok(Ok(db_version)) => {
                let latency = start.elapsed().as_millis() as u64;
                debug!(latency_ms = latency, "PostgreSQL health check passed");

                HealthCheckResult {
                    healthy: true,
                    latency_ms: Some(latency),
                    error: None,
                    pool_status: self.pool_status(),
                    db_version: Some(db_version),
                }
            }
            Ok(Err(e)) => {
                error!(error = %e, "PostgreSQL health check failed");
                self.unhealthy(e.to_string())
            }
            Err(_) => {
                error!("PostgreSQL health check timed out");
                self.unhealthy("Health check timed out".to_string())
            }
        }
    }

    fn unhealthy(&self, error: String) -> HealthCheckResult {
        HealthCheckResult {
            healthy: false,
            latency_ms: None,
            error: Some(error),
            pool_status: self.pool_status(),
            db_version: None,
        }
    }

    async fn server_version(&self) -> AppResult<String> {
        let row: (String,) = sqlx::query_as("SELECT version()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Health check failed", e))?;

        Ok(row.0)
    }
}
