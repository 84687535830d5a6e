//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use std::sync::Arc;
use std::time::Duration;

use cuba_adapter_postgres::{HealthChecker, PostgresConfig, create_lazy_pool};
use cuba_config::{AppConfig, DatabaseConfig};
use cuba_errors::AppResult;
use sqlx::PgPool;
use tracing::info;

use crate::metrics::MetricsRecorder;

/// 由数据库配置构造只读连接池配置
fn postgres_config(db: &DatabaseConfig) -> PostgresConfig {
    let mut pg_config = PostgresConfig::new(db.connection_url())
        .with_max_connections(db.max_connections)
        .with_acquire_timeout(Duration::from_secs(db.acquire_timeout_secs))
        .with_ssl_mode(db.ssl_mode)
        .read_only();
    if let Some(ref app_name) = db.application_name {
        pg_config = pg_config.with_application_name(app_name);
    }
    pg_config
}

/// 基础设施资源容器
///
/// 由 bootstrap 统一初始化。克隆开销很小，连接池内部共享。
#[derive(Clone)]
pub struct Infrastructure {
    /// 应用配置
    config: Arc<AppConfig>,
    /// PostgreSQL 只读连接池
    postgres_pool: PgPool,
    /// Prometheus 记录器（可选）
    metrics: Option<MetricsRecorder>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源
    ///
    /// 连接池是惰性的：启动时不连接数据库，每次查询按需获取连接。
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let db = &config.database;

        let postgres_pool = create_lazy_pool(&postgres_config(db))?;
        info!(
            host = %db.host,
            port = db.port,
            dbname = %db.dbname,
            ssl_mode = db.ssl_mode.as_str(),
            max_connections = db.max_connections,
            "PostgreSQL read-only pool configured"
        );

        Ok(Self {
            config: Arc::new(config),
            postgres_pool,
            metrics: None,
        })
    }

    /// 挂载 Prometheus 记录器
    pub fn with_metrics(mut self, metrics: MetricsRecorder) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    pub fn metrics(&self) -> Option<&MetricsRecorder> {
        self.metrics.as_ref()
    }

    pub fn health_checker(&self) -> HealthChecker {
        HealthChecker::new(self.postgres_pool.clone())
    }

    /// 关闭连接池，等待已借出的连接归还
    pub async fn close(&self) {
        self.postgres_pool.close().await;
        info!("PostgreSQL pool closed");
    }
}
