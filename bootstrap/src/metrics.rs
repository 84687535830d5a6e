//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use cuba_adapter_postgres::PoolHealthStatus;
use cuba_errors::{AppError, AppResult};
use metrics::gauge;
use metrics_exporter_prometheus::PrometheusHandle;

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus 记录器（进程内只能安装一次）
    pub fn install() -> AppResult<Self> {
        let handle = cuba_telemetry::init_metrics().map_err(|e| {
            AppError::internal(format!("Failed to install Prometheus recorder: {}", e))
        })?;

        Ok(Self { handle })
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录连接池状态
pub fn record_pool_status(pool: &str, status: &PoolHealthStatus) {
    let labels = [("pool", pool.to_string())];

    gauge!("db_pool_size", &labels).set(status.size as f64);
    gauge!("db_pool_idle", &labels).set(status.idle as f64);
    gauge!("db_pool_active", &labels).set(status.active as f64);
}
