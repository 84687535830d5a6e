//! 报表 HTTP 路由
//!
//! 每个报表一个只读 `GET` 端点，返回 JSON；错误按 RFC 7807 返回。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use cuba_adapter_postgres::{HealthCheckResult, HealthChecker};
use cuba_bootstrap::{MetricsRecorder, record_pool_status};
use cuba_cqrs_core::{Instrumented, QueryHandler};
use cuba_errors::AppResult;
use cuba_telemetry::HealthStatus;
use serde::{Deserialize, Serialize};

use crate::application::{
    GetEmailCountQuery, GetInventoryStatusQuery, GetOrderDetailQuery, GetOrderSummaryQuery,
    GetRecentActivityQuery, GetTopProductsQuery, ListOrdersQuery, ReportingHandler,
};
use crate::domain::{
    DEFAULT_RECENT_ACTIVITY_LIMIT, EmailCount, InventoryRecord, OrderDetail, OrderSummary,
    PurchaseOrder, RecentActivity, TopProduct,
};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    reports: Arc<Instrumented<ReportingHandler>>,
    health: HealthChecker,
    metrics: Option<MetricsRecorder>,
    recent_activity_default_limit: u32,
}

impl AppState {
    pub fn new(handler: ReportingHandler, health: HealthChecker) -> Self {
        Self {
            reports: Arc::new(Instrumented::new(handler)),
            health,
            metrics: None,
            recent_activity_default_limit: DEFAULT_RECENT_ACTIVITY_LIMIT,
        }
    }

    pub fn with_metrics(mut self, metrics: MetricsRecorder) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_recent_activity_default_limit(mut self, limit: u32) -> Self {
        self.recent_activity_default_limit = limit;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(render_metrics))
        .route("/api/reports/summary", get(order_summary))
        .route("/api/reports/top-products", get(top_products))
        .route("/api/reports/email-count", get(email_count))
        .route("/api/reports/recent-activity", get(recent_activity))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{order_id}", get(order_detail))
        .route("/api/inventory", get(inventory_status))
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// 就绪检查响应：汇总状态加 PostgreSQL 检查明细
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    #[serde(flatten)]
    pub status: HealthStatus,
    pub postgres: HealthCheckResult,
}

async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let postgres = state.health.check().await;

    let mut status = HealthStatus::new();
    status.add_check("postgres", postgres.healthy, postgres.error.clone());

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(ReadinessResponse { status, postgres }))
}

async fn render_metrics(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(ref metrics) => {
            record_pool_status("postgres", &state.health.pool_status());
            metrics.render().into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn order_summary(State(state): State<AppState>) -> AppResult<Json<OrderSummary>> {
    state.reports.handle(GetOrderSummaryQuery).await.map(Json)
}

async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<PurchaseOrder>>> {
    state.reports.handle(ListOrdersQuery).await.map(Json)
}

async fn order_detail(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let query = GetOrderDetailQuery::parse(&order_id)?;
    state.reports.handle(query).await.map(Json)
}

async fn top_products(State(state): State<AppState>) -> AppResult<Json<Vec<TopProduct>>> {
    state.reports.handle(GetTopProductsQuery).await.map(Json)
}

async fn email_count(State(state): State<AppState>) -> AppResult<Json<EmailCount>> {
    state.reports.handle(GetEmailCountQuery).await.map(Json)
}

/// 最近动态查询参数；`limit` 按字符串接收，由查询对象校验
#[derive(Debug, Default, Deserialize)]
pub struct RecentActivityParams {
    pub limit: Option<String>,
}

async fn recent_activity(
    State(state): State<AppState>,
    Query(params): Query<RecentActivityParams>,
) -> AppResult<Json<Vec<RecentActivity>>> {
    let query = GetRecentActivityQuery::parse(
        params.limit.as_deref(),
        state.recent_activity_default_limit,
    )?;
    state.reports.handle(query).await.map(Json)
}

async fn inventory_status(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryRecord>>> {
    state.reports.handle(GetInventoryStatusQuery).await.map(Json)
}
