//! 报表查询处理器

use std::sync::Arc;

use async_trait::async_trait;
use cuba_cqrs_core::QueryHandler;
use cuba_errors::AppResult;
use tracing::debug;

use crate::domain::{
    EmailCount, InventoryRecord, OrderDetail, OrderSummary, PurchaseOrder, RecentActivity,
    ReportRepository, TOP_PRODUCTS_LIMIT, TopProduct,
};

use super::queries::*;

/// 报表处理器
///
/// 无状态，仓储错误原样返回给调用方。
pub struct ReportingHandler {
    repo: Arc<dyn ReportRepository>,
}

impl ReportingHandler {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl QueryHandler<GetOrderSummaryQuery> for ReportingHandler {
    async fn handle(&self, _query: GetOrderSummaryQuery) -> AppResult<OrderSummary> {
        let summary = self.repo.order_summary().await?;
        if summary.unbucketed() > 0 {
            debug!(
                unbucketed = summary.unbucketed(),
                "Orders with unmodelled statuses counted in total only"
            );
        }
        Ok(summary)
    }
}

#[async_trait]
impl QueryHandler<ListOrdersQuery> for ReportingHandler {
    async fn handle(&self, _query: ListOrdersQuery) -> AppResult<Vec<PurchaseOrder>> {
        let orders = self.repo.list_orders().await?;
        debug!(count = orders.len(), "Orders listed");
        Ok(orders)
    }
}

#[async_trait]
impl QueryHandler<GetOrderDetailQuery> for ReportingHandler {
    async fn handle(&self, query: GetOrderDetailQuery) -> AppResult<OrderDetail> {
        let detail = self.repo.order_detail(query.order_id).await?;
        if detail.is_empty() {
            debug!(order_id = query.order_id, "Order not found, returning empty detail");
        }
        Ok(detail)
    }
}

#[async_trait]
impl QueryHandler<GetTopProductsQuery> for ReportingHandler {
    async fn handle(&self, _query: GetTopProductsQuery) -> AppResult<Vec<TopProduct>> {
        self.repo.top_products(TOP_PRODUCTS_LIMIT).await
    }
}

#[async_trait]
impl QueryHandler<GetEmailCountQuery> for ReportingHandler {
    async fn handle(&self, _query: GetEmailCountQuery) -> AppResult<EmailCount> {
        self.repo.email_count().await
    }
}

#[async_trait]
impl QueryHandler<GetRecentActivityQuery> for ReportingHandler {
    async fn handle(&self, query: GetRecentActivityQuery) -> AppResult<Vec<RecentActivity>> {
        self.repo.recent_activity(i64::from(query.limit)).await
    }
}

#[async_trait]
impl QueryHandler<GetInventoryStatusQuery> for ReportingHandler {
    async fn handle(&self, _query: GetInventoryStatusQuery) -> AppResult<Vec<InventoryRecord>> {
        let records = self.repo.inventory_status().await?;
        debug!(count = records.len(), "Inventory records loaded");
        Ok(records)
    }
}
