//! 报表仓储接口

use async_trait::async_trait;
use cuba_errors::AppResult;

use super::reports::{
    EmailCount, InventoryRecord, OrderDetail, OrderSummary, PurchaseOrder, RecentActivity,
    TopProduct,
};

/// 报表仓储接口
///
/// 全部只读。每个方法独立获取连接，并在返回前归还。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 订单总数及各状态桶计数
    async fn order_summary(&self) -> AppResult<OrderSummary>;

    /// 全部订单，按创建时间倒序
    async fn list_orders(&self) -> AppResult<Vec<PurchaseOrder>>;

    /// 订单抬头与行项目
    async fn order_detail(&self, order_id: i64) -> AppResult<OrderDetail>;

    /// 已完成（含部分完成）订单的热销商品，按数量倒序
    async fn top_products(&self, limit: i64) -> AppResult<Vec<TopProduct>>;

    /// 带发件人邮箱的订单数
    async fn email_count(&self) -> AppResult<EmailCount>;

    /// 最近创建的订单
    async fn recent_activity(&self, limit: i64) -> AppResult<Vec<RecentActivity>>;

    /// 全部库存记录，按商品 ID 升序
    async fn inventory_status(&self) -> AppResult<Vec<InventoryRecord>>;
}
