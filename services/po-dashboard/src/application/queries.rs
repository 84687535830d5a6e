//! 报表查询
//!
//! 每个报表对应一个查询对象。带参数的查询提供 `parse`，
//! 把调用方传入的原始字符串校验为声明的类型。

use cuba_cqrs_core::Query;
use cuba_errors::{AppError, AppResult};

use crate::domain::{
    DEFAULT_RECENT_ACTIVITY_LIMIT, EmailCount, InventoryRecord, OrderDetail, OrderSummary,
    PurchaseOrder, RecentActivity, TopProduct,
};

/// 订单汇总查询
#[derive(Debug, Clone, Copy, Default)]
pub struct GetOrderSummaryQuery;

impl Query for GetOrderSummaryQuery {
    type Result = OrderSummary;

    fn name(&self) -> &'static str {
        "order_summary"
    }
}

/// 订单列表查询（不分页）
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOrdersQuery;

impl Query for ListOrdersQuery {
    type Result = Vec<PurchaseOrder>;

    fn name(&self) -> &'static str {
        "list_orders"
    }
}

/// 订单详情查询
#[derive(Debug, Clone, Copy)]
pub struct GetOrderDetailQuery {
    pub order_id: i64,
}

impl GetOrderDetailQuery {
    pub fn new(order_id: i64) -> Self {
        Self { order_id }
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        raw.trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| AppError::validation(format!("订单 ID 必须是整数: {:?}", raw)))
    }
}

impl Query for GetOrderDetailQuery {
    type Result = OrderDetail;

    fn name(&self) -> &'static str {
        "order_detail"
    }
}

/// 热销商品查询
#[derive(Debug, Clone, Copy, Default)]
pub struct GetTopProductsQuery;

impl Query for GetTopProductsQuery {
    type Result = Vec<TopProduct>;

    fn name(&self) -> &'static str {
        "top_products"
    }
}

/// 邮件订单计数查询
#[derive(Debug, Clone, Copy, Default)]
pub struct GetEmailCountQuery;

impl Query for GetEmailCountQuery {
    type Result = EmailCount;

    fn name(&self) -> &'static str {
        "email_count"
    }
}

/// 最近动态查询
#[derive(Debug, Clone, Copy)]
pub struct GetRecentActivityQuery {
    pub limit: u32,
}

impl Default for GetRecentActivityQuery {
    fn default() -> Self {
        Self::new(DEFAULT_RECENT_ACTIVITY_LIMIT)
    }
}

impl GetRecentActivityQuery {
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }

    /// 解析可选的 limit 参数，缺省时使用 `default_limit`
    pub fn parse(raw: Option<&str>, default_limit: u32) -> AppResult<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::new(default_limit)),
            Some(value) => value.parse::<u32>().map(Self::new).map_err(|_| {
                AppError::validation(format!("limit 必须是非负整数: {:?}", value))
            }),
        }
    }
}

impl Query for GetRecentActivityQuery {
    type Result = Vec<RecentActivity>;

    fn name(&self) -> &'static str {
        "recent_activity"
    }
}

/// 库存状态查询
#[derive(Debug, Clone, Copy, Default)]
pub struct GetInventoryStatusQuery;

impl Query for GetInventoryStatusQuery {
    type Result = Vec<InventoryRecord>;

    fn name(&self) -> &'static str {
        "inventory_status"
    }
}
