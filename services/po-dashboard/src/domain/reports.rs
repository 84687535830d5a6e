//! 报表结果类型
//!
//! 每种报表一个结构体，字段名与数据库列名一致，直接序列化给看板。

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::order_status::{OrderStatus, StatusBucket};

/// 热销商品返回条数上限
pub const TOP_PRODUCTS_LIMIT: i64 = 10;

/// 最近动态默认条数
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: u32 = 10;

/// 采购订单汇总
///
/// 各桶之和可以小于 `total`：未建模的状态只计入总数。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub total: i64,
    pub completed: i64,
    pub partial: i64,
    pub pending: i64,
    pub failed: i64,
}

impl OrderSummary {
    /// 在内存中按状态分桶统计
    pub fn tally<'a>(statuses: impl IntoIterator<Item = &'a OrderStatus>) -> Self {
        let mut summary = Self::default();
        for status in statuses {
            summary.total += 1;
            match status.bucket() {
                Some(StatusBucket::Completed) => summary.completed += 1,
                Some(StatusBucket::Partial) => summary.partial += 1,
                Some(StatusBucket::Pending) => summary.pending += 1,
                Some(StatusBucket::Failed) => summary.failed += 1,
                None => {}
            }
        }
        summary
    }

    /// 未落入任何桶的订单数
    pub fn unbucketed(&self) -> i64 {
        self.total - (self.completed + self.partial + self.pending + self.failed)
    }
}

/// 采购订单抬头
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrder {
    pub po_id: i64,
    pub po_number: String,
    pub po_date: Option<NaiveDate>,
    pub buyer: Option<String>,
    pub supplier: Option<String>,
    pub total_amount: Option<Decimal>,
    pub order_status: OrderStatus,
    pub sender_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 采购订单行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderItem {
    pub po_id: i64,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub line_total: Decimal,
}

/// 订单详情：抬头与行项目分别查询，订单不存在时两者均为空
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderDetail {
    pub header: Option<PurchaseOrder>,
    pub items: Vec<PurchaseOrderItem>,
}

impl OrderDetail {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.items.is_empty()
    }
}

/// 热销商品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    /// 优先取库存表名称，缺失时取订单行上的名称
    pub product_name: Option<String>,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// 邮件来源订单数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmailCount {
    pub total_emails: i64,
}

/// 最近订单动态
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentActivity {
    pub po_number: String,
    pub buyer: Option<String>,
    pub order_status: OrderStatus,
    pub total_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// 库存记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRecord {
    pub product_id: String,
    pub product_name: Option<String>,
    pub stock_available: i32,
    pub units_sold: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_mixed_statuses() {
        let statuses: Vec<OrderStatus> = [
            "COMPLETED",
            "FAILED_TIMEOUT",
            "CANCELLED_BY_CUSTOMER",
            "WAITING_FOR_REPLY",
        ]
        .into_iter()
        .map(OrderStatus::parse)
        .collect();

        let summary = OrderSummary::tally(&statuses);
        assert_eq!(
            summary,
            OrderSummary {
                total: 4,
                completed: 1,
                partial: 0,
                pending: 1,
                failed: 2,
            }
        );
        assert_eq!(summary.unbucketed(), 0);
    }

    #[test]
    fn test_tally_excludes_unmodelled_statuses_from_buckets() {
        let statuses = vec![
            OrderStatus::parse("ON_HOLD"),
            OrderStatus::parse("DRAFT"),
            OrderStatus::PartialCompleted,
        ];

        let summary = OrderSummary::tally(&statuses);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.partial, 1);
        assert_eq!(summary.unbucketed(), 2);
    }

    #[test]
    fn test_empty_tally() {
        assert_eq!(OrderSummary::tally(std::iter::empty()), OrderSummary::default());
    }

    #[test]
    fn test_empty_order_detail() {
        let detail = OrderDetail::default();
        assert!(detail.is_empty());

        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["header"].is_null());
        assert_eq!(json["items"].as_array().map(Vec::len), Some(0));
    }
}
