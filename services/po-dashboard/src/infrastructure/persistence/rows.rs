//! 数据库行映射结构

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::domain::{
    EmailCount, InventoryRecord, OrderStatus, OrderSummary, PurchaseOrder, PurchaseOrderItem,
    RecentActivity, TopProduct,
};

/// 订单汇总行
#[derive(Debug, FromRow)]
pub struct OrderSummaryRow {
    pub total: i64,
    pub completed: i64,
    pub partial: i64,
    pub pending: i64,
    pub failed: i64,
}

impl From<OrderSummaryRow> for OrderSummary {
    fn from(row: OrderSummaryRow) -> Self {
        Self {
            total: row.total,
            completed: row.completed,
            partial: row.partial,
            pending: row.pending,
            failed: row.failed,
        }
    }
}

/// 采购订单行
#[derive(Debug, FromRow)]
pub struct PurchaseOrderRow {
    pub po_id: i64,
    pub po_number: String,
    pub po_date: Option<NaiveDate>,
    pub buyer: Option<String>,
    pub supplier: Option<String>,
    pub total_amount: Option<Decimal>,
    pub order_status: String,
    pub sender_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PurchaseOrderRow> for PurchaseOrder {
    fn from(row: PurchaseOrderRow) -> Self {
        Self {
            po_id: row.po_id,
            po_number: row.po_number,
            po_date: row.po_date,
            buyer: row.buyer,
            supplier: row.supplier,
            total_amount: row.total_amount,
            order_status: OrderStatus::from(row.order_status),
            sender_email: row.sender_email,
            created_at: row.created_at,
        }
    }
}

/// 采购订单行项目
#[derive(Debug, FromRow)]
pub struct PurchaseOrderItemRow {
    pub po_id: i64,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub line_total: Decimal,
}

impl From<PurchaseOrderItemRow> for PurchaseOrderItem {
    fn from(row: PurchaseOrderItemRow) -> Self {
        Self {
            po_id: row.po_id,
            product_id: row.product_id,
            product_name: row.product_name,
            quantity: row.quantity,
            line_total: row.line_total,
        }
    }
}

/// 热销商品聚合行
#[derive(Debug, FromRow)]
pub struct TopProductRow {
    pub product_name: Option<String>,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

impl From<TopProductRow> for TopProduct {
    fn from(row: TopProductRow) -> Self {
        Self {
            product_name: row.product_name,
            total_quantity: row.total_quantity,
            total_revenue: row.total_revenue,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct EmailCountRow {
    pub total_emails: i64,
}

impl From<EmailCountRow> for EmailCount {
    fn from(row: EmailCountRow) -> Self {
        Self {
            total_emails: row.total_emails,
        }
    }
}

/// 最近动态行
#[derive(Debug, FromRow)]
pub struct RecentActivityRow {
    pub po_number: String,
    pub buyer: Option<String>,
    pub order_status: String,
    pub total_amount: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<RecentActivityRow> for RecentActivity {
    fn from(row: RecentActivityRow) -> Self {
        Self {
            po_number: row.po_number,
            buyer: row.buyer,
            order_status: OrderStatus::from(row.order_status),
            total_amount: row.total_amount,
            created_at: row.created_at,
        }
    }
}

/// 库存行
#[derive(Debug, FromRow)]
pub struct InventoryRow {
    pub product_id: String,
    pub product_name: Option<String>,
    pub stock_available: i32,
    pub units_sold: i32,
}

impl From<InventoryRow> for InventoryRecord {
    fn from(row: InventoryRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            stock_available: row.stock_available,
            units_sold: row.units_sold,
        }
    }
}
