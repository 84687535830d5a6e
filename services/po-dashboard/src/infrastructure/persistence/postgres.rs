//! PostgreSQL 报表仓储实现
//!
//! 所有 SQL 都是静态模板，动态值（订单 ID、条数、状态字面量）一律绑定参数。

use async_trait::async_trait;
use cuba_adapter_postgres::map_sqlx_error;
use cuba_errors::AppResult;
use sqlx::PgPool;

use crate::domain::{
    EmailCount, InventoryRecord, OrderDetail, OrderStatus, OrderSummary, PurchaseOrder,
    PurchaseOrderItem, RecentActivity, ReportRepository, TopProduct,
};

use super::rows::{
    EmailCountRow, InventoryRow, OrderSummaryRow, PurchaseOrderItemRow, PurchaseOrderRow,
    RecentActivityRow, TopProductRow,
};

const ORDER_SUMMARY_SQL: &str = r#"
    SELECT
        COUNT(*) AS total,
        COUNT(*) FILTER (WHERE order_status = $1) AS completed,
        COUNT(*) FILTER (WHERE order_status = $2) AS partial,
        COUNT(*) FILTER (WHERE order_status = $3) AS pending,
        COUNT(*) FILTER (WHERE order_status LIKE $4 OR order_status = $5) AS failed
    FROM purchase_orders
"#;

const LIST_ORDERS_SQL: &str = r#"
    SELECT po_id, po_number, po_date, buyer, supplier,
           total_amount, order_status, sender_email, created_at
    FROM purchase_orders
    ORDER BY created_at DESC
"#;

const ORDER_HEADER_SQL: &str = r#"
    SELECT po_id, po_number, po_date, buyer, supplier,
           total_amount, order_status, sender_email, created_at
    FROM purchase_orders
    WHERE po_id = $1
"#;

const ORDER_ITEMS_SQL: &str = r#"
    SELECT po_id, product_id, product_name, quantity, line_total
    FROM purchase_order_items
    WHERE po_id = $1
"#;

// 名称优先取库存表，按解析后的名称分组，同名商品合并
const TOP_PRODUCTS_SQL: &str = r#"
    SELECT
        COALESCE(i.product_name, poi.product_name) AS product_name,
        COALESCE(SUM(poi.quantity), 0)::BIGINT AS total_quantity,
        COALESCE(SUM(poi.line_total), 0)::NUMERIC AS total_revenue
    FROM purchase_order_items poi
    JOIN purchase_orders po ON poi.po_id = po.po_id
    LEFT JOIN inventory i ON poi.product_id = i.product_id
    WHERE po.order_status = ANY($1)
    GROUP BY 1
    ORDER BY total_quantity DESC, product_name
    LIMIT $2
"#;

const EMAIL_COUNT_SQL: &str = r#"
    SELECT COUNT(*) AS total_emails
    FROM purchase_orders
    WHERE sender_email IS NOT NULL
"#;

const RECENT_ACTIVITY_SQL: &str = r#"
    SELECT po_number, buyer, order_status, total_amount, created_at
    FROM purchase_orders
    ORDER BY created_at DESC
    LIMIT $1
"#;

const INVENTORY_STATUS_SQL: &str = r#"
    SELECT product_id, product_name, stock_available, units_sold
    FROM inventory
    ORDER BY product_id
"#;

pub struct PostgresReportRepository {
    pool: PgPool,
}

impl PostgresReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PostgresReportRepository {
    async fn order_summary(&self) -> AppResult<OrderSummary> {
        let row = sqlx::query_as::<_, OrderSummaryRow>(ORDER_SUMMARY_SQL)
            .bind(OrderStatus::COMPLETED)
            .bind(OrderStatus::PARTIAL_COMPLETED)
            .bind(OrderStatus::WAITING_FOR_REPLY)
            .bind(OrderStatus::failed_pattern())
            .bind(OrderStatus::CANCELLED_BY_CUSTOMER)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询采购订单汇总失败", e))?;

        Ok(row.into())
    }

    async fn list_orders(&self) -> AppResult<Vec<PurchaseOrder>> {
        let rows = sqlx::query_as::<_, PurchaseOrderRow>(LIST_ORDERS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询采购订单列表失败", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn order_detail(&self, order_id: i64) -> AppResult<OrderDetail> {
        // 抬头与行项目共用一个连接，drop 时归还连接池
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| map_sqlx_error("获取数据库连接失败", e))?;

        let header = sqlx::query_as::<_, PurchaseOrderRow>(ORDER_HEADER_SQL)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| map_sqlx_error("查询采购订单抬头失败", e))?;

        let items = sqlx::query_as::<_, PurchaseOrderItemRow>(ORDER_ITEMS_SQL)
            .bind(order_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| map_sqlx_error("查询采购订单行项目失败", e))?;

        Ok(OrderDetail {
            header: header.map(Into::into),
            items: items.into_iter().map(PurchaseOrderItem::from).collect(),
        })
    }

    async fn top_products(&self, limit: i64) -> AppResult<Vec<TopProduct>> {
        let rows = sqlx::query_as::<_, TopProductRow>(TOP_PRODUCTS_SQL)
            .bind(OrderStatus::SALES_STATUSES.to_vec())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询热销商品失败", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn email_count(&self) -> AppResult<EmailCount> {
        let row = sqlx::query_as::<_, EmailCountRow>(EMAIL_COUNT_SQL)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询邮件订单数失败", e))?;

        Ok(row.into())
    }

    async fn recent_activity(&self, limit: i64) -> AppResult<Vec<RecentActivity>> {
        let rows = sqlx::query_as::<_, RecentActivityRow>(RECENT_ACTIVITY_SQL)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询最近订单动态失败", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn inventory_status(&self) -> AppResult<Vec<InventoryRecord>> {
        let rows = sqlx::query_as::<_, InventoryRow>(INVENTORY_STATUS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("查询库存状态失败", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
