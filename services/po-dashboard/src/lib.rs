//! po-dashboard - 采购订单报表服务
//!
//! 针对外部采购订单库（`purchase_orders`、`purchase_order_items`、`inventory`）
//! 的固定只读报表查询。

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
