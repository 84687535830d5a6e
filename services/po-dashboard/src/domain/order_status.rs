//! 采购订单状态
//!
//! 状态由外部下单系统写入，这里只做只读分类。

use std::fmt;

use serde::{Serialize, Serializer};

/// 订单状态
///
/// 已知状态精确匹配；以 `FAILED` 开头的任意状态归为失败；
/// 其余字符串原样保留在 `Other` 中。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Completed,
    PartialCompleted,
    WaitingForReply,
    CancelledByCustomer,
    /// `FAILED` 前缀的状态，例如 `FAILED_TIMEOUT`
    Failed(String),
    Other(String),
}

impl OrderStatus {
    pub const COMPLETED: &'static str = "COMPLETED";
    pub const PARTIAL_COMPLETED: &'static str = "PARTIAL_COMPLETED";
    pub const WAITING_FOR_REPLY: &'static str = "WAITING_FOR_REPLY";
    pub const CANCELLED_BY_CUSTOMER: &'static str = "CANCELLED_BY_CUSTOMER";
    pub const FAILED_PREFIX: &'static str = "FAILED";

    /// 计入销量统计的状态
    pub const SALES_STATUSES: [&'static str; 2] = [Self::COMPLETED, Self::PARTIAL_COMPLETED];

    /// 失败前缀的 SQL `LIKE` 模式
    pub fn failed_pattern() -> String {
        format!("{}%", Self::FAILED_PREFIX)
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::COMPLETED => Self::Completed,
            Self::PARTIAL_COMPLETED => Self::PartialCompleted,
            Self::WAITING_FOR_REPLY => Self::WaitingForReply,
            Self::CANCELLED_BY_CUSTOMER => Self::CancelledByCustomer,
            s if s.starts_with(Self::FAILED_PREFIX) => Self::Failed(s.to_string()),
            s => Self::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => Self::COMPLETED,
            Self::PartialCompleted => Self::PARTIAL_COMPLETED,
            Self::WaitingForReply => Self::WAITING_FOR_REPLY,
            Self::CancelledByCustomer => Self::CANCELLED_BY_CUSTOMER,
            Self::Failed(s) | Self::Other(s) => s,
        }
    }

    /// 汇总桶；未建模的状态不属于任何桶
    pub fn bucket(&self) -> Option<StatusBucket> {
        match self {
            Self::Completed => Some(StatusBucket::Completed),
            Self::PartialCompleted => Some(StatusBucket::Partial),
            Self::WaitingForReply => Some(StatusBucket::Pending),
            Self::CancelledByCustomer | Self::Failed(_) => Some(StatusBucket::Failed),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 汇总统计使用的状态桶，互不重叠
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBucket {
    Completed,
    Partial,
    Pending,
    Failed,
}
