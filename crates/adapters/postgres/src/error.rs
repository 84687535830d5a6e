//! sqlx 错误分类
//!
//! 连接层故障映射为 `AppError::Connection`，其余映射为
//! `AppError::QueryExecution`。

use cuba_errors::AppError;
use tracing::debug;

/// PostgreSQL SQLSTATE 是否属于连接故障
///
/// - 08xxx: connection_exception
/// - 57P01: admin_shutdown
/// - 57P02: crash_shutdown
/// - 57P03: cannot_connect_now
/// - 53300: too_many_connections
/// - 28xxx: invalid_authorization_specification
/// - 3D000: invalid_catalog_name（数据库不存在）
pub fn is_connection_sqlstate(code: &str) -> bool {
    code.starts_with("08")
        || code.starts_with("28")
        || matches!(code, "57P01" | "57P02" | "57P03" | "53300" | "3D000")
}

/// 判断 sqlx 错误是否为连接层错误
pub fn is_connection_error(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .is_some_and(|code| is_connection_sqlstate(code.as_ref())),
        _ => false,
    }
}

/// 将 sqlx 错误映射为应用错误
pub fn map_sqlx_error(context: &str, error: sqlx::Error) -> AppError {
    let connection = is_connection_error(&error);
    debug!(context, connection, error = %error, "Mapping sqlx error");

    if connection {
        AppError::connection(format!("{}: {}", context, error))
    } else {
        AppError::query_execution(format!("{}: {}", context, error))
    }
}
