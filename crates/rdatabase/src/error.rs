//! 数据库错误类型定义

use thiserror::Error;

/// 数据库操作错误
#[derive(Error, Debug)]
pub enum DbError {
    /// 数据库查询错误
    #[error("数据库查询错误: {0}")]
    QueryError(#[from] sqlx::Error),

    /// 数据库配置错误
    #[error("数据库配置错误: {0}")]
    ConfigError(String),
}

/// 数据库操作结果类型
pub type Result<T> = std::result::Result<T, DbError>;

impl From<rconfig::error::ConfigError> for DbError {
    fn from(err: rconfig::error::ConfigError) -> Self {
        DbError::ConfigError(err.to_string())
    }
}
