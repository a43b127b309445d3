//! 配置错误类型

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载错误: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("缺少必要配置: {0}")]
    MissingConfig(String),

    #[error("验证错误: {0}")]
    ValidationError(String),

    #[error("配置监听任务异常退出: {0}")]
    WatcherError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
