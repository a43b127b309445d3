//! 数据库连接池管理模块

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use rconfig::DatabaseConfig;

use crate::error::{DbError, Result};

/// 连接池配置选项
#[derive(Debug, Clone, PartialEq)]
pub struct PoolOptions {
    /// 最小连接数
    pub min_connections: u32,
    /// 最大连接数
    pub max_connections: u32,
    /// 获取连接超时（秒）
    pub timeout: u64,
    /// 闲置超时（秒）
    pub idle_timeout: Option<u64>,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            min_connections: 1,
            max_connections: 10,
            timeout: 30,
            idle_timeout: Some(60),
        }
    }
}

impl From<&DatabaseConfig> for PoolOptions {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            min_connections: config.min_connections,
            max_connections: config.max_connections,
            timeout: config.connection_timeout_secs,
            idle_timeout: (config.idle_timeout_secs > 0).then_some(config.idle_timeout_secs),
        }
    }
}

impl PoolOptions {
    fn to_sqlx(&self) -> MySqlPoolOptions {
        MySqlPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.timeout))
            .idle_timeout(self.idle_timeout.map(Duration::from_secs))
    }
}

/// 创建 MySQL 连接池，立即建立连接
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool> {
    if config.url.trim().is_empty() {
        return Err(DbError::ConfigError("数据库连接URL不能为空".to_string()));
    }

    let options = PoolOptions::from(config);
    info!(
        target_url = %redact_url(&config.url),
        max_connections = options.max_connections,
        "Initializing MySQL connection pool"
    );

    let pool = options.to_sqlx().connect(&config.url).await?;

    info!("Database connection pool created");
    Ok(pool)
}

/// 连接检查
pub async fn check_connection(pool: &MySqlPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    info!("Database connection OK");
    Ok(())
}

/// 隐藏连接URL中的密码，用于日志输出
pub fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "<invalid url>".to_string(),
    }
}
