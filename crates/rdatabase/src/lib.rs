//! # R-Database
//!
//! MySQL 连接池管理库，与 rconfig 配置库配合使用。
//!
//! ## 示例
//!
//! ```no_run
//! use rconfig::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::new()
//!         .add_default("config/application")
//!         .build()?;
//!
//!     let pool = rdatabase::create_pool(&config.database).await?;
//!     rdatabase::check_connection(&pool).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod pool;

// 主要类型重导出
pub use pool::{check_connection, create_pool, redact_url, PoolOptions};
pub use error::{DbError, Result};

/// MySQL连接池类型别名
pub type MySqlPool = sqlx::MySqlPool;
