//! 配置管理包，提供预设服务配置结构和简便的配置加载方法
//!
//! # 示例
//! ```no_run
//! use rconfig::AppConfig;
//!
//! let config = AppConfig::new()
//!     .add_default("config/application")
//!     .add_environment()
//!     .build()
//!     .unwrap();
//!
//! let server = config.server();
//! println!("服务器运行在: {}", server.addr());
//! ```

pub mod error;
pub mod config;
pub mod presets;
pub mod watcher;

pub use config::{AppConfig, AppConfigBuilder};
pub use error::ConfigError;
pub use watcher::{ConfigWatcher, ConfigWatcherHandle};

// 重导出常用预设，方便使用
pub use presets::server::ServerConfig;
pub use presets::database::DatabaseConfig;
pub use presets::logging::{LogConfig, LogFormat};
pub use presets::watch::WatchConfig;
