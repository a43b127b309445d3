//! 配置热更新

use serde::{Deserialize, Serialize};
use crate::error::{ConfigError, Result};
use super::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WatchConfig {
    pub enabled: bool,
    /// 文件检查间隔（秒）
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: 30,
        }
    }
}

impl Validate for WatchConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.interval_secs == 0 {
            return Err(ConfigError::ValidationError(
                "配置监听间隔必须大于0".to_string()
            ));
        }
        Ok(())
    }
}
