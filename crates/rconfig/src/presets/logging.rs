//! 日志配置

use serde::{Deserialize, Serialize};
use crate::error::{ConfigError, Result};
use super::Validate;

/// 日志输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 文本格式
    #[default]
    Text,
    /// JSON 格式
    Json,
    /// 美化的多行格式
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// 过滤指令，如 `info` 或 `produtos_service=debug,sqlx=warn`
    pub level: String,
    pub format: LogFormat,
    /// 是否输出到控制台
    pub to_console: bool,
    /// 是否输出到文件（按天滚动）
    pub to_file: bool,
    pub file_path: String,
    pub show_source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            to_console: true,
            to_file: false,
            file_path: "logs/produtos.log".to_string(),
            show_source_location: false,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<()> {
        if self.level.trim().is_empty() {
            return Err(ConfigError::ValidationError("日志级别不能为空".to_string()));
        }
        if !self.to_console && !self.to_file {
            return Err(ConfigError::ValidationError(
                "至少需要启用一种日志输出（控制台或文件）".to_string()
            ));
        }
        if self.to_file && self.file_path.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "启用文件日志时 file_path 不能为空".to_string()
            ));
        }
        Ok(())
    }
}
