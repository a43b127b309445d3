//! 服务器配置

use serde::{Deserialize, Serialize};
use crate::error::{ConfigError, Result};
use super::Validate;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    /// 服务器主机名或IP
    #[serde(default = "default_host")]
    pub host: String,

    /// 服务端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    /// 监听地址，形如 `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "服务器主机不能为空".to_string()
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::ValidationError(
                "服务端口不能为0".to_string()
            ));
        }
        Ok(())
    }
}
