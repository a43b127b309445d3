//! 应用服务层

pub mod produto;

use std::sync::Arc;

use chrono::{DateTime, Local};
use tracing::info;

use crate::store;

pub use produto::{ProdutoApp, ProdutoService};

/// 应用层容器，携带版本号与启动时间供健康检查使用
#[derive(Clone)]
pub struct Container {
    pub produto: Arc<dyn ProdutoApp>,
    pub version: String,
    pub started_at: DateTime<Local>,
}

impl Container {
    pub fn new(stores: &store::Container, version: impl Into<String>, started_at: DateTime<Local>) -> Self {
        let container = Self {
            produto: Arc::new(ProdutoService::new(Arc::clone(&stores.produto))),
            version: version.into(),
            started_at,
        };
        info!("Registered -> App");
        container
    }
}
