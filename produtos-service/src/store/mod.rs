//! 持久化层

pub mod produto;

use std::sync::Arc;

use sqlx::MySqlPool;
use tracing::info;

pub use produto::{MySqlProdutoStore, ProdutoStore};

/// 存储层容器，启动时构建一次
#[derive(Clone)]
pub struct Container {
    pub produto: Arc<dyn ProdutoStore>,
}

impl Container {
    pub fn new(pool: MySqlPool) -> Self {
        let container = Self::with_produto(Arc::new(MySqlProdutoStore::new(pool)));
        info!("Registered -> Store");
        container
    }

    /// 使用指定实现，测试中注入替身
    pub fn with_produto(produto: Arc<dyn ProdutoStore>) -> Self {
        Self { produto }
    }
}
