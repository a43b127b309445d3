use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::Result;
use crate::models::Produto;
use crate::store::ProdutoStore;

/// 产品业务逻辑，领域规则只在这一层
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProdutoApp: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Produto>>;
    async fn get_by_code(&self, codigo: &str) -> Result<Produto>;
    async fn get_by_name(&self, nome: &str) -> Result<Vec<Produto>>;
    async fn create(&self, produto: Produto) -> Result<Produto>;
    async fn update(&self, produto: Produto) -> Result<Produto>;
    /// 返回删除前的记录
    async fn delete(&self, codigo: &str) -> Result<Produto>;
}

pub struct ProdutoService {
    store: Arc<dyn ProdutoStore>,
}

impl ProdutoService {
    pub fn new(store: Arc<dyn ProdutoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProdutoApp for ProdutoService {
    async fn get_all(&self) -> Result<Vec<Produto>> {
        self.store.find_all().await
    }

    async fn get_by_code(&self, codigo: &str) -> Result<Produto> {
        self.store.find_by_code(codigo).await
    }

    async fn get_by_name(&self, nome: &str) -> Result<Vec<Produto>> {
        self.store.find_by_name_prefix(nome).await
    }

    async fn create(&self, mut produto: Produto) -> Result<Produto> {
        produto.pre_save()?;
        produto.validate()?;

        self.store.create(produto).await
    }

    async fn update(&self, produto: Produto) -> Result<Produto> {
        // 可用库存和时间戳由存储层处理
        produto.validate()?;

        self.store.update(produto).await
    }

    async fn delete(&self, codigo: &str) -> Result<Produto> {
        let produto = self.store.find_by_code(codigo).await?;

        self.store.delete_by_code(&produto).await?;

        Ok(produto)
    }
}
