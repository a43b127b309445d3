use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::MySqlPool;
use tracing::error;

use crate::error::{ProdutoError, Result};
use crate::models::Produto;
use crate::utils::datetime::TimeUtil;

const COLUNAS: &str = "codigo, nome, preco_de, preco_por, criado_em, ultima_alteracao, \
                       estoque_total, estoque_corte, estoque_disponivel";

/// 产品存储
///
/// 按编码查询未命中时返回空记录而不是错误，调用方以 `codigo` 为空判断。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProdutoStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Produto>>;
    async fn find_by_code(&self, codigo: &str) -> Result<Produto>;
    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Produto>>;
    async fn create(&self, produto: Produto) -> Result<Produto>;
    async fn update(&self, produto: Produto) -> Result<Produto>;
    /// 记录不存在时不报错
    async fn delete_by_code(&self, produto: &Produto) -> Result<()>;
}

pub struct MySqlProdutoStore {
    pool: MySqlPool,
}

impl MySqlProdutoStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// 记录失败后原样返回
fn persistence(op: &'static str) -> impl FnOnce(sqlx::Error) -> ProdutoError {
    move |e| {
        error!(op, error = %e, "store operation failed");
        ProdutoError::Persistence(e)
    }
}

/// 转义 LIKE 通配符，使前缀按字面匹配
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProdutoStore for MySqlProdutoStore {
    async fn find_all(&self) -> Result<Vec<Produto>> {
        let sql = format!("SELECT {} FROM produtos", COLUNAS);
        sqlx::query_as::<_, Produto>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence("store.produto.FindAll"))
    }

    async fn find_by_code(&self, codigo: &str) -> Result<Produto> {
        let sql = format!("SELECT {} FROM produtos WHERE codigo = ?", COLUNAS);
        let produto = sqlx::query_as::<_, Produto>(&sql)
            .bind(codigo)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence("store.produto.FindByCode"))?;

        Ok(produto.unwrap_or_default())
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Produto>> {
        let sql = format!("SELECT {} FROM produtos WHERE nome LIKE ?", COLUNAS);
        sqlx::query_as::<_, Produto>(&sql)
            .bind(like_prefix(prefix))
            .fetch_all(&self.pool)
            .await
            .map_err(persistence("store.produto.FindByNamePrefix"))
    }

    async fn create(&self, mut produto: Produto) -> Result<Produto> {
        produto.stamp_created(TimeUtil::now_naive());

        let sql = format!(
            "INSERT INTO produtos ({}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            COLUNAS
        );
        sqlx::query(&sql)
            .bind(&produto.codigo)
            .bind(&produto.nome)
            .bind(produto.preco_de)
            .bind(produto.preco_por)
            .bind(produto.criado_em)
            .bind(produto.ultima_alteracao)
            .bind(produto.estoque_total)
            .bind(produto.estoque_corte)
            .bind(produto.estoque_disponivel)
            .execute(&self.pool)
            .await
            .map_err(persistence("store.produto.Create"))?;

        Ok(produto)
    }

    async fn update(&self, mut produto: Produto) -> Result<Produto> {
        produto.stamp_updated(TimeUtil::now_naive())?;

        // criado_em 不参与更新
        sqlx::query(
            r#"
            UPDATE produtos
            SET nome = ?, preco_de = ?, preco_por = ?, ultima_alteracao = ?,
                estoque_total = ?, estoque_corte = ?, estoque_disponivel = ?
            WHERE codigo = ?
            "#,
        )
        .bind(&produto.nome)
        .bind(produto.preco_de)
        .bind(produto.preco_por)
        .bind(produto.ultima_alteracao)
        .bind(produto.estoque_total)
        .bind(produto.estoque_corte)
        .bind(produto.estoque_disponivel)
        .bind(&produto.codigo)
        .execute(&self.pool)
        .await
        .map_err(persistence("store.produto.Update"))?;

        Ok(produto)
    }

    async fn delete_by_code(&self, produto: &Produto) -> Result<()> {
        sqlx::query("DELETE FROM produtos WHERE codigo = ?")
            .bind(&produto.codigo)
            .execute(&self.pool)
            .await
            .map_err(persistence("store.produto.DeleteByCode"))?;

        Ok(())
    }
}
