use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{ProdutoError, Result, ESTOQUE_INDISPONIVEL, PRECO_INVALIDO};
use crate::utils::{datetime_format, id};

/// 产品
///
/// 输入时所有字段均可省略；输出时 `codigo` 为空表示未找到。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Produto {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub codigo: String,
    pub nome: String,
    pub preco_de: f64,
    pub preco_por: f64,
    #[serde(with = "datetime_format::opt", skip_serializing_if = "Option::is_none")]
    pub criado_em: Option<NaiveDateTime>,
    #[serde(with = "datetime_format::opt", skip_serializing_if = "Option::is_none")]
    pub ultima_alteracao: Option<NaiveDateTime>,
    pub estoque_total: i64,
    pub estoque_corte: i64,
    pub estoque_disponivel: i64,
}

impl Produto {
    /// 按编码查询未命中时返回的空记录
    pub fn is_empty(&self) -> bool {
        self.codigo.is_empty()
    }

    /// 分配新编码并重算可用库存，客户端传入的值会被覆盖
    pub fn pre_save(&mut self) -> Result<()> {
        self.codigo = id::new_id();
        self.recompute_stock()
    }

    /// 差值溢出 i64 时视为库存不合法
    pub fn recompute_stock(&mut self) -> Result<()> {
        self.estoque_disponivel = self
            .estoque_total
            .checked_sub(self.estoque_corte)
            .ok_or_else(|| ProdutoError::Validation(ESTOQUE_INDISPONIVEL.to_string()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.preco_de < self.preco_por {
            return Err(ProdutoError::Validation(PRECO_INVALIDO.to_string()));
        }
        if self.estoque_corte > self.estoque_total {
            return Err(ProdutoError::Validation(ESTOQUE_INDISPONIVEL.to_string()));
        }
        Ok(())
    }

    /// 新建时写入两个时间戳
    pub fn stamp_created(&mut self, now: NaiveDateTime) {
        self.criado_em = Some(now);
        self.ultima_alteracao = Some(now);
    }

    /// 更新时只刷新最后修改时间，同时重算可用库存
    pub fn stamp_updated(&mut self, now: NaiveDateTime) -> Result<()> {
        self.recompute_stock()?;
        self.ultima_alteracao = Some(now);
        Ok(())
    }
}

/// 按名称前缀搜索的请求体
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BuscaPorNome {
    pub nome: String,
}
