use axum::extract::rejection::JsonRejection;
use thiserror::Error;

/// 价格顺序错误
pub const PRECO_INVALIDO: &str = "preço de não pode ser inferior a Preço por";
/// 库存不足
pub const ESTOQUE_INDISPONIVEL: &str = "estoque indisponivel";

/// 请求处理链路上的错误
///
/// 各层原样向上传递，HTTP 状态码由具体接口决定。
#[derive(Error, Debug)]
pub enum ProdutoError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Persistence(#[from] sqlx::Error),
}

impl From<JsonRejection> for ProdutoError {
    fn from(rejection: JsonRejection) -> Self {
        ProdutoError::Decode(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ProdutoError>;

/// 启动阶段错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] rconfig::ConfigError),

    #[error("日志初始化失败: {0}")]
    Log(#[from] rlog::LogError),

    #[error("数据库错误: {0}")]
    Database(#[from] rdatabase::DbError),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}
