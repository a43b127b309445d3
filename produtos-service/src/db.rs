use sqlx::MySqlPool;
use tracing::info;

// 初始化数据库表
pub async fn init_schema(pool: &MySqlPool) -> rdatabase::Result<()> {
    // 创建产品表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS produtos (
            codigo VARCHAR(26) NOT NULL PRIMARY KEY,
            nome VARCHAR(255) NOT NULL DEFAULT '',
            preco_de DOUBLE NOT NULL DEFAULT 0,
            preco_por DOUBLE NOT NULL DEFAULT 0,
            criado_em DATETIME NULL,
            ultima_alteracao DATETIME NULL,
            estoque_total BIGINT NOT NULL DEFAULT 0,
            estoque_corte BIGINT NOT NULL DEFAULT 0,
            estoque_disponivel BIGINT NOT NULL DEFAULT 0,
            INDEX idx_nome (nome)
        )
        "#
    )
        .execute(pool)
        .await?;

    info!("Schema ready: produtos");
    Ok(())
}
