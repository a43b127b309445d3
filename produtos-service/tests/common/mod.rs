use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Local;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use produtos_service::error::Result;
use produtos_service::models::Produto;
use produtos_service::store::ProdutoStore;
use produtos_service::utils::datetime::TimeUtil;
use produtos_service::{app, create_app, store, AppState, ProdutoError};

/// 内存实现，行为与 MySQL 存储一致
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<BTreeMap<String, Produto>>,
}

impl InMemoryStore {
    pub fn insert(&self, produto: Produto) {
        self.rows.lock().unwrap().insert(produto.codigo.clone(), produto);
    }

    pub fn get(&self, codigo: &str) -> Option<Produto> {
        self.rows.lock().unwrap().get(codigo).cloned()
    }
}

#[async_trait]
impl ProdutoStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Produto>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_code(&self, codigo: &str) -> Result<Produto> {
        Ok(self.get(codigo).unwrap_or_default())
    }

    async fn find_by_name_prefix(&self, prefix: &str) -> Result<Vec<Produto>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.nome.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn create(&self, mut produto: Produto) -> Result<Produto> {
        produto.stamp_created(TimeUtil::now_naive());
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&produto.codigo) {
            return Err(ProdutoError::Persistence(sqlx::Error::Protocol(
                "Duplicate entry for key 'PRIMARY'".to_string(),
            )));
        }
        rows.insert(produto.codigo.clone(), produto.clone());
        Ok(produto)
    }

    async fn update(&self, mut produto: Produto) -> Result<Produto> {
        produto.stamp_updated(TimeUtil::now_naive())?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.get_mut(&produto.codigo) {
            // criado_em 不被更新
            let criado_em = row.criado_em;
            *row = Produto { criado_em, ..produto.clone() };
        }
        Ok(produto)
    }

    async fn delete_by_code(&self, produto: &Produto) -> Result<()> {
        self.rows.lock().unwrap().remove(&produto.codigo);
        Ok(())
    }
}

pub fn router(store: Arc<InMemoryStore>) -> Router {
    let stores = store::Container::with_produto(store);
    let apps = app::Container::new(&stores, "test", Local::now());
    create_app(AppState::new(apps))
}

pub async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
