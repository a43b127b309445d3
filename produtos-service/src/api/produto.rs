use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};

use super::{fail, ok};
use crate::error::ProdutoError;
use crate::models::{BuscaPorNome, Produto};
use crate::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/produtos",
            get(list_produtos).post(create_produto).put(update_produto),
        )
        .route("/produtos/produtosByNome", post(find_produtos_by_nome))
        .route(
            "/produtos/{codigo}",
            get(get_produto).delete(delete_produto),
        )
}

pub async fn list_produtos(State(state): State<AppState>) -> Response {
    match state.apps.produto.get_all().await {
        Ok(produtos) => ok(produtos),
        Err(e) => fail(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

// 未找到时返回 200 和空记录
pub async fn get_produto(State(state): State<AppState>, Path(codigo): Path<String>) -> Response {
    match state.apps.produto.get_by_code(&codigo).await {
        Ok(produto) => ok(produto),
        Err(e) => fail(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

pub async fn find_produtos_by_nome(
    State(state): State<AppState>,
    payload: Result<Json<BuscaPorNome>, JsonRejection>,
) -> Response {
    let Json(busca) = match payload {
        Ok(body) => body,
        Err(rejection) => return fail(StatusCode::BAD_REQUEST, ProdutoError::from(rejection)),
    };

    match state.apps.produto.get_by_name(&busca.nome).await {
        Ok(produtos) => ok(produtos),
        Err(e) => fail(StatusCode::INTERNAL_SERVER_ERROR, e),
    }
}

pub async fn create_produto(
    State(state): State<AppState>,
    payload: Result<Json<Produto>, JsonRejection>,
) -> Response {
    let Json(produto) = match payload {
        Ok(body) => body,
        Err(rejection) => return fail(StatusCode::BAD_REQUEST, ProdutoError::from(rejection)),
    };

    match state.apps.produto.create(produto).await {
        Ok(created) => ok(created),
        Err(e) => fail(StatusCode::BAD_REQUEST, e),
    }
}

pub async fn update_produto(
    State(state): State<AppState>,
    payload: Result<Json<Produto>, JsonRejection>,
) -> Response {
    let Json(produto) = match payload {
        Ok(body) => body,
        Err(rejection) => return fail(StatusCode::BAD_REQUEST, ProdutoError::from(rejection)),
    };

    match state.apps.produto.update(produto).await {
        Ok(updated) => ok(updated),
        Err(e) => fail(StatusCode::BAD_REQUEST, e),
    }
}

pub async fn delete_produto(State(state): State<AppState>, Path(codigo): Path<String>) -> Response {
    match state.apps.produto.delete(&codigo).await {
        Ok(deleted) => ok(deleted),
        Err(e) => fail(StatusCode::BAD_REQUEST, e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use chrono::Local;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::app::{self, produto::MockProdutoApp};
    use crate::error::{ProdutoError, PRECO_INVALIDO};
    use crate::models::Produto;
    use crate::server::{create_app, AppState};

    fn router(mock: MockProdutoApp) -> axum::Router {
        let apps = app::Container {
            produto: Arc::new(mock),
            version: "test".to_string(),
            started_at: Local::now(),
        };
        create_app(AppState::new(apps))
    }

    fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(router: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn db_error() -> ProdutoError {
        ProdutoError::Persistence(sqlx::Error::PoolTimedOut)
    }

    #[tokio::test]
    async fn test_list_returns_data() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_all().returning(|| {
            Ok(vec![Produto { codigo: "a".to_string(), nome: "Radio".to_string(), ..Default::default() }])
        });

        let (status, body) = send(router(mock), request(Method::GET, "/produtos", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["nome"], "Radio");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_list_store_error_is_500() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_all().returning(|| Err(db_error()));

        let (status, body) = send(router(mock), request(Method::GET, "/produtos", None)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_code_is_empty_record() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_by_code()
            .withf(|codigo| codigo == "desconhecido")
            .returning(|_| Ok(Produto::default()));

        let (status, body) =
            send(router(mock), request(Method::GET, "/produtos/desconhecido", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["data"].get("codigo").is_none());
    }

    #[tokio::test]
    async fn test_get_store_error_is_500() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_by_code().returning(|_| Err(db_error()));

        let (status, _) = send(router(mock), request(Method::GET, "/produtos/abc", None)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_search_by_nome() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_by_name()
            .withf(|nome| nome == "Tele")
            .times(1)
            .returning(|_| Ok(vec![]));

        let (status, body) = send(
            router(mock),
            request(Method::POST, "/produtos/produtosByNome", Some(json!({ "nome": "Tele" }))),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_search_decode_error_is_400() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_by_name().never();

        let req = Request::builder()
            .method(Method::POST)
            .uri("/produtos/produtosByNome")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{nome:"))
            .unwrap();
        let (status, body) = send(router(mock), req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_search_store_error_is_500() {
        let mut mock = MockProdutoApp::new();
        mock.expect_get_by_name().returning(|_| Err(db_error()));

        let (status, _) = send(
            router(mock),
            request(Method::POST, "/produtos/produtosByNome", Some(json!({ "nome": "x" }))),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_validation_error_is_400() {
        let mut mock = MockProdutoApp::new();
        mock.expect_create()
            .returning(|_| Err(ProdutoError::Validation(PRECO_INVALIDO.to_string())));

        let (status, body) = send(
            router(mock),
            request(Method::POST, "/produtos", Some(json!({ "preco_de": 100, "preco_por": 200 }))),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], PRECO_INVALIDO);
    }

    #[tokio::test]
    async fn test_create_store_error_is_400() {
        let mut mock = MockProdutoApp::new();
        mock.expect_create().returning(|_| Err(db_error()));

        let (status, _) = send(
            router(mock),
            request(Method::POST, "/produtos", Some(json!({ "nome": "x" }))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_without_json_content_type_is_400() {
        let mut mock = MockProdutoApp::new();
        mock.expect_create().never();

        let req = Request::builder()
            .method(Method::POST)
            .uri("/produtos")
            .body(Body::from(r#"{"nome":"x"}"#))
            .unwrap();
        let (status, body) = send(router(mock), req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_update_passes_codigo_through() {
        let mut mock = MockProdutoApp::new();
        mock.expect_update()
            .withf(|p| p.codigo == "abc" && p.estoque_total == 50)
            .returning(|p| Ok(p));

        let (status, body) = send(
            router(mock),
            request(
                Method::PUT,
                "/produtos",
                Some(json!({ "codigo": "abc", "estoque_total": 50, "estoque_corte": 5 })),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["codigo"], "abc");
    }

    #[tokio::test]
    async fn test_delete_error_is_400() {
        let mut mock = MockProdutoApp::new();
        mock.expect_delete().returning(|_| Err(db_error()));

        let (status, _) = send(router(mock), request(Method::DELETE, "/produtos/abc", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_record() {
        let mut mock = MockProdutoApp::new();
        mock.expect_delete()
            .withf(|codigo| codigo == "abc")
            .returning(|codigo| Ok(Produto { codigo: codigo.to_string(), ..Default::default() }));

        let (status, body) = send(router(mock), request(Method::DELETE, "/produtos/abc", None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["codigo"], "abc");
    }
}
