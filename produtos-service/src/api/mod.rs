//! HTTP 接口层

pub mod health;
pub mod produto;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::models::ApiResponse;
use crate::server::AppState;

/// 注册全部路由
pub fn register() -> Router<AppState> {
    let router = Router::new()
        .merge(produto::routes())
        .merge(health::routes());
    info!("Registered -> Api");
    router
}

pub(crate) fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
}

pub(crate) fn fail(status: StatusCode, error: impl ToString) -> Response {
    (status, Json(ApiResponse::failure(error.to_string()))).into_response()
}
