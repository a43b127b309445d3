//! 产品（Produto）CRUD 微服务
//!
//! 分层：`api`（HTTP）→ `app`（业务规则）→ `store`（MySQL）。

pub mod api;
pub mod app;
pub mod db;
pub mod error;
pub mod models;
pub mod server;
pub mod store;
pub mod utils;

pub use error::{ProdutoError, ServerError};
pub use server::{create_app, AppState};
