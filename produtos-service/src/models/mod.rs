pub mod produto;
pub mod response;

pub use produto::{BuscaPorNome, Produto};
pub use response::ApiResponse;
