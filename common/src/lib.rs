//! Shop Search Common Library
//!
//! CLIとWeb(WASM)で共有される型と画面状態

pub mod types;
pub mod error;
pub mod api;
pub mod ui_state;
pub mod selection;
pub mod panel;
pub mod controller;

pub use types::{
    DetailRequest, DetailResult, HealthStatus, Judgement, Score, SearchRequest, SearchResult,
    ShopList, ShopSummary, SourceCitation,
};
pub use error::{Error, Result};
pub use api::SearchBackend;
pub use ui_state::{UiState, Visibility};
pub use selection::{ShopChecklist, ShopEntry};
pub use panel::{DetailPanel, DetailView, SummaryRow};
pub use controller::{AppState, Flow, Phase, normalize_query};
