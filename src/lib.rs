//! 飲食店サーチ ターミナルクライアント
//!
//! Web版と同じ `AppState` で2段階の検索フローを回し、
//! 結果をターミナルに描画する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
