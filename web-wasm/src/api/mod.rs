//! バックエンドAPI連携

pub mod client;

pub use client::FetchBackend;
