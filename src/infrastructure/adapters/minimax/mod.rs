//! MiniMax Adapter - MiniMax 开放平台的 HTTP 适配器

mod dto;
mod http_client;

pub use http_client::{ApiResponse, MiniMaxClient, MiniMaxClientConfig, DEFAULT_BASE_URL};
