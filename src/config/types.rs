//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::clone::CloneModel;
use crate::infrastructure::adapters::{MiniMaxClientConfig, DEFAULT_BASE_URL};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// MiniMax API 配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// MiniMax API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// 未指定 --model 时使用的克隆模型
    #[serde(default)]
    pub default_model: CloneModel,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            default_model: CloneModel::default(),
        }
    }
}

impl ApiConfig {
    /// 转换为 HTTP 客户端配置
    pub fn client_config(&self) -> MiniMaxClientConfig {
        MiniMaxClientConfig::new(self.base_url.clone()).with_timeout(self.timeout_secs)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
