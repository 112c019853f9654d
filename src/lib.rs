//! vclone - MiniMax 音色克隆客户端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Clone Context: 音色 ID、提示文本、文件 ID 等值对象与克隆请求
//!
//! 应用层 (application/):
//! - Ports: VoiceApiPort（上传、克隆、文件管理）
//! - Services: 本地音频校验
//! - Commands: 上传参考音频、上传提示音频、提交克隆、一步完成、删除文件
//! - Queries: 文件列表、文件详情
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: MiniMax HTTP 客户端
//! - Credentials: API key 解析（参数、环境变量、配置文件）
//!
//! 表现层 (cli/): 参数解析、调度与输出

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::clone::CloneError;
