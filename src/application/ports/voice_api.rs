//! Voice API Port - 远端音色克隆服务抽象
//!
//! 定义上传、克隆提交与文件管理的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::clone::{
    AudioAsset, CloneError, CloneRequest, CloneResult, FilePurpose, RemoteFileId,
};

/// 远端文件元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    #[serde(deserialize_with = "de_file_id")]
    pub file_id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub bytes: u64,
    /// Unix 时间戳（秒）
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// 服务端的 file_id 可能是数字也可能是字符串
fn de_file_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "file_id must be a string or number, got {}",
            other
        ))),
    }
}

/// Voice API Port
///
/// 每个方法对应一次 HTTP 调用，不重试。实现必须在构造后不可变，以便并发复用。
#[async_trait]
pub trait VoiceApiPort: Send + Sync {
    /// 上传已校验的音频，返回服务端文件 ID
    async fn upload_file(&self, asset: &AudioAsset) -> Result<RemoteFileId, CloneError>;

    /// 提交克隆请求
    async fn submit_clone(&self, request: &CloneRequest) -> Result<CloneResult, CloneError>;

    /// 列出已上传文件，可按用途筛选
    async fn list_files(&self, purpose: Option<FilePurpose>) -> Result<Vec<FileInfo>, CloneError>;

    /// 查询单个文件详情
    async fn get_file_info(&self, file_id: &str) -> Result<FileInfo, CloneError>;

    /// 删除文件，返回服务端是否确认删除成功
    async fn delete_file(&self, file_id: &str) -> Result<bool, CloneError>;
}
