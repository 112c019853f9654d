//! MiniMax 响应体 DTO

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::application::ports::FileInfo;

/// 服务端状态块
#[derive(Debug, Clone, Deserialize)]
pub struct BaseResp {
    #[serde(default = "default_status_code")]
    pub status_code: i64,
    #[serde(default)]
    pub status_msg: String,
}

fn default_status_code() -> i64 {
    -1
}

/// POST /voice_clone 响应
#[derive(Debug, Deserialize)]
pub struct CloneResponse {
    #[serde(default, deserialize_with = "string_or_number")]
    pub task_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// 提供 text 时服务端返回的试听音频
    #[serde(default)]
    pub demo_audio: Option<String>,
    #[serde(default)]
    pub base_resp: Option<BaseResp>,
}

/// GET /files/list 响应
#[derive(Debug, Deserialize)]
pub struct ListFilesResponse {
    #[serde(default)]
    pub files: Option<Vec<FileInfo>>,
}

/// GET /files/retrieve 响应
#[derive(Debug, Deserialize)]
pub struct RetrieveFileResponse {
    #[serde(default)]
    pub file: Option<FileInfo>,
}

/// DELETE /files/{id} 响应
#[derive(Debug, Deserialize)]
pub struct DeleteFileResponse {
    #[serde(default)]
    pub base_resp: Option<BaseResp>,
}

impl DeleteFileResponse {
    pub fn succeeded(&self) -> bool {
        self.base_resp
            .as_ref()
            .map(|b| b.status_code == 0)
            .unwrap_or(false)
    }
}

/// 从上传响应中提取 `file.file_id`（字符串或数字）
pub fn uploaded_file_id(body: &Value) -> Option<String> {
    match body.pointer("/file/file_id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
