//! MiniMax HTTP Client - 调用 MiniMax 文件与音色克隆服务
//!
//! 实现 VoiceApiPort trait。会话在构造时附加 Bearer 凭据，此后不可变，可并发复用。
//!
//! 外部 API:
//! - POST {base}/files/upload      multipart: file + purpose → {"file": {"file_id": ...}}
//! - POST {base}/voice_clone       JSON → {"task_id": "...", "status": "..."}
//! - GET  {base}/files/list        ?purpose=... → {"files": [...]}
//! - GET  {base}/files/retrieve    ?file_id=... → {"file": {...}}
//! - DELETE {base}/files/{file_id} → {"base_resp": {"status_code": 0}}

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

use super::dto::{
    uploaded_file_id, CloneResponse, DeleteFileResponse, ListFilesResponse, RetrieveFileResponse,
};
use crate::application::ports::{FileInfo, VoiceApiPort};
use crate::domain::clone::{
    AudioAsset, CloneError, CloneRequest, CloneResult, Credential, FilePurpose, RemoteFileId,
};

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = "https://api.minimaxi.com/v1";

/// 上传时文件所在的 multipart 字段名
const UPLOAD_FILE_FIELD: &str = "file";

/// 成功（2xx）响应
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// MiniMax 客户端配置
#[derive(Debug, Clone)]
pub struct MiniMaxClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for MiniMaxClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 120,
        }
    }
}

impl MiniMaxClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// MiniMax HTTP 客户端
pub struct MiniMaxClient {
    client: Client,
    config: MiniMaxClientConfig,
}

impl MiniMaxClient {
    /// 创建带凭据的客户端
    pub fn new(credential: &Credential, config: MiniMaxClientConfig) -> Result<Self, CloneError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credential.expose()))
            .map_err(|_| {
                CloneError::invalid_argument("API key contains characters not allowed in a header")
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CloneError::api(format!("Failed to build HTTP client: {}", e), None, None))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MiniMaxClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// 发送请求；非 2xx 返回 `Api` 错误（附状态码与原始响应体），成功返回解析后的 JSON
    async fn send(&self, context: &str, request: RequestBuilder) -> Result<ApiResponse, CloneError> {
        let response = request.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("{}: request timed out", context)
            } else if e.is_connect() {
                format!("{}: cannot connect to MiniMax API: {}", context, e)
            } else {
                format!("{}: {}", context, e)
            };
            CloneError::api(message, None, None)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            CloneError::api(
                format!("{}: failed to read response: {}", context, e),
                Some(status.as_u16()),
                None,
            )
        })?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %body, "{} returned an error", context);
            return Err(CloneError::api(
                format!("{}: {}", context, body),
                Some(status.as_u16()),
                Some(body),
            ));
        }

        match serde_json::from_str(&body) {
            Ok(json) => Ok(ApiResponse {
                status: status.as_u16(),
                body: json,
            }),
            Err(e) => Err(CloneError::api(
                format!("{}: response is not valid JSON: {}", context, e),
                Some(status.as_u16()),
                Some(body),
            )),
        }
    }

    fn decode<T: DeserializeOwned>(context: &str, response: &ApiResponse) -> Result<T, CloneError> {
        serde_json::from_value(response.body.clone()).map_err(|e| {
            CloneError::api(
                format!("{}: unexpected response format: {}", context, e),
                Some(response.status),
                Some(response.body.to_string()),
            )
        })
    }

    /// multipart 上传文件，返回服务端文件 ID
    ///
    /// 响应缺少 `file.file_id` 视为格式错误（同样是 `Api` 错误）。
    pub async fn upload(&self, path: &Path, purpose: FilePurpose) -> Result<RemoteFileId, CloneError> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|e| CloneError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        tracing::debug!(
            url = %self.url("files/upload"),
            file_name = %file_name,
            size = data.len(),
            purpose = %purpose,
            "Uploading file"
        );

        let form = Form::new()
            .text("purpose", purpose.as_str())
            .part(UPLOAD_FILE_FIELD, Part::bytes(data).file_name(file_name));

        let response = self
            .send(
                "File upload failed",
                self.client.post(self.url("files/upload")).multipart(form),
            )
            .await?;

        uploaded_file_id(&response.body)
            .map(RemoteFileId::new)
            .ok_or_else(|| {
                CloneError::api(
                    format!("Upload response format error: {}", response.body),
                    Some(response.status),
                    Some(response.body.to_string()),
                )
            })
    }

    /// POST JSON 请求体
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        context: &str,
    ) -> Result<ApiResponse, CloneError> {
        tracing::debug!(url = %self.url(path), "POST");
        self.send(context, self.client.post(self.url(path)).json(body))
            .await
    }
}

#[async_trait]
impl VoiceApiPort for MiniMaxClient {
    async fn upload_file(&self, asset: &AudioAsset) -> Result<RemoteFileId, CloneError> {
        self.upload(&asset.path, asset.purpose).await
    }

    async fn submit_clone(&self, request: &CloneRequest) -> Result<CloneResult, CloneError> {
        const CONTEXT: &str = "Voice cloning failed";

        let response = self.post("voice_clone", request, CONTEXT).await?;
        let response: CloneResponse = Self::decode(CONTEXT, &response)?;

        let error_message = response
            .base_resp
            .filter(|b| b.status_code != 0)
            .map(|b| format!("{} (status_code {})", b.status_msg, b.status_code));

        Ok(CloneResult {
            task_id: response.task_id.unwrap_or_default(),
            status: response.status.unwrap_or_else(|| "unknown".to_string()),
            audio_url: response.demo_audio.filter(|u| !u.is_empty()),
            error_message,
        })
    }

    async fn list_files(&self, purpose: Option<FilePurpose>) -> Result<Vec<FileInfo>, CloneError> {
        const CONTEXT: &str = "Failed to list files";

        let mut request = self.client.get(self.url("files/list"));
        if let Some(purpose) = purpose {
            request = request.query(&[("purpose", purpose.as_str())]);
        }

        let response = self.send(CONTEXT, request).await?;
        let response: ListFilesResponse = Self::decode(CONTEXT, &response)?;
        Ok(response.files.unwrap_or_default())
    }

    async fn get_file_info(&self, file_id: &str) -> Result<FileInfo, CloneError> {
        const CONTEXT: &str = "Failed to get file info";

        let request = self
            .client
            .get(self.url("files/retrieve"))
            .query(&[("file_id", file_id)]);

        let response = self.send(CONTEXT, request).await?;
        let retrieved: RetrieveFileResponse = Self::decode(CONTEXT, &response)?;
        retrieved.file.ok_or_else(|| {
            CloneError::api(
                "Invalid response format: no 'file' field",
                Some(response.status),
                Some(response.body.to_string()),
            )
        })
    }

    async fn delete_file(&self, file_id: &str) -> Result<bool, CloneError> {
        const CONTEXT: &str = "Failed to delete file";

        let response = self
            .send(CONTEXT, self.client.delete(self.url(&format!("files/{}", file_id))))
            .await?;
        let deleted: DeleteFileResponse = Self::decode(CONTEXT, &response)?;
        Ok(deleted.succeeded())
    }
}
