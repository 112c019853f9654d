//! Clone Context - Errors

use thiserror::Error;

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

fn mib(bytes: &u64) -> f64 {
    *bytes as f64 / BYTES_PER_MIB
}

/// 克隆流程的统一失败类型
///
/// 本地前置条件失败（凭据、文件、voice_id/file_id、提示音频配对）在任何网络请求之前返回；
/// 远端失败统一为 `Api`，保留状态码与原始响应体供诊断。
#[derive(Debug, Error)]
pub enum CloneError {
    #[error(
        "API key not set. Please either:\n  \
         1. Set the environment variable: export MINIMAX_API_KEY='your-key'\n  \
         2. Create a .env file in the project directory with: MINIMAX_API_KEY=your-key\n  \
         3. Pass the key explicitly: --api-key your-key"
    )]
    NoCredential,

    #[error("Audio file not found: {0}")]
    FileNotFound(String),

    #[error(
        "Audio file size ({:.2}MB) exceeds maximum limit of {:.0}MB: {path}",
        mib(.size_bytes),
        mib(.limit_bytes)
    )]
    TooLarge {
        path: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("Unsupported audio format: .{extension} ({path}). Supported formats: mp3, m4a, wav")]
    UnsupportedFormat { path: String, extension: String },

    #[error("Invalid voice_id '{voice_id}': {reason}")]
    InvalidVoiceId { voice_id: String, reason: String },

    #[error("Invalid file_id format: '{0}'. File ID must be a numeric string (e.g., '361790326784095')")]
    InvalidFileId(String),

    #[error("Prompt audio requires prompt text that exactly matches what is spoken in it")]
    MissingPromptText,

    #[error("{message}")]
    Api {
        message: String,
        status: Option<u16>,
        body: Option<String>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CloneError {
    /// 创建远端错误
    pub fn api(message: impl Into<String>, status: Option<u16>, body: Option<String>) -> Self {
        Self::Api {
            message: message.into(),
            status,
            body,
        }
    }

    /// 创建参数错误
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// 是否为本地前置条件失败（未发生任何网络请求）
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Api { .. } | Self::Io(_))
    }

    /// 稳定的错误标签，供 JSON 输出使用
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoCredential => "no_credential",
            Self::FileNotFound(_) => "file_not_found",
            Self::TooLarge { .. } => "too_large",
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::InvalidVoiceId { .. } => "invalid_voice_id",
            Self::InvalidFileId(_) => "invalid_file_id",
            Self::MissingPromptText => "missing_prompt_text",
            Self::Api { .. } => "api_error",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Io(_) => "io_error",
        }
    }

    /// HTTP 状态码（仅远端错误）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// 原始响应体（仅远端错误）
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
