//! Audio Validator - 上传前的本地音频校验
//!
//! 规则（参考音频与提示音频相同）:
//! - 文件必须存在且为普通文件
//! - 大小不超过 20 MiB
//! - 扩展名（最后一个 `.` 之后，大小写不敏感）属于 mp3 / m4a / wav
//!
//! 时长限制（参考音频 10 秒到 5 分钟，提示音频小于 8 秒）由服务端校验，
//! 客户端不解码音频。

use std::path::Path;
use tokio::fs;

use crate::domain::clone::{AudioAsset, CloneError, FilePurpose};

/// 单个音频文件的最大大小
pub const MAX_AUDIO_SIZE_BYTES: u64 = 20 * 1024 * 1024;

/// 支持的音频扩展名
pub const SUPPORTED_EXTENSIONS: &[&str] = &["mp3", "m4a", "wav"];

/// 提取扩展名：文件名最后一个 `.` 之后的部分，小写；无 `.` 时为空串
pub fn audio_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase()))
        .unwrap_or_default()
}

/// 校验音频文件，通过后返回待上传的 `AudioAsset`
pub async fn validate_audio(path: &Path, purpose: FilePurpose) -> Result<AudioAsset, CloneError> {
    let shown = path.display().to_string();

    let metadata = match fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => return Err(CloneError::FileNotFound(shown)),
    };

    let size_bytes = metadata.len();
    if size_bytes > MAX_AUDIO_SIZE_BYTES {
        return Err(CloneError::TooLarge {
            path: shown.clone(),
            size_bytes,
            limit_bytes: MAX_AUDIO_SIZE_BYTES,
        });
    }

    let extension = audio_extension(path);
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(CloneError::UnsupportedFormat {
            path: shown,
            extension,
        });
    }

    tracing::debug!(
        path = %path.display(),
        purpose = %purpose,
        size_bytes,
        extension = %extension,
        "Audio file validated"
    );

    Ok(AudioAsset {
        path: path.to_path_buf(),
        purpose,
        size_bytes,
        extension,
    })
}
