//! Clone Context - 克隆提交请求与结果

use serde::{Deserialize, Serialize};

use super::{CloneError, CloneModel, PromptText, RemoteFileId, VoiceId};

/// 提示音频配对（文件 ID + 文本，二者必须同时存在）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClonePrompt {
    /// 提示音频文件 ID（整数形式）
    pub prompt_audio: u64,
    /// 规范化后的提示文本
    pub prompt_text: PromptText,
}

impl ClonePrompt {
    /// 从可选的文件 ID 与文本构造配对
    ///
    /// - 两者皆无: `Ok(None)`
    /// - 仅有文件 ID: `MissingPromptText`
    /// - 仅有文本: `InvalidArgument`
    pub fn pair(
        prompt_file_id: Option<&RemoteFileId>,
        prompt_text: Option<&str>,
    ) -> Result<Option<Self>, CloneError> {
        let prompt_text = prompt_text.filter(|t| !t.trim().is_empty());
        match (prompt_file_id, prompt_text) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(CloneError::MissingPromptText),
            (None, Some(_)) => Err(CloneError::invalid_argument(
                "prompt text was given without prompt audio",
            )),
            (Some(file_id), Some(text)) => Ok(Some(Self {
                prompt_audio: file_id.to_numeric()?,
                prompt_text: PromptText::normalize(text)?,
            })),
        }
    }
}

/// 克隆提交请求体
///
/// 在唯一一次出站调用前构造，不复用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloneRequest {
    pub file_id: u64,
    pub voice_id: VoiceId,
    pub model: CloneModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clone_prompt: Option<ClonePrompt>,
}

/// 克隆提交结果
///
/// 仅代表提交被受理，不代表克隆完成。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneResult {
    pub task_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
