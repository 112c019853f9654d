//! Clone Commands
//!
//! 分步流程: UploadReferenceAudio → (UploadPromptAudio) → SubmitClone
//! 一步完成: CloneVoice

use std::path::PathBuf;

use crate::domain::clone::{CloneModel, RemoteFileId};

/// 第 1 步：上传克隆参考音频
#[derive(Debug, Clone)]
pub struct UploadReferenceAudio {
    pub audio_path: PathBuf,
}

/// 第 2 步（可选）：上传提示音频
#[derive(Debug, Clone)]
pub struct UploadPromptAudio {
    pub audio_path: PathBuf,
}

/// 第 3 步：使用已上传的文件 ID 提交克隆
#[derive(Debug, Clone)]
pub struct SubmitClone {
    pub voice_id: String,
    pub file_id: RemoteFileId,
    pub prompt_file_id: Option<RemoteFileId>,
    pub prompt_text: Option<String>,
    /// 使用克隆音色合成的文本
    pub text: Option<String>,
    pub model: CloneModel,
}

/// 一步完成：上传参考音频、可选提示音频，然后提交克隆
#[derive(Debug, Clone)]
pub struct CloneVoice {
    pub voice_id: String,
    pub audio_path: PathBuf,
    pub prompt_audio_path: Option<PathBuf>,
    pub prompt_text: Option<String>,
    pub text: Option<String>,
    pub model: CloneModel,
}

/// 删除已上传文件
#[derive(Debug, Clone)]
pub struct DeleteFile {
    pub file_id: String,
}
