//! Clone Command Handlers
//!
//! 三个阶段可由调用方分步调用（每一步只依赖调用方传入的文件 ID），
//! 也可由 `CloneVoiceHandler` 顺序串联，任一阶段失败即中止。
//! 所有本地校验都在对应的网络请求之前完成。

use std::path::Path;
use std::sync::Arc;

use crate::application::commands::{CloneVoice, SubmitClone, UploadPromptAudio, UploadReferenceAudio};
use crate::application::ports::VoiceApiPort;
use crate::application::services::validate_audio;
use crate::domain::clone::{
    AudioAsset, ClonePrompt, CloneError, CloneRequest, CloneResult, FilePurpose, RemoteFileId,
    VoiceId,
};

async fn upload_asset(
    voice_api: &dyn VoiceApiPort,
    asset: &AudioAsset,
) -> Result<RemoteFileId, CloneError> {
    let file_id = voice_api.upload_file(asset).await?;

    tracing::info!(
        path = %asset.path.display(),
        purpose = %asset.purpose,
        file_id = %file_id,
        "Audio uploaded"
    );

    Ok(file_id)
}

async fn validate_and_upload(
    voice_api: &dyn VoiceApiPort,
    path: &Path,
    purpose: FilePurpose,
) -> Result<RemoteFileId, CloneError> {
    let asset = validate_audio(path, purpose).await?;
    upload_asset(voice_api, &asset).await
}

/// 构造克隆请求；任何本地可判定的错误都在这里返回
fn build_clone_request(command: &SubmitClone) -> Result<CloneRequest, CloneError> {
    let voice_id = VoiceId::parse(command.voice_id.as_str())?;
    let file_id = command.file_id.to_numeric()?;
    let clone_prompt =
        ClonePrompt::pair(command.prompt_file_id.as_ref(), command.prompt_text.as_deref())?;
    let text = command
        .text
        .as_ref()
        .filter(|t| !t.trim().is_empty())
        .cloned();

    Ok(CloneRequest {
        file_id,
        voice_id,
        model: command.model,
        text,
        clone_prompt,
    })
}

// ============================================================================
// Step 1: UploadReferenceAudio
// ============================================================================

/// UploadReferenceAudio Handler
pub struct UploadReferenceAudioHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl UploadReferenceAudioHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    pub async fn handle(&self, command: UploadReferenceAudio) -> Result<RemoteFileId, CloneError> {
        validate_and_upload(self.voice_api.as_ref(), &command.audio_path, FilePurpose::VoiceClone)
            .await
    }
}

// ============================================================================
// Step 2: UploadPromptAudio
// ============================================================================

/// UploadPromptAudio Handler
pub struct UploadPromptAudioHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl UploadPromptAudioHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    pub async fn handle(&self, command: UploadPromptAudio) -> Result<RemoteFileId, CloneError> {
        validate_and_upload(self.voice_api.as_ref(), &command.audio_path, FilePurpose::PromptAudio)
            .await
    }
}

// ============================================================================
// Step 3: SubmitClone
// ============================================================================

/// SubmitClone Handler
pub struct SubmitCloneHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl SubmitCloneHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    pub async fn handle(&self, command: SubmitClone) -> Result<CloneResult, CloneError> {
        let request = build_clone_request(&command)?;

        tracing::debug!(
            voice_id = %request.voice_id,
            file_id = request.file_id,
            model = %request.model,
            with_prompt = request.clone_prompt.is_some(),
            with_text = request.text.is_some(),
            "Submitting voice clone"
        );

        let result = self.voice_api.submit_clone(&request).await?;

        tracing::info!(
            voice_id = %request.voice_id,
            task_id = %result.task_id,
            status = %result.status,
            "Voice clone submitted"
        );

        Ok(result)
    }
}

// ============================================================================
// All-in-one: CloneVoice
// ============================================================================

/// 一步完成的克隆结果
#[derive(Debug, Clone)]
pub struct CloneVoiceResponse {
    pub file_id: RemoteFileId,
    pub prompt_file_id: Option<RemoteFileId>,
    pub result: CloneResult,
}

/// CloneVoice Handler
///
/// 先完成全部本地校验（voice_id、提示音频配对、两个音频文件），再依次上传和提交。
pub struct CloneVoiceHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl CloneVoiceHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    pub async fn handle(&self, command: CloneVoice) -> Result<CloneVoiceResponse, CloneError> {
        VoiceId::parse(command.voice_id.as_str())?;

        let has_prompt_text = command
            .prompt_text
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        match (&command.prompt_audio_path, has_prompt_text) {
            (Some(_), false) => return Err(CloneError::MissingPromptText),
            (None, true) => {
                return Err(CloneError::invalid_argument(
                    "prompt text was given without prompt audio",
                ))
            }
            _ => {}
        }

        let reference = validate_audio(&command.audio_path, FilePurpose::VoiceClone).await?;
        let prompt = match &command.prompt_audio_path {
            Some(path) => Some(validate_audio(path, FilePurpose::PromptAudio).await?),
            None => None,
        };

        let file_id = upload_asset(self.voice_api.as_ref(), &reference).await?;
        let prompt_file_id = match &prompt {
            Some(asset) => Some(upload_asset(self.voice_api.as_ref(), asset).await?),
            None => None,
        };

        let result = SubmitCloneHandler::new(self.voice_api.clone())
            .handle(SubmitClone {
                voice_id: command.voice_id,
                file_id: file_id.clone(),
                prompt_file_id: prompt_file_id.clone(),
                prompt_text: command.prompt_text,
                text: command.text,
                model: command.model,
            })
            .await?;

        Ok(CloneVoiceResponse {
            file_id,
            prompt_file_id,
            result,
        })
    }
}
