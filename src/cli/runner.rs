//! CLI dispatch
//!
//! 优先级: --list-files > --get-file-info > --delete-file > --step > 一步完成

use std::path::Path;
use std::sync::Arc;

use super::Args;
use crate::application::{
    CloneVoice, CloneVoiceHandler, CloneVoiceResponse, DeleteFile, DeleteFileHandler, FileInfo,
    GetFileInfo, GetFileInfoHandler, ListFiles, ListFilesHandler, SubmitClone, SubmitCloneHandler,
    UploadPromptAudio, UploadPromptAudioHandler, UploadReferenceAudio,
    UploadReferenceAudioHandler, VoiceApiPort,
};
use crate::domain::clone::{CloneError, CloneModel, CloneResult, FilePurpose, RemoteFileId};

/// 一次 CLI 调用的结果，交给 output 渲染
#[derive(Debug, Clone)]
pub enum Outcome {
    Files(Vec<FileInfo>),
    File(FileInfo),
    Deleted { file_id: String, success: bool },
    DeleteCancelled { file_id: String },
    ReferenceUploaded { file_id: RemoteFileId },
    PromptUploaded {
        prompt_file_id: RemoteFileId,
        file_id: String,
    },
    Submitted(CloneResult),
    Cloned(CloneVoiceResponse),
}

fn required<'a, T: ?Sized>(value: Option<&'a T>, message: &str) -> Result<&'a T, CloneError> {
    value.ok_or_else(|| CloneError::invalid_argument(message))
}

/// 文件优先于行内文本；文件内容会去除首尾空白
async fn read_text(
    inline: Option<&str>,
    file: Option<&Path>,
    what: &str,
) -> Result<Option<String>, CloneError> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map(|content| Some(content.trim().to_string()))
            .map_err(|e| {
                CloneError::invalid_argument(format!(
                    "Cannot read {} file {}: {}",
                    what,
                    path.display(),
                    e
                ))
            }),
        None => Ok(inline.map(str::to_string)),
    }
}

/// 删除确认：接受 `y` 或 `yes`（不区分大小写）
pub fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// 执行一次 CLI 调用
///
/// `confirm_delete` 在删除前被调用，返回 false 时取消删除。
pub async fn run(
    args: &Args,
    voice_api: Arc<dyn VoiceApiPort>,
    default_model: CloneModel,
    confirm_delete: &(dyn Fn(&str) -> bool + Send + Sync),
) -> Result<Outcome, CloneError> {
    if args.list_files {
        let purpose = args.purpose.as_deref().map(FilePurpose::parse).transpose()?;
        let files = ListFilesHandler::new(voice_api)
            .handle(ListFiles { purpose })
            .await?;
        return Ok(Outcome::Files(files));
    }

    if let Some(file_id) = &args.get_file_info {
        let info = GetFileInfoHandler::new(voice_api)
            .handle(GetFileInfo {
                file_id: file_id.clone(),
            })
            .await?;
        return Ok(Outcome::File(info));
    }

    if let Some(file_id) = &args.delete_file {
        if !args.yes && !confirm_delete(file_id) {
            return Ok(Outcome::DeleteCancelled {
                file_id: file_id.clone(),
            });
        }
        let success = DeleteFileHandler::new(voice_api)
            .handle(DeleteFile {
                file_id: file_id.clone(),
            })
            .await?;
        return Ok(Outcome::Deleted {
            file_id: file_id.clone(),
            success,
        });
    }

    let model = match &args.model {
        Some(model) => CloneModel::parse(model)?,
        None => default_model,
    };

    match args.step {
        Some(1) => {
            let audio = required(args.audio.as_deref(), "--audio is required for step 1")?;
            let file_id = UploadReferenceAudioHandler::new(voice_api)
                .handle(UploadReferenceAudio {
                    audio_path: audio.to_path_buf(),
                })
                .await?;
            Ok(Outcome::ReferenceUploaded { file_id })
        }
        Some(2) => {
            let prompt_audio = required(
                args.prompt_audio.as_deref(),
                "--prompt-audio is required for step 2",
            )?;
            let file_id = required(
                args.file_id.as_deref(),
                "--file-id is required for step 2 (from step 1)",
            )?;
            let prompt_file_id = UploadPromptAudioHandler::new(voice_api)
                .handle(UploadPromptAudio {
                    audio_path: prompt_audio.to_path_buf(),
                })
                .await?;
            Ok(Outcome::PromptUploaded {
                prompt_file_id,
                file_id: file_id.to_string(),
            })
        }
        Some(3) => {
            let voice_id = required(args.voice_id.as_deref(), "--voice-id is required for step 3")?;
            let file_id = required(
                args.file_id.as_deref(),
                "--file-id is required for step 3 (from step 1)",
            )?;
            let text = read_text(args.text.as_deref(), args.text_file.as_deref(), "text").await?;
            let prompt_text = read_text(
                args.prompt_text.as_deref(),
                args.prompt_text_file.as_deref(),
                "prompt text",
            )
            .await?;

            let result = SubmitCloneHandler::new(voice_api)
                .handle(SubmitClone {
                    voice_id: voice_id.to_string(),
                    file_id: RemoteFileId::new(file_id),
                    prompt_file_id: args.prompt_file_id.as_deref().map(RemoteFileId::new),
                    prompt_text,
                    text,
                    model,
                })
                .await?;
            Ok(Outcome::Submitted(result))
        }
        Some(other) => Err(CloneError::invalid_argument(format!(
            "unknown step {}, expected 1, 2 or 3",
            other
        ))),
        None => {
            let (voice_id, audio) = match (args.voice_id.as_deref(), args.audio.as_deref()) {
                (Some(voice_id), Some(audio)) => (voice_id, audio),
                _ => {
                    return Err(CloneError::invalid_argument(
                        "--voice-id and --audio are required for quick start mode, \
                         or use --step for the step-by-step workflow",
                    ))
                }
            };
            let text = read_text(args.text.as_deref(), args.text_file.as_deref(), "text").await?;
            let prompt_text = read_text(
                args.prompt_text.as_deref(),
                args.prompt_text_file.as_deref(),
                "prompt text",
            )
            .await?;

            let response = CloneVoiceHandler::new(voice_api)
                .handle(CloneVoice {
                    voice_id: voice_id.to_string(),
                    audio_path: audio.to_path_buf(),
                    prompt_audio_path: args.prompt_audio.clone(),
                    prompt_text,
                    text,
                    model,
                })
                .await?;
            Ok(Outcome::Cloned(response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::fake::{FakeCall, FakeVoiceApi};
    use tempfile::tempdir;

    fn always(answer: bool) -> impl Fn(&str) -> bool + Send + Sync {
        move |_| answer
    }

    async fn run_with(args: &Args, api: Arc<FakeVoiceApi>) -> Result<Outcome, CloneError> {
        run(args, api, CloneModel::default(), &always(true)).await
    }

    #[tokio::test]
    async fn test_list_has_priority_over_step() {
        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            list_files: true,
            purpose: Some("voice_clone".to_string()),
            step: Some(1),
            ..Default::default()
        };

        let outcome = run_with(&args, api.clone()).await.unwrap();
        assert!(matches!(outcome, Outcome::Files(files) if files.len() == 1));
        assert_eq!(api.calls(), vec![FakeCall::List(Some(FilePurpose::VoiceClone))]);
    }

    #[test]
    fn test_delete_confirmation_answers() {
        assert!(is_confirmed("y\n"));
        assert!(is_confirmed("Y"));
        assert!(is_confirmed(" yes "));
        assert!(is_confirmed("YES"));
        assert!(!is_confirmed(""));
        assert!(!is_confirmed("n"));
        assert!(!is_confirmed("yep"));
    }

    #[tokio::test]
    async fn test_delete_cancelled_without_confirmation() {
        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            delete_file: Some("42".to_string()),
            ..Default::default()
        };

        let outcome = run(&args, api.clone(), CloneModel::default(), &always(false))
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::DeleteCancelled { .. }));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_with_yes_skips_prompt() {
        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            delete_file: Some("42".to_string()),
            yes: true,
            ..Default::default()
        };

        let outcome = run(&args, api.clone(), CloneModel::default(), &always(false))
            .await
            .unwrap();
        assert!(matches!(outcome, Outcome::Deleted { success: true, .. }));
    }

    #[tokio::test]
    async fn test_step_two_requires_file_id() {
        let dir = tempdir().unwrap();
        let prompt = dir.path().join("prompt.wav");
        std::fs::write(&prompt, b"RIFF").unwrap();

        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            step: Some(2),
            prompt_audio: Some(prompt),
            ..Default::default()
        };

        let err = run_with(&args, api.clone()).await.unwrap_err();
        assert!(matches!(err, CloneError::InvalidArgument(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_step_three_reads_prompt_text_file() {
        let dir = tempdir().unwrap();
        let prompt_text = dir.path().join("prompt.txt");
        std::fs::write(&prompt_text, "  spoken words \n").unwrap();

        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            step: Some(3),
            voice_id: Some("my_voice_001".to_string()),
            file_id: Some("42".to_string()),
            prompt_file_id: Some("43".to_string()),
            prompt_text: Some("ignored".to_string()),
            prompt_text_file: Some(prompt_text),
            model: Some("speech-2.8".to_string()),
            ..Default::default()
        };

        let outcome = run_with(&args, api.clone()).await.unwrap();
        assert!(matches!(outcome, Outcome::Submitted(_)));

        let calls = api.calls();
        let FakeCall::Submit(request) = &calls[0] else {
            panic!("expected a submit call");
        };
        assert_eq!(request.model, CloneModel::Speech28);
        assert_eq!(
            request.clone_prompt.as_ref().map(|p| p.prompt_text.as_str()),
            Some("spoken words。")
        );
    }

    #[tokio::test]
    async fn test_missing_text_file_is_invalid_argument() {
        let dir = tempdir().unwrap();
        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            step: Some(3),
            voice_id: Some("my_voice_001".to_string()),
            file_id: Some("42".to_string()),
            text_file: Some(dir.path().join("absent.txt")),
            ..Default::default()
        };

        let err = run_with(&args, api.clone()).await.unwrap_err();
        assert!(matches!(err, CloneError::InvalidArgument(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_quick_start_requires_voice_and_audio() {
        let api = Arc::new(FakeVoiceApi::new());
        let args = Args {
            voice_id: Some("my_voice_001".to_string()),
            ..Default::default()
        };

        let err = run_with(&args, api).await.unwrap_err();
        assert!(matches!(err, CloneError::InvalidArgument(_)));
    }
}
