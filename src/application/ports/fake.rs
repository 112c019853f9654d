//! Fake Voice API - 用于测试的记录型实现
//!
//! 不发起网络请求，按调用顺序记录每次调用，返回预设结果

use async_trait::async_trait;
use std::sync::Mutex;

use super::{FileInfo, VoiceApiPort};
use crate::domain::clone::{
    AudioAsset, CloneError, CloneRequest, CloneResult, FilePurpose, RemoteFileId,
};

/// 记录的一次调用
#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    Upload(FilePurpose),
    Submit(CloneRequest),
    List(Option<FilePurpose>),
    Get(String),
    Delete(String),
}

pub struct FakeVoiceApi {
    calls: Mutex<Vec<FakeCall>>,
    reference_id: String,
    prompt_id: String,
    fail_submit: bool,
}

impl FakeVoiceApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reference_id: "42".to_string(),
            prompt_id: "43".to_string(),
            fail_submit: false,
        }
    }

    pub fn with_reference_id(mut self, id: &str) -> Self {
        self.reference_id = id.to_string();
        self
    }

    pub fn failing_submit(mut self) -> Self {
        self.fail_submit = true;
        self
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: FakeCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl VoiceApiPort for FakeVoiceApi {
    async fn upload_file(&self, asset: &AudioAsset) -> Result<RemoteFileId, CloneError> {
        self.record(FakeCall::Upload(asset.purpose));
        let id = match asset.purpose {
            FilePurpose::PromptAudio => &self.prompt_id,
            _ => &self.reference_id,
        };
        Ok(RemoteFileId::new(id.clone()))
    }

    async fn submit_clone(&self, request: &CloneRequest) -> Result<CloneResult, CloneError> {
        self.record(FakeCall::Submit(request.clone()));
        if self.fail_submit {
            return Err(CloneError::api(
                "Voice cloning failed: quota exceeded",
                Some(429),
                Some("quota exceeded".to_string()),
            ));
        }
        Ok(CloneResult {
            task_id: "t1".to_string(),
            status: "processing".to_string(),
            audio_url: None,
            error_message: None,
        })
    }

    async fn list_files(&self, purpose: Option<FilePurpose>) -> Result<Vec<FileInfo>, CloneError> {
        self.record(FakeCall::List(purpose));
        Ok(vec![FileInfo {
            file_id: "42".to_string(),
            filename: "reference.m4a".to_string(),
            bytes: 2048,
            created_at: 1_700_000_000,
            purpose: "voice_clone".to_string(),
            download_url: None,
        }])
    }

    async fn get_file_info(&self, file_id: &str) -> Result<FileInfo, CloneError> {
        self.record(FakeCall::Get(file_id.to_string()));
        Ok(FileInfo {
            file_id: file_id.to_string(),
            filename: "reference.m4a".to_string(),
            bytes: 2048,
            created_at: 1_700_000_000,
            purpose: "voice_clone".to_string(),
            download_url: Some("https://files.example/reference.m4a".to_string()),
        })
    }

    async fn delete_file(&self, file_id: &str) -> Result<bool, CloneError> {
        self.record(FakeCall::Delete(file_id.to_string()));
        Ok(true)
    }
}
