//! File Command Handlers

use std::sync::Arc;

use crate::application::commands::DeleteFile;
use crate::application::ports::VoiceApiPort;
use crate::domain::clone::CloneError;

/// DeleteFile Handler
pub struct DeleteFileHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl DeleteFileHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    /// 返回服务端是否确认删除
    pub async fn handle(&self, command: DeleteFile) -> Result<bool, CloneError> {
        let file_id = command.file_id.trim();
        if file_id.is_empty() {
            return Err(CloneError::invalid_argument("file_id cannot be empty"));
        }

        let deleted = self.voice_api.delete_file(file_id).await?;

        if deleted {
            tracing::info!(file_id = %file_id, "File deleted");
        } else {
            tracing::warn!(file_id = %file_id, "Service did not confirm file deletion");
        }

        Ok(deleted)
    }
}
