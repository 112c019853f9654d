//! File Query Handlers

use std::sync::Arc;

use crate::application::ports::{FileInfo, VoiceApiPort};
use crate::application::queries::{GetFileInfo, ListFiles};
use crate::domain::clone::CloneError;

/// ListFiles Handler
pub struct ListFilesHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl ListFilesHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    pub async fn handle(&self, query: ListFiles) -> Result<Vec<FileInfo>, CloneError> {
        let files = self.voice_api.list_files(query.purpose).await?;
        tracing::debug!(purpose = ?query.purpose, count = files.len(), "Files listed");
        Ok(files)
    }
}

/// GetFileInfo Handler
pub struct GetFileInfoHandler {
    voice_api: Arc<dyn VoiceApiPort>,
}

impl GetFileInfoHandler {
    pub fn new(voice_api: Arc<dyn VoiceApiPort>) -> Self {
        Self { voice_api }
    }

    pub async fn handle(&self, query: GetFileInfo) -> Result<FileInfo, CloneError> {
        let file_id = query.file_id.trim();
        if file_id.is_empty() {
            return Err(CloneError::invalid_argument("file_id cannot be empty"));
        }
        self.voice_api.get_file_info(file_id).await
    }
}
