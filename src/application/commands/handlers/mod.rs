//! Command Handlers

mod clone_handlers;
mod file_handlers;

pub use clone_handlers::{
    CloneVoiceHandler, CloneVoiceResponse, SubmitCloneHandler, UploadPromptAudioHandler,
    UploadReferenceAudioHandler,
};
pub use file_handlers::DeleteFileHandler;
