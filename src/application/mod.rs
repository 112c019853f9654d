//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（VoiceApiPort）
//! - services: 上传前的本地音频校验
//! - commands: CQRS 命令及处理器（分步/一步克隆、删除文件）
//! - queries: CQRS 查询及处理器（文件列表、文件详情）

pub mod commands;
pub mod ports;
pub mod queries;
pub mod services;

// Re-exports
pub use commands::{
    CloneVoice,
    DeleteFile,
    SubmitClone,
    UploadPromptAudio,
    UploadReferenceAudio,
    // Handlers
    handlers::{
        CloneVoiceHandler, CloneVoiceResponse, DeleteFileHandler, SubmitCloneHandler,
        UploadPromptAudioHandler, UploadReferenceAudioHandler,
    },
};

pub use ports::{FileInfo, VoiceApiPort};

pub use queries::{
    GetFileInfo,
    ListFiles,
    // Handlers
    handlers::{GetFileInfoHandler, ListFilesHandler},
};

pub use services::{validate_audio, MAX_AUDIO_SIZE_BYTES, SUPPORTED_EXTENSIONS};

pub use crate::domain::clone::CloneError;
