//! Application Commands - CQRS 命令
//!
//! 命令会上传文件、注册音色或删除远端文件

mod clone_commands;
pub mod handlers;

pub use clone_commands::{
    CloneVoice, DeleteFile, SubmitClone, UploadPromptAudio, UploadReferenceAudio,
};
