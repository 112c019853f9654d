//! Clone Context - 音色克隆限界上下文
//!
//! 职责:
//! - 克隆相关值对象及其不变量（VoiceId、RemoteFileId、PromptText）
//! - 克隆提交请求与结果
//! - 统一的失败类型

mod errors;
mod request;
mod value_objects;

pub use errors::CloneError;
pub use request::{ClonePrompt, CloneRequest, CloneResult};
pub use value_objects::{
    AudioAsset, CloneModel, Credential, FilePurpose, PromptText, RemoteFileId, VoiceId,
};
