//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

#[cfg(test)]
pub(crate) mod fake;
mod voice_api;

pub use voice_api::{FileInfo, VoiceApiPort};
