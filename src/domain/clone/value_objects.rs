//! Clone Context - Value Objects

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::CloneError;

/// API 凭据
///
/// 客户端构造时解析一次，会话期间只读持有。`Debug` 输出不泄露密钥。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// 文件用途（服务端定义的上传分类）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilePurpose {
    /// 克隆参考音频
    VoiceClone,
    /// 提示音频
    PromptAudio,
    /// 异步长文本合成输入（仅用于文件列表筛选）
    T2aAsyncInput,
}

impl FilePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VoiceClone => "voice_clone",
            Self::PromptAudio => "prompt_audio",
            Self::T2aAsyncInput => "t2a_async_input",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CloneError> {
        match value {
            "voice_clone" => Ok(Self::VoiceClone),
            "prompt_audio" => Ok(Self::PromptAudio),
            "t2a_async_input" => Ok(Self::T2aAsyncInput),
            other => Err(CloneError::invalid_argument(format!(
                "Invalid purpose: '{}'. Must be one of: voice_clone, prompt_audio, t2a_async_input",
                other
            ))),
        }
    }
}

impl std::fmt::Display for FilePurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已通过本地校验、待上传的音频
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub path: PathBuf,
    pub purpose: FilePurpose,
    pub size_bytes: u64,
    pub extension: String,
}

/// 服务端分配的文件 ID
///
/// 上传响应中为字符串；提交克隆时必须是纯数字，并以整数形式发送。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteFileId(String);

impl RemoteFileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 转换为提交克隆所需的整数形式
    pub fn to_numeric(&self) -> Result<u64, CloneError> {
        let id = self.0.as_str();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CloneError::InvalidFileId(self.0.clone()));
        }
        id.parse()
            .map_err(|_| CloneError::InvalidFileId(self.0.clone()))
    }
}

impl std::fmt::Display for RemoteFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 调用方指定的音色 ID
///
/// 不变量:
/// - 长度 8..=256
/// - 字母开头，字母或数字结尾，中间只允许字母、数字、`-`、`_`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoiceId(String);

impl VoiceId {
    pub const MIN_LEN: usize = 8;
    pub const MAX_LEN: usize = 256;

    pub fn parse(voice_id: impl Into<String>) -> Result<Self, CloneError> {
        let voice_id = voice_id.into();
        let invalid = |reason: String| CloneError::InvalidVoiceId {
            voice_id: voice_id.clone(),
            reason,
        };

        let len = voice_id.chars().count();
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            return Err(invalid(format!(
                "length {} is outside {}..={} characters (e.g. 'my_voice_001')",
                len,
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }

        let bytes = voice_id.as_bytes();
        if !bytes[0].is_ascii_alphabetic() {
            return Err(invalid("must start with a letter".to_string()));
        }
        if !bytes[bytes.len() - 1].is_ascii_alphanumeric() {
            return Err(invalid("must end with a letter or digit".to_string()));
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
        {
            return Err(invalid(
                "may only contain letters, digits, hyphens (-) and underscores (_)".to_string(),
            ));
        }

        Ok(Self(voice_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VoiceId {
    type Error = CloneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<VoiceId> for String {
    fn from(value: VoiceId) -> Self {
        value.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// 提示音频对应的文本（已规范化结尾标点）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PromptText(String);

impl PromptText {
    /// 允许的结尾标点
    pub const TERMINAL_PUNCTUATION: &'static [char] = &['。', '！', '？', '.', '!', '?', ',', ';'];

    /// 去除首尾空白；若不以结尾标点结束则补一个句号 `。`
    pub fn normalize(text: &str) -> Result<Self, CloneError> {
        let text = text.trim();
        match text.chars().last() {
            None => Err(CloneError::MissingPromptText),
            Some(c) if Self::TERMINAL_PUNCTUATION.contains(&c) => Ok(Self(text.to_string())),
            Some(_) => Ok(Self(format!("{}。", text))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 克隆模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CloneModel {
    #[serde(rename = "speech-2.8")]
    Speech28,
    #[default]
    #[serde(rename = "speech-2.8-hd")]
    Speech28Hd,
}

impl CloneModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Speech28 => "speech-2.8",
            Self::Speech28Hd => "speech-2.8-hd",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CloneError> {
        match value {
            "speech-2.8" => Ok(Self::Speech28),
            "speech-2.8-hd" => Ok(Self::Speech28Hd),
            other => Err(CloneError::invalid_argument(format!(
                "Unknown model '{}'. Must be one of: speech-2.8, speech-2.8-hd",
                other
            ))),
        }
    }
}

impl std::fmt::Display for CloneModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_id_accepts_valid() {
        assert!(VoiceId::parse("my_voice_001").is_ok());
        assert!(VoiceId::parse("MiniMaxVoiceClone").is_ok());
        assert!(VoiceId::parse("a-b_c-d9").is_ok());
        assert!(VoiceId::parse("a".repeat(256)).is_ok());
    }

    #[test]
    fn test_voice_id_rejects_invalid() {
        // 太短
        assert!(matches!(
            VoiceId::parse("ab"),
            Err(CloneError::InvalidVoiceId { .. })
        ));
        // 数字开头
        assert!(matches!(
            VoiceId::parse("1abc2345"),
            Err(CloneError::InvalidVoiceId { .. })
        ));
        // 连字符结尾
        assert!(matches!(
            VoiceId::parse("abc-"),
            Err(CloneError::InvalidVoiceId { .. })
        ));
        assert!(VoiceId::parse("abcdefg-").is_err());
        assert!(VoiceId::parse("abcd efgh").is_err());
        assert!(VoiceId::parse("a".repeat(257)).is_err());
        assert!(VoiceId::parse("").is_err());
        // 首尾空白不会被忽略
        assert!(matches!(
            VoiceId::parse(" my_voice_001 "),
            Err(CloneError::InvalidVoiceId { .. })
        ));
    }

    #[test]
    fn test_voice_id_rejects_non_ascii() {
        assert!(VoiceId::parse("voice声音声音声音1").is_err());
    }

    #[test]
    fn test_remote_file_id_numeric() {
        assert_eq!(
            RemoteFileId::new("361790326784095").to_numeric().unwrap(),
            361790326784095
        );
        assert!(matches!(
            RemoteFileId::new("abc123").to_numeric(),
            Err(CloneError::InvalidFileId(_))
        ));
        assert!(RemoteFileId::new("").to_numeric().is_err());
        assert!(RemoteFileId::new("-12").to_numeric().is_err());
        assert!(matches!(
            RemoteFileId::new(" 42 ").to_numeric(),
            Err(CloneError::InvalidFileId(_))
        ));
        assert!(RemoteFileId::new("99999999999999999999999").to_numeric().is_err());
    }

    #[test]
    fn test_prompt_text_appends_full_stop() {
        assert_eq!(PromptText::normalize("hello").unwrap().as_str(), "hello。");
        assert_eq!(PromptText::normalize("  hello  ").unwrap().as_str(), "hello。");
    }

    #[test]
    fn test_prompt_text_is_idempotent() {
        let once = PromptText::normalize("hello").unwrap();
        let twice = PromptText::normalize(once.as_str()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(PromptText::normalize("你好！").unwrap().as_str(), "你好！");
        assert_eq!(PromptText::normalize("a, b;").unwrap().as_str(), "a, b;");
    }

    #[test]
    fn test_prompt_text_empty_is_missing() {
        assert!(matches!(
            PromptText::normalize("   "),
            Err(CloneError::MissingPromptText)
        ));
    }

    #[test]
    fn test_file_purpose_round_trip() {
        assert_eq!(FilePurpose::parse("prompt_audio").unwrap(), FilePurpose::PromptAudio);
        assert_eq!(FilePurpose::VoiceClone.as_str(), "voice_clone");
        assert!(FilePurpose::parse("music").is_err());
    }

    #[test]
    fn test_clone_model_default_is_hd() {
        assert_eq!(CloneModel::default(), CloneModel::Speech28Hd);
        assert_eq!(CloneModel::parse("speech-2.8").unwrap(), CloneModel::Speech28);
        assert!(CloneModel::parse("speech-3").is_err());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("sk-secret");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.expose(), "sk-secret");
    }
}
