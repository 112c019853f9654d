//! Credential File Parsers
//!
//! 凭据文件格式探测：按顺序尝试每个解析策略，第一个找到目标键的策略胜出。
//! 1. 行式 `KEY=VALUE`（.env）
//! 2. JSON 对象
//! 3. INI（`[default]` 或 `[minimax]` 节）

use config::{Config, File, FileFormat};
use serde_json::Value;

/// 单一格式的解析策略
pub trait CredentialParser: Send + Sync {
    /// 格式名称（用于日志）
    fn format(&self) -> &'static str;

    /// 在文件内容中查找键，找不到或格式不符时返回 None
    fn find(&self, content: &str, key: &str) -> Option<String>;
}

/// 行式 `KEY=VALUE`，跳过空行与 `#` 注释
pub struct DotEnvParser;

impl CredentialParser for DotEnvParser {
    fn format(&self) -> &'static str {
        "dotenv"
    }

    fn find(&self, content: &str, key: &str) -> Option<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_once('='))
            .find(|(k, _)| k.trim() == key)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// JSON 对象中的字符串成员
pub struct JsonParser;

impl CredentialParser for JsonParser {
    fn format(&self) -> &'static str {
        "json"
    }

    fn find(&self, content: &str, key: &str) -> Option<String> {
        let value: Value = serde_json::from_str(content).ok()?;
        value
            .get(key)?
            .as_str()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// INI 节中的选项，选项名大小写不敏感
pub struct IniParser {
    sections: &'static [&'static str],
}

impl Default for IniParser {
    fn default() -> Self {
        Self {
            sections: &["default", "minimax"],
        }
    }
}

impl CredentialParser for IniParser {
    fn format(&self) -> &'static str {
        "ini"
    }

    fn find(&self, content: &str, key: &str) -> Option<String> {
        let parsed = Config::builder()
            .add_source(File::from_str(content, FileFormat::Ini))
            .build()
            .ok()?;

        self.sections.iter().find_map(|section| {
            let table = parsed.get_table(section).ok()?;
            table
                .into_iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .and_then(|(_, v)| v.into_string().ok())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        })
    }
}

/// 默认的解析策略顺序
pub fn default_parsers() -> Vec<Box<dyn CredentialParser>> {
    vec![
        Box::new(DotEnvParser),
        Box::new(JsonParser),
        Box::new(IniParser::default()),
    ]
}
