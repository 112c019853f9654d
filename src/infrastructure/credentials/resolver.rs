//! Credential Resolver
//!
//! 解析顺序（第一个命中即返回，不合并）：
//! 1. 显式传入的 key
//! 2. 环境变量 `MINIMAX_API_KEY`
//! 3. 显式指定的配置文件
//! 4. 默认位置：`./.env`、`./.minimax.conf`、`~/.minimax.conf`

use std::path::{Path, PathBuf};

use super::parsers::{default_parsers, CredentialParser};
use crate::domain::clone::{CloneError, Credential};

/// 环境变量名，同时也是配置文件中的键名
pub const API_KEY_NAME: &str = "MINIMAX_API_KEY";

/// 凭据来源（仅用于日志，不含密钥本身）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Explicit,
    Environment(String),
    ConfigFile { path: PathBuf, format: &'static str },
}

impl std::fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit => write!(f, "explicit argument"),
            Self::Environment(name) => write!(f, "environment variable {}", name),
            Self::ConfigFile { path, format } => {
                write!(f, "{} ({} format)", path.display(), format)
            }
        }
    }
}

/// 默认配置文件搜索位置
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".env"), PathBuf::from(".minimax.conf")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".minimax.conf"));
    }
    paths
}

/// 凭据解析器
pub struct CredentialResolver {
    env_var: String,
    search_paths: Vec<PathBuf>,
    parsers: Vec<Box<dyn CredentialParser>>,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self {
            env_var: API_KEY_NAME.to_string(),
            search_paths: default_search_paths(),
            parsers: default_parsers(),
        }
    }

    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    /// 解析凭据
    pub fn resolve(
        &self,
        explicit: Option<&str>,
        config_path: Option<&Path>,
    ) -> Result<Credential, CloneError> {
        self.resolve_with_source(explicit, config_path)
            .map(|(credential, _)| credential)
    }

    /// 解析凭据并返回其来源
    pub fn resolve_with_source(
        &self,
        explicit: Option<&str>,
        config_path: Option<&Path>,
    ) -> Result<(Credential, CredentialSource), CloneError> {
        if let Some(key) = explicit.map(str::trim).filter(|k| !k.is_empty()) {
            return Ok((Credential::new(key), CredentialSource::Explicit));
        }

        if let Ok(key) = std::env::var(&self.env_var) {
            let key = key.trim();
            if !key.is_empty() {
                return Ok((
                    Credential::new(key),
                    CredentialSource::Environment(self.env_var.clone()),
                ));
            }
        }

        let candidates = config_path
            .map(Path::to_path_buf)
            .into_iter()
            .chain(self.search_paths.iter().cloned());

        for path in candidates {
            if let Some((key, format)) = self.read_file(&path) {
                return Ok((
                    Credential::new(key),
                    CredentialSource::ConfigFile { path, format },
                ));
            }
        }

        Err(CloneError::NoCredential)
    }

    /// 读取并探测单个配置文件；不存在或不可读时跳过
    fn read_file(&self, path: &Path) -> Option<(String, &'static str)> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "Credential file skipped");
                return None;
            }
        };

        self.parsers
            .iter()
            .find_map(|parser| parser.find(&content, API_KEY_NAME).map(|key| (key, parser.format())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_explicit_wins_over_environment() {
        std::env::set_var("VCLONE_TEST_KEY_EXPLICIT", "ENV_KEY");
        let resolver = CredentialResolver::new()
            .with_env_var("VCLONE_TEST_KEY_EXPLICIT")
            .with_search_paths(vec![]);

        let (credential, source) = resolver
            .resolve_with_source(Some("ARG_KEY"), None)
            .unwrap();
        assert_eq!(credential.expose(), "ARG_KEY");
        assert_eq!(source, CredentialSource::Explicit);
    }

    #[test]
    fn test_environment_wins_over_files() {
        let dir = tempdir().unwrap();
        let file = write(&dir, ".env", "MINIMAX_API_KEY=FILE_KEY\n");
        std::env::set_var("VCLONE_TEST_KEY_ENV", "ENV_KEY");
        let resolver = CredentialResolver::new()
            .with_env_var("VCLONE_TEST_KEY_ENV")
            .with_search_paths(vec![file]);

        let credential = resolver.resolve(Some("  "), None).unwrap();
        assert_eq!(credential.expose(), "ENV_KEY");
    }

    #[test]
    fn test_explicit_config_path_before_defaults() {
        let dir = tempdir().unwrap();
        let custom = write(&dir, "custom.json", r#"{"MINIMAX_API_KEY": "CUSTOM_KEY"}"#);
        let default = write(&dir, ".env", "MINIMAX_API_KEY=DEFAULT_KEY\n");
        let resolver = CredentialResolver::new()
            .with_env_var("VCLONE_TEST_KEY_UNSET_1")
            .with_search_paths(vec![default]);

        let (credential, source) = resolver.resolve_with_source(None, Some(&custom)).unwrap();
        assert_eq!(credential.expose(), "CUSTOM_KEY");
        assert_eq!(
            source,
            CredentialSource::ConfigFile {
                path: custom,
                format: "json"
            }
        );
    }

    #[test]
    fn test_search_paths_in_order_skipping_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.conf");
        let no_key = write(&dir, ".env", "OTHER=1\n");
        let ini = write(&dir, ".minimax.conf", "[minimax]\nMINIMAX_API_KEY: INI_KEY\n");
        let resolver = CredentialResolver::new()
            .with_env_var("VCLONE_TEST_KEY_UNSET_2")
            .with_search_paths(vec![missing, no_key, ini]);

        let (credential, source) = resolver.resolve_with_source(None, None).unwrap();
        assert_eq!(credential.expose(), "INI_KEY");
        assert!(matches!(source, CredentialSource::ConfigFile { format: "ini", .. }));
    }

    #[test]
    fn test_no_credential_after_all_sources() {
        let dir = tempdir().unwrap();
        let resolver = CredentialResolver::new()
            .with_env_var("VCLONE_TEST_KEY_UNSET_3")
            .with_search_paths(vec![dir.path().join(".env")]);

        let err = resolver.resolve(None, Some(&dir.path().join("nope"))).unwrap_err();
        assert!(matches!(err, CloneError::NoCredential));
    }

    #[test]
    fn test_default_search_paths_order() {
        let paths = default_search_paths();
        assert_eq!(paths[0], PathBuf::from(".env"));
        assert_eq!(paths[1], PathBuf::from(".minimax.conf"));
    }
}
