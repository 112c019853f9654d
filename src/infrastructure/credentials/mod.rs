//! Credentials - API key 解析
//!
//! 按固定顺序从显式参数、环境变量和本地配置文件中解析凭据

mod parsers;
mod resolver;

pub use parsers::{default_parsers, CredentialParser, DotEnvParser, IniParser, JsonParser};
pub use resolver::{default_search_paths, CredentialResolver, CredentialSource, API_KEY_NAME};
