//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：远端文件的只读查询

mod file_queries;

pub mod handlers;

pub use file_queries::*;
