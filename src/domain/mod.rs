//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Clone Context: 音色克隆（值对象、请求/结果、错误）

pub mod clone;
