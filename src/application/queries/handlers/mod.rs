//! Query Handlers 实现

mod file_handlers;

pub use file_handlers::*;
