//! CLI - 命令行参数、调度与输出
//!
//! 核心流程之外的表现层：解析参数，调用应用层处理器，按 human/JSON 格式输出

mod args;
mod output;
mod runner;

pub use args::Args;
pub use output::{render, render_error, render_human, render_json};
pub use runner::{is_confirmed, run, Outcome};
