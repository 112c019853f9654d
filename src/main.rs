//! vclone - MiniMax 音色克隆命令行工具
//!
//! 分步模式（上传参考音频 → 上传提示音频 → 提交克隆）、一步完成模式与文件管理

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use vclone::cli::{self, Args};
use vclone::config::{load_config_from_path, print_config};
use vclone::infrastructure::{CredentialResolver, MiniMaxClient};

/// 删除前在终端确认
fn confirm_on_stdin(file_id: &str) -> bool {
    eprint!(
        "Delete file {}? This cannot be undone. [y/N]: ",
        file_id
    );
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => cli::is_confirmed(&answer),
        Err(_) => false,
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config_from_path(args.settings.as_deref())
        .context("Failed to load config")?;

    // 初始化日志，输出到 stderr，stdout 只留给结果
    let log_filter = if args.quiet {
        "warn".to_string()
    } else {
        format!("{},vclone={}", config.log.level, config.log.level)
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    let (credential, source) = CredentialResolver::new()
        .resolve_with_source(args.api_key.as_deref(), args.config_file.as_deref())?;
    tracing::info!(source = %source, "API key resolved");

    let client = MiniMaxClient::new(&credential, config.api.client_config())?;

    let outcome = cli::run(
        args,
        Arc::new(client),
        config.api.default_model,
        &confirm_on_stdin,
    )
    .await?;

    let program = std::env::args()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "vclone".to_string());
    println!("{}", cli::render(&outcome, args.json, &program));

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let rendered = cli::render_error(&err, args.json);
            if args.json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            ExitCode::FAILURE
        }
    }
}
