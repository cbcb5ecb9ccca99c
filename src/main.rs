//! # 网站图标生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码映射。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use clap::Parser;
use favicon_forge::console;
use favicon_forge::error::AppError;
use favicon_forge::favicon::FaviconConfig;
use favicon_forge::invocation::{Cli, Invocation};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "favicon-forge".to_string());

    let invocation = match Invocation::from_cli(Cli::parse()) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("✗ {err}");
            eprintln!("\n{}", console::render_usage(&program));
            return ExitCode::from(err.exit_code());
        }
    };

    println!("{}", console::render_banner(&invocation));

    let config = FaviconConfig::default();
    let outcome = invocation.execute_with_hooks(
        config.clone(),
        |source| println!("{}", console::render_loaded(source)),
        |step| println!("{}", console::render_step(step, &config)),
    );
    match outcome {
        Ok(report) => {
            println!(
                "{}",
                console::render_summary(&report, &config, &invocation.output_dir)
            );
            println!("\n{}", console::render_next_steps());
            ExitCode::from(invocation.exit_code(&report))
        }
        Err(err @ AppError::InputNotFound(_)) => {
            eprintln!("✗ 错误：{err}");
            eprintln!("\n{}", console::render_usage(&program));
            ExitCode::from(err.exit_code())
        }
        Err(err) => {
            log::error!("图标生成失败: {err}");
            eprintln!("✗ 加载图片出错: {err}");
            eprintln!("\n✗ 图标生成失败！");
            ExitCode::from(err.exit_code())
        }
    }
}
