//! # 网站图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 · clap 解析 · 退出码         │
//! │     │                                                    │
//! │     ├─ invocation   参数个数 → Invocation（输入/输出）    │
//! │     ├─ console      横幅 · 步骤结果 · 汇总 · 用法         │
//! │     └─ error        AppError (入口层统一错误)            │
//! │                                                          │
//! │  favicon           源图加载 · 缩放 · 四类产物写出         │
//! │     ├─ raster_set       favicon-NxN.png / apple-touch    │
//! │     ├─ icon_container   favicon.ico (16/32/48)           │
//! │     ├─ vector_wrapper   favicon.svg (内嵌 base64 PNG)     │
//! │     └─ manifest         manifest.json                    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 入口层错误 `AppError` 与退出码 |
//! | [`invocation`] | 命令行参数按个数解析、执行一次生成 |
//! | [`console`] | 面向用户的控制台文本 |
//! | [`favicon`] | 图标生成流水线 |

pub mod console;
pub mod error;
pub mod favicon;
pub mod invocation;
