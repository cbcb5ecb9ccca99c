//! # 图标生成模块（favicon）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载 → 方形缩放 → 各类产物编码与写出”按职责拆分为多个子模块，
//! 避免单文件膨胀与耦合。
//!
//! - `generator`：编排整条生成流水线
//! - `loader`：负责文件加载、体积与像素安全校验、RGBA 规范化
//! - `pipeline`：负责缩放与 PNG 编码
//! - `raster_set` / `icon_container` / `vector_wrapper` / `manifest`：四类产物
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（参数解析 + 控制台输出）
//!    ↓
//! generator.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（加载 + 校验，失败即终止）
//!    ├─ raster_set.rs（多尺寸 PNG）
//!    ├─ icon_container.rs（16/32/48 ICO）
//!    ├─ vector_wrapper.rs（内嵌 PNG 的 SVG + 临时文件守卫）
//!    └─ manifest.rs（固定内容的 manifest.json）
//!    ↓
//! 返回 GenerationReport（逐步骤结果）
//! ```

mod config;
mod error;
mod generator;
mod icon_container;
mod loader;
mod manifest;
mod pipeline;
mod raster_set;
mod source;
mod vector_wrapper;

pub use config::{FaviconConfig, MAX_ICON_EDGE, RasterSpec};
pub use error::FaviconError;
pub use generator::FaviconGenerator;
pub use manifest::render_manifest;
pub use pipeline::{encode_png, resize_square};
pub use source::{DerivedRaster, GenerationReport, SourceImage, StepReport};
pub use vector_wrapper::render_svg;
