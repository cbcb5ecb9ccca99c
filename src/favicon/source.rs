//! # 数据模型
//!
//! ## 设计思路
//!
//! 将“流水线中间结果”和“步骤结果记录”解耦：
//! - `SourceImage` 表示已解码、只读的 RGBA 源图
//! - `DerivedRaster` 表示某一步骤独占的方形缩放结果
//! - `StepReport` / `GenerationReport` 记录每个产物的成败，供调用方判断部分失败

use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::FaviconError;

/// 加载阶段输出：统一为 RGBA 的源图。
///
/// 创建后只读，整个生成过程共享同一份。
#[derive(Debug)]
pub struct SourceImage {
    pixels: RgbaImage,
    /// 来源路径（用于日志与诊断）。
    origin: PathBuf,
}

impl SourceImage {
    pub(crate) fn new(pixels: RgbaImage, origin: PathBuf) -> Self {
        Self { pixels, origin }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

/// 缩放阶段输出：`edge x edge` 的 RGBA 位图。
pub struct DerivedRaster {
    pub(crate) edge: u32,
    pub(crate) pixels: RgbaImage,
}

impl DerivedRaster {
    pub fn edge(&self) -> u32 {
        self.edge
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// 单个产物的生成结果。
#[derive(Debug)]
pub struct StepReport {
    /// 产物名称（通常为文件名）。
    pub artifact: String,
    /// 成功时为写出的路径。
    pub result: Result<PathBuf, FaviconError>,
}

impl StepReport {
    pub(crate) fn new(artifact: impl Into<String>, result: Result<PathBuf, FaviconError>) -> Self {
        Self {
            artifact: artifact.into(),
            result,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// 一次完整生成的步骤记录，按执行顺序排列。
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub(crate) steps: Vec<StepReport>,
}

impl GenerationReport {
    pub(crate) fn push(&mut self, step: StepReport) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|step| !step.is_success())
    }

    /// 所有步骤均成功。
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(StepReport::is_success)
    }

    /// 成功写出的产物路径。
    pub fn artifacts(&self) -> impl Iterator<Item = &Path> {
        self.steps
            .iter()
            .filter_map(|step| step.result.as_ref().ok().map(PathBuf::as_path))
    }
}
