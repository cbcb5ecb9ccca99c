//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“固定清单”（输出文件名、边长、图标容器尺寸等）集中到 `FaviconConfig`，
//! 作为数据传入生成器，而不是散落在各步骤中的字面量。测试可以替换为更小的尺寸集合。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的标准网站图标清单。
//! - `validate` 在生成器构建时一次性校验，避免执行到一半才发现配置错误。
//! - `expected_outputs` 给控制台汇总使用，与实际生成是否成功无关。

use std::collections::HashSet;

use image::imageops::FilterType;

use super::FaviconError;

/// ICO 容器单帧允许的最大边长。
pub const MAX_ICON_EDGE: u32 = 256;

/// 单个方形 PNG 产物：文件名 + 边长。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSpec {
    pub file_name: String,
    pub edge: u32,
}

impl RasterSpec {
    pub fn new(file_name: impl Into<String>, edge: u32) -> Self {
        Self {
            file_name: file_name.into(),
            edge,
        }
    }
}

/// 图标生成配置。
///
/// 字段覆盖了加载限制、缩放滤镜、PNG 编码与四类产物的命名/尺寸。
#[derive(Debug, Clone)]
pub struct FaviconConfig {
    /// 方形 PNG 产物清单，按顺序生成。
    pub raster_set: Vec<RasterSpec>,
    /// 多分辨率图标容器文件名。
    pub icon_file_name: String,
    /// 图标容器内的帧尺寸，第一个为主帧。
    pub icon_sizes: Vec<u32>,
    /// SVG 包装文件名。
    pub vector_file_name: String,
    /// SVG 内嵌位图的边长。
    pub vector_size: u32,
    /// 生成 SVG 时使用的临时 PNG 文件名（位于输出目录，用完即删）。
    pub vector_temp_file_name: String,
    /// Web manifest 文件名。
    pub manifest_file_name: String,
    /// 缩放滤镜策略。
    pub resize_filter: FilterType,
    /// PNG 是否启用体积优化（最高压缩 + 自适应行过滤）。
    pub optimize_png: bool,
    /// 读取源文件时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            raster_set: vec![
                RasterSpec::new("favicon-32x32.png", 32),
                RasterSpec::new("favicon-192x192.png", 192),
                RasterSpec::new("favicon-512x512.png", 512),
                RasterSpec::new("apple-touch-icon-180x180.png", 180),
            ],
            icon_file_name: "favicon.ico".to_string(),
            icon_sizes: vec![16, 32, 48],
            vector_file_name: "favicon.svg".to_string(),
            vector_size: 512,
            vector_temp_file_name: "temp_for_svg.png".to_string(),
            manifest_file_name: "manifest.json".to_string(),
            resize_filter: FilterType::Lanczos3,
            optimize_png: true,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl FaviconConfig {
    /// 校验配置的自洽性。
    ///
    /// # 示例
    /// ```rust
    /// use favicon_forge::favicon::FaviconConfig;
    ///
    /// let mut config = FaviconConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.icon_sizes.push(512);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), FaviconError> {
        if self.raster_set.is_empty() {
            return Err(FaviconError::InvalidConfig("PNG 产物清单不能为空".to_string()));
        }
        for spec in &self.raster_set {
            if spec.edge == 0 {
                return Err(FaviconError::InvalidConfig(format!(
                    "{} 的边长不能为 0",
                    spec.file_name
                )));
            }
        }

        if self.icon_sizes.is_empty() {
            return Err(FaviconError::InvalidConfig("图标容器尺寸不能为空".to_string()));
        }
        if let Some(size) = self
            .icon_sizes
            .iter()
            .find(|size| !(1..=MAX_ICON_EDGE).contains(*size))
        {
            return Err(FaviconError::InvalidConfig(format!(
                "图标容器尺寸 {} 超出范围（1~{}）",
                size, MAX_ICON_EDGE
            )));
        }

        if self.vector_size == 0 {
            return Err(FaviconError::InvalidConfig("SVG 尺寸不能为 0".to_string()));
        }

        let mut seen = HashSet::new();
        for name in self.all_file_names() {
            Self::validate_file_name(name)?;
            if !seen.insert(name) {
                return Err(FaviconError::InvalidConfig(format!("输出文件名重复：{}", name)));
            }
        }

        Ok(())
    }

    /// 名义上的输出文件名（汇总展示顺序）。
    ///
    /// 无论各步骤成功与否都会完整列出。
    pub fn expected_outputs(&self) -> Vec<String> {
        let mut outputs = Vec::with_capacity(self.raster_set.len() + 3);
        outputs.push(self.icon_file_name.clone());
        outputs.push(self.vector_file_name.clone());
        outputs.extend(self.raster_set.iter().map(|spec| spec.file_name.clone()));
        outputs.push(self.manifest_file_name.clone());
        outputs
    }

    fn all_file_names(&self) -> impl Iterator<Item = &str> {
        self.raster_set
            .iter()
            .map(|spec| spec.file_name.as_str())
            .chain([
                self.icon_file_name.as_str(),
                self.vector_file_name.as_str(),
                self.vector_temp_file_name.as_str(),
                self.manifest_file_name.as_str(),
            ])
    }

    fn validate_file_name(name: &str) -> Result<(), FaviconError> {
        if name.trim().is_empty() {
            return Err(FaviconError::InvalidConfig("输出文件名不能为空".to_string()));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(FaviconError::InvalidConfig(format!(
                "输出文件名不能包含路径：{}",
                name
            )));
        }
        Ok(())
    }
}
