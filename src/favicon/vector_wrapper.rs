//! # SVG 包装模块
//!
//! ## 设计思路
//!
//! SVG 产物并非真正的矢量化，而是把 PNG 以 base64 Data URL 的形式嵌入 `<image>` 元素。
//! 中间 PNG 先写入输出目录下的临时文件，再读回字节嵌入。
//!
//! ## 实现思路
//!
//! - 临时文件由 `TempArtifact` RAII 守卫持有：构造时写入，`Drop` 时删除。
//! - 无论编码、读取还是写出哪一步失败，守卫离开作用域都会清理临时文件。
//! - 删除失败只记录警告，不影响步骤结果。

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose};

use super::generator::write_artifact;
use super::pipeline::{encode_png, resize_square};
use super::source::{SourceImage, StepReport};
use super::{FaviconError, FaviconGenerator};

// ============================================================================
// TempArtifact — RAII 临时文件
// ============================================================================

/// 临时文件的 RAII 守卫。
///
/// # 示例
/// ```rust,ignore
/// let temp = TempArtifact::write(dir.join("temp_for_svg.png"), &png)?;
/// let bytes = temp.read()?;
/// // temp 离开作用域时文件已被删除
/// ```
pub(crate) struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// 写入临时文件。写入失败时同样会尝试清理残留。
    pub(crate) fn write(path: PathBuf, bytes: &[u8]) -> Result<Self, FaviconError> {
        let guard = Self { path };
        fs::write(&guard.path, bytes).map_err(|e| {
            FaviconError::FileSystem(format!(
                "无法写入临时文件 {}：{}",
                guard.path.display(),
                e
            ))
        })?;
        Ok(guard)
    }

    pub(crate) fn read(&self) -> Result<Vec<u8>, FaviconError> {
        fs::read(&self.path).map_err(|e| {
            FaviconError::FileSystem(format!("无法读取临时文件 {}：{}", self.path.display(), e))
        })
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => log::debug!("🧹 已删除临时文件: {}", self.path.display()),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::warn!("⚠️ 删除临时文件失败 {}：{}", self.path.display(), err),
        }
    }
}

// ============================================================================
// SVG 生成
// ============================================================================

/// 构造内嵌 PNG 的 SVG 文档。
pub fn render_svg(png_bytes: &[u8], size: u32) -> String {
    let encoded = general_purpose::STANDARD.encode(png_bytes);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     xmlns:xlink="http://www.w3.org/1999/xlink"
     width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <image width="{size}" height="{size}"
         xlink:href="data:image/png;base64,{encoded}"/>
</svg>"#
    )
}

impl FaviconGenerator {
    /// 生成 SVG 包装文件，临时 PNG 在返回前一定被删除。
    pub fn generate_vector_wrapper(&self, source: &SourceImage, output_dir: &Path) -> StepReport {
        let result = self.write_vector_wrapper(source, output_dir);
        Self::record(&self.config.vector_file_name, result)
    }

    fn write_vector_wrapper(
        &self,
        source: &SourceImage,
        output_dir: &Path,
    ) -> Result<PathBuf, FaviconError> {
        let size = self.config.vector_size;
        let raster = resize_square(source, size, self.config.resize_filter)?;
        let png = encode_png(raster.pixels(), false)?;

        let temp = TempArtifact::write(output_dir.join(&self.config.vector_temp_file_name), &png)?;
        let embedded = temp.read()?;

        let svg = render_svg(&embedded, size);
        write_artifact(&output_dir.join(&self.config.vector_file_name), svg.as_bytes())
    }
}
