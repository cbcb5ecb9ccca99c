//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验，目标是尽快失败，减少不必要内存与 CPU 消耗。
//! 加载失败是整个流程唯一的致命错误。
//!
//! ## 实现思路
//!
//! 1. 存在性 + metadata 体积限制
//! 2. 读取字节并猜测格式
//! 3. 仅读 header 尺寸，按像素上限快速拒绝
//! 4. 完整解码并统一转换为 RGBA（缺少 alpha 的源图补全不透明通道）

use std::io::Cursor;
use std::path::Path;

use image::{GenericImageView, ImageReader};

use super::source::SourceImage;
use super::{FaviconConfig, FaviconError};

/// 从本地路径加载源图。
pub fn load(path: &Path, config: &FaviconConfig) -> Result<SourceImage, FaviconError> {
    log::debug!("📁 开始读取源图 - 路径: {}", path.display());

    if !path.exists() {
        return Err(FaviconError::NotFound(path.to_path_buf()));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| FaviconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

    if metadata.len() > config.max_file_size {
        return Err(FaviconError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            metadata.len() as f64 / 1024.0 / 1024.0,
            config.max_file_size as f64 / 1024.0 / 1024.0
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| FaviconError::FileSystem(format!("无法读取图片文件：{}", e)))?;

    decode_from_memory(&bytes, config).map(|pixels| SourceImage::new(pixels, path.to_path_buf()))
}

/// 将内存中的图片字节解码为 RGBA。
pub(crate) fn decode_from_memory(
    bytes: &[u8],
    config: &FaviconConfig,
) -> Result<image::RgbaImage, FaviconError> {
    image::guess_format(bytes)
        .map_err(|e| FaviconError::InvalidFormat(format!("不支持的图片格式：{}", e)))?;

    let (header_width, header_height) = inspect_dimensions(bytes)?;
    validate_pixel_limits(config, header_width, header_height)?;

    let decoded = image::load_from_memory(bytes)
        .map_err(|e| FaviconError::Decode(format!("图片解码失败：{}", e)))?;

    let (width, height) = decoded.dimensions();
    validate_pixel_limits(config, width, height)?;

    log::debug!(
        "✅ 源图解码成功 - 尺寸: {}x{} 颜色: {:?}",
        width,
        height,
        decoded.color()
    );

    Ok(decoded.to_rgba8())
}

/// 仅通过图片头信息读取宽高。
fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), FaviconError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FaviconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

    reader
        .into_dimensions()
        .map_err(|e| FaviconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
}

fn validate_pixel_limits(config: &FaviconConfig, width: u32, height: u32) -> Result<(), FaviconError> {
    if width == 0 || height == 0 {
        return Err(FaviconError::InvalidFormat(format!(
            "图片尺寸无效：{}x{}",
            width, height
        )));
    }

    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| FaviconError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(FaviconError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}
