//! # 缩放与编码流水线模块
//!
//! ## 设计思路
//!
//! 所有产物都经过同一条“源图 → 方形缩放 → PNG 字节”链路，集中在此处管理。
//! 缩放强制为 `edge x edge`，不保持宽高比、不裁剪。
//!
//! ## 实现思路
//!
//! 1. 优先使用 `fast_image_resize` 卷积缩放（SIMD）
//! 2. 失败时回退 `image::imageops::resize`，保证步骤不因加速库异常而失败
//! 3. PNG 编码按配置选择“体积优化”或默认参数

use fast_image_resize as fr;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageBuffer, ImageEncoder, Rgba, RgbaImage};

use super::source::{DerivedRaster, SourceImage};
use super::FaviconError;

/// 将源图缩放为 `edge x edge` 的方形位图。
pub fn resize_square(
    source: &SourceImage,
    edge: u32,
    filter: FilterType,
) -> Result<DerivedRaster, FaviconError> {
    if edge == 0 {
        return Err(FaviconError::InvalidConfig("缩放边长不能为 0".to_string()));
    }

    let pixels = match resize_with_fast_image_resize(source.pixels(), edge, edge, filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            image::imageops::resize(source.pixels(), edge, edge, filter)
        }
    };

    Ok(DerivedRaster { edge, pixels })
}

fn resize_with_fast_image_resize(
    src: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, FaviconError> {
    let (src_width, src_height) = src.dimensions();

    let src_image =
        fr::images::ImageRef::new(src_width, src_height, src.as_raw(), fr::PixelType::U8x4)
            .map_err(|e| FaviconError::Decode(format!("构建源图像视图失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| FaviconError::Encode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| FaviconError::Encode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

/// 将 RGBA 位图编码为 PNG 字节。
///
/// `optimize` 为真时使用最高压缩级别与自适应行过滤，换取更小的文件体积。
pub fn encode_png(pixels: &RgbaImage, optimize: bool) -> Result<Vec<u8>, FaviconError> {
    let compression = if optimize {
        CompressionType::Best
    } else {
        CompressionType::Default
    };

    let mut bytes = Vec::new();
    PngEncoder::new_with_quality(&mut bytes, compression, PngFilterType::Adaptive)
        .write_image(
            pixels.as_raw(),
            pixels.width(),
            pixels.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| FaviconError::Encode(format!("PNG 编码失败：{}", e)))?;

    Ok(bytes)
}
