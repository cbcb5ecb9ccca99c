//! # 多分辨率图标容器
//!
//! 每个尺寸独立缩放并编码为 PNG 帧，按配置顺序写入同一个 ICO 文件，
//! 第一个尺寸即容器的主帧。

use std::path::{Path, PathBuf};

use image::ExtendedColorType;
use image::codecs::ico::{IcoEncoder, IcoFrame};

use super::generator::write_artifact;
use super::pipeline::{encode_png, resize_square};
use super::source::{SourceImage, StepReport};
use super::{FaviconError, FaviconGenerator};

impl FaviconGenerator {
    /// 生成包含全部 `icon_sizes` 帧的图标容器。
    pub fn generate_icon_container(&self, source: &SourceImage, output_dir: &Path) -> StepReport {
        let result = self.write_icon_container(source, output_dir);
        Self::record(&self.config.icon_file_name, result)
    }

    fn write_icon_container(
        &self,
        source: &SourceImage,
        output_dir: &Path,
    ) -> Result<PathBuf, FaviconError> {
        let bytes = self.encode_icon_container(source)?;
        write_artifact(&output_dir.join(&self.config.icon_file_name), &bytes)
    }

    /// 在内存中编码完整的 ICO 字节。
    pub(crate) fn encode_icon_container(&self, source: &SourceImage) -> Result<Vec<u8>, FaviconError> {
        let encoded_frames = self
            .config
            .icon_sizes
            .iter()
            .map(|&edge| -> Result<(u32, Vec<u8>), FaviconError> {
                let raster = resize_square(source, edge, self.config.resize_filter)?;
                Ok((edge, encode_png(raster.pixels(), self.config.optimize_png)?))
            })
            .collect::<Result<Vec<_>, FaviconError>>()?;

        let frames = encoded_frames
            .iter()
            .map(|(edge, png)| {
                IcoFrame::with_encoded(png.as_slice(), *edge, *edge, ExtendedColorType::Rgba8)
                    .map_err(|e| FaviconError::Encode(format!("构建 {}px 图标帧失败：{}", edge, e)))
            })
            .collect::<Result<Vec<_>, FaviconError>>()?;

        let mut bytes = Vec::new();
        IcoEncoder::new(&mut bytes)
            .encode_images(&frames)
            .map_err(|e| FaviconError::Encode(format!("ICO 编码失败：{}", e)))?;

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::FaviconConfig;
    use image::{GenericImageView, Rgba, RgbaImage};

    /// 读取 ICONDIR 目录项中的宽高（0 表示 256）。
    fn directory_sizes(bytes: &[u8]) -> Vec<(u32, u32)> {
        let count = u16::from_le_bytes([bytes[4], bytes[5]]) as usize;
        (0..count)
            .map(|i| {
                let entry = &bytes[6 + i * 16..6 + (i + 1) * 16];
                let edge = |b: u8| if b == 0 { 256 } else { b as u32 };
                (edge(entry[0]), edge(entry[1]))
            })
            .collect()
    }

    fn generator() -> FaviconGenerator {
        FaviconGenerator::new(FaviconConfig::default()).expect("generator init failed")
    }

    fn source() -> SourceImage {
        SourceImage::new(
            RgbaImage::from_pixel(100, 50, Rgba([0, 128, 255, 255])),
            PathBuf::from("src.png"),
        )
    }

    #[test]
    fn container_holds_frames_in_configured_order() {
        let bytes = generator().encode_icon_container(&source()).expect("encode failed");

        assert_eq!(&bytes[0..4], &[0, 0, 1, 0]);
        assert_eq!(directory_sizes(&bytes), vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn container_is_decodable() {
        let bytes = generator().encode_icon_container(&source()).expect("encode failed");
        let decoded = image::load_from_memory(&bytes).expect("decode ico failed");

        assert!(matches!(decoded.dimensions(), (16, 16) | (32, 32) | (48, 48)));
    }

    #[test]
    fn writes_container_to_output_dir() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let report = generator().generate_icon_container(&source(), dir.path());

        let path = report.result.expect("icon step failed");
        assert_eq!(path, dir.path().join("favicon.ico"));
        assert!(path.is_file());
    }
}
