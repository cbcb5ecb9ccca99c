//! 方形 PNG 产物集合。
//!
//! 每个 `RasterSpec` 独立生成，单个失败只记录在对应的 `StepReport` 中。

use std::path::{Path, PathBuf};

use super::config::RasterSpec;
use super::generator::write_artifact;
use super::pipeline::{encode_png, resize_square};
use super::source::{SourceImage, StepReport};
use super::{FaviconError, FaviconGenerator};

impl FaviconGenerator {
    /// 按配置清单生成全部方形 PNG，返回值与清单一一对应。
    pub fn generate_raster_set(&self, source: &SourceImage, output_dir: &Path) -> Vec<StepReport> {
        self.config
            .raster_set
            .iter()
            .map(|spec| self.generate_raster(source, spec, output_dir))
            .collect()
    }

    /// 生成单个方形 PNG。
    pub(super) fn generate_raster(
        &self,
        source: &SourceImage,
        spec: &RasterSpec,
        output_dir: &Path,
    ) -> StepReport {
        let result = self.write_raster(source, spec, output_dir);
        Self::record(&spec.file_name, result)
    }

    fn write_raster(
        &self,
        source: &SourceImage,
        spec: &RasterSpec,
        output_dir: &Path,
    ) -> Result<PathBuf, FaviconError> {
        let raster = resize_square(source, spec.edge, self.config.resize_filter)?;
        let bytes = encode_png(raster.pixels(), self.config.optimize_png)?;
        write_artifact(&output_dir.join(&spec.file_name), &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::FaviconConfig;
    use image::{Rgba, RgbaImage};

    fn small_config() -> FaviconConfig {
        FaviconConfig {
            raster_set: vec![RasterSpec::new("a.png", 8), RasterSpec::new("b.png", 12)],
            ..FaviconConfig::default()
        }
    }

    fn source() -> SourceImage {
        SourceImage::new(
            RgbaImage::from_pixel(30, 10, Rgba([10, 20, 30, 255])),
            PathBuf::from("src.png"),
        )
    }

    #[test]
    fn writes_every_configured_raster() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let generator = FaviconGenerator::new(small_config()).expect("generator init failed");

        let reports = generator.generate_raster_set(&source(), dir.path());

        assert_eq!(reports.len(), 2);
        for (report, edge) in reports.iter().zip([8, 12]) {
            let path = report.result.as_ref().expect("raster step failed");
            let decoded = image::open(path).expect("decode output failed");
            assert_eq!((decoded.width(), decoded.height()), (edge, edge));
        }
    }

    #[test]
    fn failure_of_one_raster_does_not_stop_others() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        // 占用 a.png 的位置为目录，使写入失败
        std::fs::create_dir(dir.path().join("a.png")).expect("create blocker failed");
        let generator = FaviconGenerator::new(small_config()).expect("generator init failed");

        let reports = generator.generate_raster_set(&source(), dir.path());

        assert!(matches!(reports[0].result, Err(FaviconError::FileSystem(_))));
        assert!(reports[1].is_success());
        assert!(dir.path().join("b.png").is_file());
    }
}
