//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `FaviconGenerator` 只负责流程编排与配置管理，不直接与控制台绑定。
//! 处理链路固定为：
//! 1. 确保输出目录存在（失败不致命，后续步骤各自报告写入失败）
//! 2. 加载源图（唯一的致命步骤）
//! 3. PNG 集合 → 图标容器 → SVG 包装 → manifest，顺序执行、互不阻断
//!
//! ## 实现思路
//!
//! - 配置在构建时校验，运行期只读。
//! - 每个产物的结果以 `StepReport` 记录，调用方可以自行判断部分失败。
//! - 记录 `load/rasters/icon/vector/manifest/total` 阶段耗时，便于性能诊断。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::loader;
use super::source::{GenerationReport, SourceImage, StepReport};
use super::{FaviconConfig, FaviconError};

/// 图标生成器。
pub struct FaviconGenerator {
    pub(super) config: FaviconConfig,
}

impl FaviconGenerator {
    /// 根据配置创建生成器，配置非法时立即返回错误。
    ///
    /// # 示例
    /// ```rust
    /// use favicon_forge::favicon::{FaviconConfig, FaviconGenerator};
    ///
    /// let generator = FaviconGenerator::new(FaviconConfig::default())?;
    /// assert_eq!(generator.config().icon_sizes, vec![16, 32, 48]);
    /// # Ok::<(), favicon_forge::favicon::FaviconError>(())
    /// ```
    pub fn new(config: FaviconConfig) -> Result<Self, FaviconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FaviconConfig {
        &self.config
    }

    /// 加载并规范化源图。
    pub fn load(&self, input: &Path) -> Result<SourceImage, FaviconError> {
        loader::load(input, &self.config)
    }

    /// 处理主入口：生成全部产物。
    ///
    /// 返回 `Err` 仅代表源图加载失败；各产物的失败记录在 `GenerationReport` 中。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use std::path::Path;
    /// use favicon_forge::favicon::{FaviconConfig, FaviconGenerator};
    ///
    /// let generator = FaviconGenerator::new(FaviconConfig::default())?;
    /// let report = generator.generate(Path::new("favicon.png"), Path::new("../images"))?;
    /// for failed in report.failures() {
    ///     eprintln!("{} failed", failed.artifact);
    /// }
    /// # Ok::<(), favicon_forge::favicon::FaviconError>(())
    /// ```
    pub fn generate(&self, input: &Path, output_dir: &Path) -> Result<GenerationReport, FaviconError> {
        self.generate_with_hooks(input, output_dir, |_| {}, |_| {})
    }

    /// 带回调的生成入口。
    ///
    /// `on_loaded` 在源图加载成功后立即调用，`on_step` 在每个步骤结束时按执行顺序调用，
    /// 便于调用方实时输出进度。
    pub fn generate_with_hooks<L, S>(
        &self,
        input: &Path,
        output_dir: &Path,
        on_loaded: L,
        on_step: S,
    ) -> Result<GenerationReport, FaviconError>
    where
        L: Fn(&SourceImage),
        S: Fn(&StepReport),
    {
        let total_start = Instant::now();
        let mut report = GenerationReport::default();
        let mut push = |step: StepReport| {
            on_step(&step);
            report.push(step);
        };

        if let Err(err) = fs::create_dir_all(output_dir) {
            let err = FaviconError::FileSystem(format!(
                "无法创建输出目录 {}：{}",
                output_dir.display(),
                err
            ));
            push(Self::record(&output_dir.display().to_string(), Err(err)));
        }

        let load_start = Instant::now();
        let source = self.load(input)?;
        let load_elapsed = load_start.elapsed();
        log::info!(
            "✅ 已加载源图: {} ({}x{})",
            source.origin().display(),
            source.width(),
            source.height()
        );
        on_loaded(&source);

        let rasters_start = Instant::now();
        for spec in &self.config.raster_set {
            push(self.generate_raster(&source, spec, output_dir));
        }
        let rasters_elapsed = rasters_start.elapsed();

        let icon_start = Instant::now();
        push(self.generate_icon_container(&source, output_dir));
        let icon_elapsed = icon_start.elapsed();

        let vector_start = Instant::now();
        push(self.generate_vector_wrapper(&source, output_dir));
        let vector_elapsed = vector_start.elapsed();

        let manifest_start = Instant::now();
        push(self.generate_manifest(output_dir));
        let manifest_elapsed = manifest_start.elapsed();

        log::info!(
            "✅ 图标生成完成 - load={}ms rasters={}ms icon={}ms vector={}ms manifest={}ms total={}ms",
            load_elapsed.as_millis(),
            rasters_elapsed.as_millis(),
            icon_elapsed.as_millis(),
            vector_elapsed.as_millis(),
            manifest_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }

    /// 记录单步结果并输出对应日志。
    pub(super) fn record(artifact: &str, result: Result<PathBuf, FaviconError>) -> StepReport {
        match &result {
            Ok(path) => log::debug!("💾 已写出 {}: {}", artifact, path.display()),
            Err(err) => log::warn!("⚠️ 生成 {} 失败：{}", artifact, err),
        }
        StepReport::new(artifact, result)
    }
}

/// 写出产物字节，返回写出的路径。
pub(super) fn write_artifact(path: &Path, bytes: &[u8]) -> Result<PathBuf, FaviconError> {
    fs::write(path, bytes)
        .map_err(|e| FaviconError::FileSystem(format!("无法写入 {}：{}", path.display(), e)))?;
    Ok(path.to_path_buf())
}
