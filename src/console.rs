//! 控制台输出模块
//!
//! 面向用户的文本（横幅、逐步骤结果、汇总、后续提示、用法）统一在此渲染为字符串，
//! 由入口负责打印；诊断信息走 `log`。

use std::fmt::Write as _;
use std::path::Path;

use crate::favicon::{FaviconConfig, GenerationReport, SourceImage, StepReport};
use crate::invocation::Invocation;

const RULE_WIDTH: usize = 40;

/// 运行开始时的横幅。
pub fn render_banner(invocation: &Invocation) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "🎨 Favicon 生成器\n{rule}\n📥 输入: {}\n📤 输出: {}\n{rule}",
        invocation.input.display(),
        invocation.output_dir.display()
    )
}

/// 输入缺失时的用法提示。
pub fn render_usage(program: &str) -> String {
    format!(
        "用法:\n  {program} [输入图片] [输出目录]\n  {program} favicon.png ../images\n  {program} my_icon.png /path/to/output\n  {program} --strict -- -icon.png out"
    )
}

/// 源图加载成功行。
pub fn render_loaded(source: &SourceImage) -> String {
    format!(
        "✓ 已加载图片: {} ({}x{})",
        source.origin().display(),
        source.width(),
        source.height()
    )
}

/// 单步结果行。
pub fn render_step(step: &StepReport, config: &FaviconConfig) -> String {
    match &step.result {
        Ok(_) => match describe_artifact(&step.artifact, config) {
            Some(detail) => format!("✓ 已生成: {} ({})", step.artifact, detail),
            None => format!("✓ 已生成: {}", step.artifact),
        },
        Err(err) => format!("✗ 生成 {} 失败: {}", step.artifact, err),
    }
}

fn describe_artifact(artifact: &str, config: &FaviconConfig) -> Option<String> {
    if artifact == config.icon_file_name {
        let sizes: Vec<String> = config
            .icon_sizes
            .iter()
            .map(|size| format!("{size}x{size}"))
            .collect();
        return Some(sizes.join(", "));
    }
    config
        .raster_set
        .iter()
        .find(|spec| spec.file_name == artifact)
        .map(|spec| format!("{0}x{0}", spec.edge))
}

/// 完成汇总：名义产物清单 + 失败步骤计数。
///
/// 逐步骤结果行已在执行过程中实时输出；产物清单无条件完整列出，与各步骤是否成功无关。
pub fn render_summary(report: &GenerationReport, config: &FaviconConfig, output_dir: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n🎉 图标生成完成！");
    let _ = writeln!(out, "📁 输出目录: {}", output_dir.display());
    let _ = writeln!(out, "\n生成的文件:");
    for name in config.expected_outputs() {
        if name == config.icon_file_name {
            let _ = writeln!(out, "  - {} (多尺寸)", name);
        } else {
            let _ = writeln!(out, "  - {}", name);
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        let _ = writeln!(out, "\n⚠️ 有 {} 个步骤失败，详见上方输出", failed);
    }

    out.trim_end().to_string()
}

/// 成功后的后续操作提示。
pub fn render_next_steps() -> String {
    [
        "💡 后续步骤:",
        "1. 将生成的文件复制到网站的 images 目录",
        "2. 在 HTML <head> 中更新 favicon 链接",
        "3. 清除浏览器缓存以查看效果",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::FaviconError;
    use std::path::PathBuf;

    fn sample_report() -> GenerationReport {
        let mut report = GenerationReport::default();
        report.push(StepReport::new("favicon-32x32.png", Ok(PathBuf::from("out/favicon-32x32.png"))));
        report.push(StepReport::new(
            "favicon.ico",
            Err(FaviconError::FileSystem("denied".to_string())),
        ));
        report
    }

    #[test]
    fn step_lines_describe_sizes() {
        let config = FaviconConfig::default();
        let report = sample_report();

        assert_eq!(
            render_step(&report.steps()[0], &config),
            "✓ 已生成: favicon-32x32.png (32x32)"
        );
        assert!(render_step(&report.steps()[1], &config).starts_with("✗ 生成 favicon.ico 失败"));
    }

    #[test]
    fn summary_lists_every_expected_output_even_on_failure() {
        let config = FaviconConfig::default();
        let summary = render_summary(&sample_report(), &config, Path::new("out"));

        for name in config.expected_outputs() {
            assert!(summary.contains(&format!("  - {}", name)), "missing {name}");
        }
        assert!(summary.contains("有 1 个步骤失败"));
    }

    #[test]
    fn loaded_line_shows_origin_and_size() {
        let source = SourceImage::new(
            image::RgbaImage::new(100, 50),
            PathBuf::from("assets/favicon.png"),
        );

        assert_eq!(render_loaded(&source), "✓ 已加载图片: assets/favicon.png (100x50)");
    }

    #[test]
    fn usage_mentions_double_dash_for_hyphen_paths() {
        assert!(render_usage("favicon-forge").contains("favicon-forge --strict -- -icon.png out"));
    }

    #[test]
    fn banner_shows_both_paths() {
        let inv = Invocation::resolve(Vec::new(), false).expect("resolve failed");
        let banner = render_banner(&inv);

        assert!(banner.contains("📥 输入: favicon.png"));
        assert!(banner.contains("📤 输出: ../images"));
    }
}
