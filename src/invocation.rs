//! 命令行调用解析模块
//!
//! # 设计思路
//!
//! 位置参数的含义完全由“参数个数”决定，因此先由 `clap` 收集全部路径，
//! 再由 `Invocation::resolve` 显式按个数分支，避免在入口处零散地按下标取值。
//!
//! | 个数 | 输入 | 输出 |
//! |------|------|------|
//! | 0 | `favicon.png` | `../images` |
//! | 1 | 参数 1 | `../images` |
//! | 2 | 参数 1 | 参数 2 |
//! | 其他 | 参数错误 | |

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{AppError, EXIT_SUCCESS, EXIT_USAGE_OR_PARTIAL};
use crate::favicon::{FaviconConfig, FaviconGenerator, GenerationReport, SourceImage, StepReport};

/// 默认输入文件（当前目录）。
pub const DEFAULT_INPUT: &str = "favicon.png";
/// 默认输出目录。
pub const DEFAULT_OUTPUT_DIR: &str = "../images";

/// 从单张源图生成网站图标全套资源。
#[derive(Debug, Parser)]
#[command(name = "favicon-forge", version, about)]
pub struct Cli {
    /// [输入图片] [输出目录]（允许以 `-` 开头的路径）
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// 任一产物生成失败时以退出码 2 结束
    #[arg(long)]
    pub strict: bool,
}

/// 解析后的一次运行参数。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub strict: bool,
}

impl Invocation {
    /// 按位置参数个数解析输入与输出路径。
    ///
    /// # 示例
    /// ```rust
    /// use std::path::PathBuf;
    /// use favicon_forge::invocation::Invocation;
    ///
    /// let inv = Invocation::resolve(vec![PathBuf::from("logo.png")], false)?;
    /// assert_eq!(inv.output_dir, PathBuf::from("../images"));
    /// # Ok::<(), favicon_forge::error::AppError>(())
    /// ```
    pub fn resolve(paths: Vec<PathBuf>, strict: bool) -> Result<Self, AppError> {
        let count = paths.len();
        let mut iter = paths.into_iter();
        let (input, output_dir) = match (iter.next(), iter.next(), iter.next()) {
            (None, _, _) => (PathBuf::from(DEFAULT_INPUT), PathBuf::from(DEFAULT_OUTPUT_DIR)),
            (Some(input), None, _) => (input, PathBuf::from(DEFAULT_OUTPUT_DIR)),
            (Some(input), Some(output_dir), None) => (input, output_dir),
            _ => {
                return Err(AppError::Usage(format!(
                    "最多接受 2 个位置参数，实际收到 {} 个",
                    count
                )));
            }
        };

        Ok(Self {
            input,
            output_dir,
            strict,
        })
    }

    pub fn from_cli(cli: Cli) -> Result<Self, AppError> {
        Self::resolve(cli.paths, cli.strict)
    }

    /// 执行一次完整生成。
    ///
    /// 输入缺失时直接返回错误，不会创建输出目录。
    pub fn execute(&self, config: FaviconConfig) -> Result<GenerationReport, AppError> {
        self.execute_with_hooks(config, |_| {}, |_| {})
    }

    /// 执行一次完整生成，并在加载完成与每个步骤结束时回调。
    pub fn execute_with_hooks<L, S>(
        &self,
        config: FaviconConfig,
        on_loaded: L,
        on_step: S,
    ) -> Result<GenerationReport, AppError>
    where
        L: Fn(&SourceImage),
        S: Fn(&StepReport),
    {
        if !Path::new(&self.input).exists() {
            return Err(AppError::InputNotFound(self.input.clone()));
        }

        let generator = FaviconGenerator::new(config)?;
        Ok(generator.generate_with_hooks(&self.input, &self.output_dir, on_loaded, on_step)?)
    }

    /// 成功运行后的退出码。
    ///
    /// 默认只要源图加载成功即为 0；严格模式下存在失败步骤返回 2。
    pub fn exit_code(&self, report: &GenerationReport) -> u8 {
        if self.strict && !report.is_complete() {
            EXIT_USAGE_OR_PARTIAL
        } else {
            EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn no_arguments_use_defaults() {
        let inv = Invocation::resolve(Vec::new(), false).expect("resolve failed");

        assert_eq!(inv.input, PathBuf::from("favicon.png"));
        assert_eq!(inv.output_dir, PathBuf::from("../images"));
    }

    #[test]
    fn one_argument_sets_input_only() {
        let inv = Invocation::resolve(paths(&["logo.png"]), false).expect("resolve failed");

        assert_eq!(inv.input, PathBuf::from("logo.png"));
        assert_eq!(inv.output_dir, PathBuf::from("../images"));
    }

    #[test]
    fn two_arguments_set_both_paths() {
        let inv = Invocation::resolve(paths(&["logo.png", "/tmp/out"]), true).expect("resolve failed");

        assert_eq!(inv.input, PathBuf::from("logo.png"));
        assert_eq!(inv.output_dir, PathBuf::from("/tmp/out"));
        assert!(inv.strict);
    }

    #[test]
    fn three_arguments_are_rejected() {
        let result = Invocation::resolve(paths(&["a", "b", "c"]), false);

        assert!(matches!(result, Err(AppError::Usage(_))));
    }

    #[test]
    fn clap_collects_positional_paths_and_flag() {
        let cli = Cli::try_parse_from(["favicon-forge", "--strict", "in.png", "out"])
            .expect("parse failed");
        let inv = Invocation::from_cli(cli).expect("resolve failed");

        assert_eq!(inv.input, PathBuf::from("in.png"));
        assert_eq!(inv.output_dir, PathBuf::from("out"));
        assert!(inv.strict);
    }

    #[test]
    fn clap_accepts_paths_starting_with_hyphen() {
        let cli = Cli::try_parse_from(["favicon-forge", "-logo.png", "out"]).expect("parse failed");
        let inv = Invocation::from_cli(cli).expect("resolve failed");

        assert_eq!(inv.input, PathBuf::from("-logo.png"));
        assert_eq!(inv.output_dir, PathBuf::from("out"));
        assert!(!inv.strict);
    }

    #[test]
    fn clap_accepts_double_dash_separator() {
        let cli = Cli::try_parse_from(["favicon-forge", "--strict", "--", "-logo.png"])
            .expect("parse failed");
        let inv = Invocation::from_cli(cli).expect("resolve failed");

        assert_eq!(inv.input, PathBuf::from("-logo.png"));
        assert!(inv.strict);
    }

    #[test]
    fn missing_input_is_reported_before_touching_output() {
        let dir = tempfile::tempdir().expect("create temp dir failed");
        let inv = Invocation::resolve(
            vec![dir.path().join("missing.png"), dir.path().join("out")],
            false,
        )
        .expect("resolve failed");

        let result = inv.execute(FaviconConfig::default());

        assert!(matches!(result, Err(AppError::InputNotFound(_))));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn execute_with_hooks_streams_load_line_before_step_lines() {
        use std::cell::RefCell;

        use crate::console;

        let dir = tempfile::tempdir().expect("create temp dir failed");
        let input = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(20, 10, image::Rgba([200, 10, 10, 255]))
            .save(&input)
            .expect("write input failed");
        let inv = Invocation::resolve(vec![input, dir.path().join("out")], false)
            .expect("resolve failed");
        let config = FaviconConfig::default();
        let lines = RefCell::new(Vec::new());

        let report = inv
            .execute_with_hooks(
                config.clone(),
                |source| lines.borrow_mut().push(console::render_loaded(source)),
                |step| lines.borrow_mut().push(console::render_step(step, &config)),
            )
            .expect("execute failed");

        let lines = lines.into_inner();
        assert_eq!(lines.len(), report.steps().len() + 1);
        assert!(lines[0].starts_with("✓ 已加载图片:"));
        assert!(lines[0].ends_with("(20x10)"));
        assert_eq!(lines[1], "✓ 已生成: favicon-32x32.png (32x32)");
        assert!(lines[1..].iter().all(|line| line.starts_with("✓ 已生成:")));
    }
}
