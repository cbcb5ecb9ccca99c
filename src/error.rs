//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义入口层统一的 `AppError` 枚举，与生成链路内部的 `FaviconError` 分层：
//! `FaviconError` 描述“哪一步为什么失败”，`AppError` 描述“这次运行为什么不能继续”。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `FaviconError` 提供 `From` 转换，无需手动 map；I/O 错误在生成链路内已归入 `FaviconError`。
//! - `exit_code` 把错误映射为进程退出码。

use std::path::PathBuf;

use crate::favicon::FaviconError;

/// 退出码：运行成功。
pub const EXIT_SUCCESS: u8 = 0;
/// 退出码：输入缺失或源图加载失败。
pub const EXIT_LOAD_FAILURE: u8 = 1;
/// 退出码：参数错误，或严格模式下存在失败步骤。
pub const EXIT_USAGE_OR_PARTIAL: u8 = 2;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 输入文件不存在
    #[error("输入文件 '{}' 不存在！", .0.display())]
    InputNotFound(PathBuf),

    /// 参数个数或取值不合法
    #[error("参数错误: {0}")]
    Usage(String),

    /// 生成流水线错误（配置 / 加载）
    #[error("{0}")]
    Favicon(#[from] FaviconError),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => EXIT_USAGE_OR_PARTIAL,
            Self::InputNotFound(_) | Self::Favicon(_) => EXIT_LOAD_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_failures_map_to_exit_one() {
        assert_eq!(AppError::InputNotFound(PathBuf::from("x.png")).exit_code(), 1);
        assert_eq!(
            AppError::from(FaviconError::Decode("bad".to_string())).exit_code(),
            1
        );
    }

    #[test]
    fn usage_errors_map_to_exit_two() {
        assert_eq!(AppError::Usage("too many".to_string()).exit_code(), 2);
    }
}
