//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配：
//! - 加载阶段（`NotFound` / `FileSystem` / `InvalidFormat` / `Decode` / `ResourceLimit`）属于致命错误
//! - 产物阶段（`FileSystem` / `Encode`）只影响单个步骤

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 该类型会在入口层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    #[error("文件不存在：{}", .0.display())]
    NotFound(PathBuf),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::FaviconError;
    use std::path::PathBuf;

    #[test]
    fn not_found_message_contains_path() {
        let err = FaviconError::NotFound(PathBuf::from("missing/favicon.png"));
        assert!(err.to_string().contains("missing/favicon.png"));
    }

    #[test]
    fn encode_message_is_prefixed() {
        assert_eq!(FaviconError::Encode("boom".to_string()).to_string(), "编码错误：boom");
    }
}
