//! # 统一错误处理模块
//!
//! 定义 Hefconv 的所有错误类型，使用 `thiserror` 派生。
//!
//! 按照设计，逐文件的解析失败只产生警告，不会出现在这里；
//! 仅输入目录不可枚举、输出不可写这类硬性前置条件才是致命错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Hefconv 统一错误类型
#[derive(Error, Debug)]
pub enum HefconvError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HefconvError>;
