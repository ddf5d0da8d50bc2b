//! # 统一错误处理模块
//!
//! 定义 Webopt 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Webopt 统一错误类型
#[derive(Error, Debug)]
pub enum WeboptError {
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

    // ─────────────────────────────────────────────────────────────
    // 编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode image: {path}\nReason: {reason}")]
    ImageDecodeError { path: String, reason: String },

    #[error("Failed to encode {format} image: {path}\nReason: {reason}")]
    ImageEncodeError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部命令错误
    // ─────────────────────────────────────────────────────────────
    #[error("External command '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("External command failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WeboptError>;
