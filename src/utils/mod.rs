//! # 工具函数模块
//!
//! 提供美化输出、进度条、字节数与节省率格式化等工具。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: format, output, progress

pub mod format;
pub mod output;
pub mod progress;
