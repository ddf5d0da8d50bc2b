//! # 编解码模块
//!
//! 封装外部编解码能力：图片编码走 `image` / `webp` crate，
//! 音频转码委托给 PATH 中的 ffmpeg。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 子模块: image, audio

pub mod audio;
pub mod image;

use std::fs;
use std::path::Path;

use crate::error::{Result, WeboptError};

/// 读取文件在磁盘上的实际字节数
///
/// 报告里的所有尺寸都来自这里，而不是编码器的估算值。
pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| WeboptError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })
}
