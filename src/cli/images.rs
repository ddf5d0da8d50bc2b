//! # images 子命令 CLI 定义
//!
//! 图片批量优化参数 (PNG/JPEG -> WebP + 回退格式)。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/images.rs`

use clap::Args;
use std::path::PathBuf;

/// images 子命令参数
#[derive(Args, Debug, Clone)]
pub struct ImagesArgs {
    /// Input directory containing PNG/JPEG images
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Output directory for optimized artifacts
    #[arg(short, long, default_value = "optimized")]
    pub output: PathBuf,

    /// WebP/JPEG quality (0-100); reinterpreted as lossless level for PNG
    #[arg(short, long, default_value_t = 85)]
    pub quality: u8,

    /// File names to skip, comma separated
    #[arg(long, value_delimiter = ',', default_value = "rrss.jpg")]
    pub exclude: Vec<String>,
}
