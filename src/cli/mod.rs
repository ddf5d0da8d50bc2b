//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `images`: 图片批量优化 (PNG/JPEG -> WebP + 回退格式)
//! - `audio`:  音频重编码 (MP3 降码率)
//! - `all`:    完整流水线（图片 + 音频 + 汇总报告）
//!
//! 所有参数都带默认值，不加任何参数直接运行即可复现
//! 固定配置（质量 85、码率 96k、排除 rrss.jpg 等）。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: images, audio, all

pub mod all;
pub mod audio;
pub mod images;

use clap::{Parser, Subcommand};

/// Webopt - 网页资源批量优化工具
#[derive(Parser)]
#[command(name = "webopt")]
#[command(version)]
#[command(about = "A batch web asset optimizer (images to WebP + audio re-encoding)", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Optimize images: encode WebP plus a re-encoded fallback per input
    Images(images::ImagesArgs),

    /// Re-encode a single MP3 to a lower bitrate via ffmpeg
    Audio(audio::AudioArgs),

    /// Run the full pipeline: images, then audio, then a combined report
    All(all::AllArgs),
}
