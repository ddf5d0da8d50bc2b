//! # audio 子命令 CLI 定义
//!
//! 音频重编码参数 (MP3 降码率，需要 PATH 中有 ffmpeg)。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/audio.rs`

use clap::Args;
use std::path::PathBuf;

/// audio 子命令参数
#[derive(Args, Debug, Clone)]
pub struct AudioArgs {
    /// Input MP3 file (skipped with a warning if absent)
    #[arg(short, long, default_value = "elu.mp3")]
    pub input: PathBuf,

    /// Output directory for the re-encoded file
    #[arg(short, long, default_value = "optimized")]
    pub output: PathBuf,

    /// Target audio bitrate in kbit/s
    #[arg(short, long, default_value_t = 96)]
    pub bitrate: u32,

    /// Number of audio channels
    #[arg(long, default_value_t = 2)]
    pub channels: u32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,
}
