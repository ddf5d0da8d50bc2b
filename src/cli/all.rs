//! # all 子命令 CLI 定义
//!
//! 完整流水线参数：先图片后音频，最后输出汇总报告。
//! 参数是 images 与 audio 两个子命令的并集。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/all.rs`

use clap::Args;
use std::path::PathBuf;

use super::audio::AudioArgs;
use super::images::ImagesArgs;

/// all 子命令参数
#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    /// Input directory containing PNG/JPEG images
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Output directory for all optimized artifacts
    #[arg(short, long, default_value = "optimized")]
    pub output: PathBuf,

    /// WebP/JPEG quality (0-100); reinterpreted as lossless level for PNG
    #[arg(short, long, default_value_t = 85)]
    pub quality: u8,

    /// File names to skip during image discovery, comma separated
    #[arg(long, value_delimiter = ',', default_value = "rrss.jpg")]
    pub exclude: Vec<String>,

    /// Input MP3 file (skipped with a warning if absent)
    #[arg(long, default_value = "elu.mp3")]
    pub audio_input: PathBuf,

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

impl AllArgs {
    /// 拆出图片批处理参数
    pub fn images_args(&self) -> ImagesArgs {
        ImagesArgs {
            input: self.input.clone(),
            output: self.output.clone(),
            quality: self.quality,
            exclude: self.exclude.clone(),
        }
    }

    /// 拆出音频参数
    pub fn audio_args(&self) -> AudioArgs {
        AudioArgs {
            input: self.audio_input.clone(),
            output: self.output.clone(),
            bitrate: self.bitrate,
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }
}
