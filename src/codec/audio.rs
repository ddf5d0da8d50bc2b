//! # 音频转码
//!
//! 调用外部 ffmpeg 把 MP3 重编码为较低码率。
//!
//! ## 功能
//! - tokio 子进程，等待其结束（成功或失败恰好一次）
//! - ffmpeg 不在 PATH 与退出码非零分别映射为不同错误
//!
//! ## 依赖关系
//! - 被 `commands/audio.rs` 调用
//! - 使用 `tokio::process`

use std::path::Path;

use tokio::process::Command;

use crate::error::{Result, WeboptError};

/// 音频转码参数
#[derive(Debug, Clone)]
pub struct AudioParams {
    /// 目标码率 (kbit/s)
    pub bitrate_kbps: u32,
    /// 声道数
    pub channels: u32,
    /// 采样率 (Hz)
    pub sample_rate: u32,
}

impl Default for AudioParams {
    fn default() -> Self {
        Self {
            bitrate_kbps: 96,
            channels: 2,
            sample_rate: 44100,
        }
    }
}

/// 音频转码前后的实测字节数
#[derive(Debug, Clone, Copy)]
pub struct AudioSizes {
    /// 原始文件大小
    pub original: u64,
    /// 重编码后大小
    pub optimized: u64,
}

/// 调用 ffmpeg 重编码 MP3，写入 `output`
///
/// 挂起直到子进程结束。输出文件已存在时直接覆盖 (-y)。
pub async fn transcode_mp3(input: &Path, output: &Path, params: &AudioParams) -> Result<()> {
    let result = Command::new("ffmpeg")
        .arg("-y")
        .arg("-i")
        .arg(input)
        .args(["-b:a", &format!("{}k", params.bitrate_kbps)])
        .args(["-ac", &params.channels.to_string()])
        .args(["-ar", &params.sample_rate.to_string()])
        .args(["-f", "mp3"])
        .arg(output)
        .output()
        .await;

    match result {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(WeboptError::CommandFailed {
            command: "ffmpeg".to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }),
        Err(_) => Err(WeboptError::CommandNotFound {
            command: "ffmpeg".to_string(),
        }),
    }
}
