//! # audio 命令实现
//!
//! 把单个 MP3 重编码为较低码率的立体声 MP3。
//!
//! ## 功能
//! - 输入文件缺失时仅警告并跳过（区别于转码失败）
//! - 等待 ffmpeg 子进程结束后才读取产物大小
//! - 转码失败打印错误并折叠为"无结果"
//!
//! ## 依赖关系
//! - 使用 `cli/audio.rs` 定义的参数
//! - 使用 `codec/audio.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/format.rs`

use std::fs;

use crate::cli::audio::AudioArgs;
use crate::codec;
use crate::codec::audio::{AudioParams, AudioSizes};
use crate::error::{Result, WeboptError};
use crate::utils::format::{format_bytes, format_savings};
use crate::utils::{output, progress};

/// 执行 audio 命令
pub async fn execute(args: &AudioArgs) -> Result<()> {
    output::print_header("Optimizing Audio");

    if let Some(sizes) = run_single(args).await? {
        output::print_header("Optimization Summary");
        print_audio_summary(&sizes);
        output::print_done(&format!(
            "Optimized audio is in '{}'",
            args.output.display()
        ));
    }
    Ok(())
}

/// 重编码单个音频文件
///
/// 返回 `None` 有两种情形：输入不存在（警告）或转码失败
/// （错误）。两者对调用方等价，但日志级别不同。
pub(crate) async fn run_single(args: &AudioArgs) -> Result<Option<AudioSizes>> {
    if !args.input.is_file() {
        output::print_warning(&format!(
            "'{}' not found - skipping audio optimization",
            args.input.display()
        ));
        return Ok(None);
    }

    fs::create_dir_all(&args.output).map_err(|e| WeboptError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let original = codec::file_size(&args.input)?;

    // 产物沿用输入文件名，写入输出目录
    let file_name = args
        .input
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("audio.mp3");
    let output_path = args.output.join(file_name);

    let params = AudioParams {
        bitrate_kbps: args.bitrate,
        channels: args.channels,
        sample_rate: args.sample_rate,
    };

    let spinner = progress::create_spinner("Transcoding audio...");
    let result = codec::audio::transcode_mp3(&args.input, &output_path, &params).await;
    spinner.finish_and_clear();

    match result {
        Ok(()) => {
            let optimized = codec::file_size(&output_path)?;
            output::print_conversion(
                file_name,
                &format!(
                    "{} (saved {})",
                    format_bytes(optimized),
                    format_savings(original, optimized)
                ),
            );
            Ok(Some(AudioSizes {
                original,
                optimized,
            }))
        }
        Err(e) => {
            output::print_error(&format!("audio transcoding failed: {}", e));
            Ok(None)
        }
    }
}

/// 打印音频小计
pub(crate) fn print_audio_summary(sizes: &AudioSizes) {
    output::print_section("AUDIO");
    output::print_stat("Original", &format_bytes(sizes.original));
    output::print_stat(
        "Optimized",
        &format!(
            "{} (saved {})",
            format_bytes(sizes.optimized),
            format_savings(sizes.original, sizes.optimized)
        ),
    );
}
