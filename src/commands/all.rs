//! # all 命令实现
//!
//! 完整流水线：先图片批处理，再等待音频转码，最后输出
//! 汇总报告。报告一定在音频结果落定之后才开始渲染。
//!
//! ## 报告结构
//! 1. 逐文件结果行（处理过程中交错输出）
//! 2. 图片小计 —— 至少发现一个图片目标时输出
//! 3. 音频小计 —— 音频步骤产出结果时输出
//! 4. 总计 —— 始终输出（无输入时各项为零）
//!
//! ## 依赖关系
//! - 使用 `cli/all.rs` 定义的参数
//! - 复用 `commands/images.rs`, `commands/audio.rs`
//! - 使用 `utils/output.rs`, `utils/format.rs`

use crate::cli::all::AllArgs;
use crate::error::Result;
use crate::utils::format::{format_bytes, format_savings};
use crate::utils::output;

use super::{audio, images};

/// 执行 all 命令
pub async fn execute(args: &AllArgs) -> Result<()> {
    output::print_header("Optimizing Web Assets");

    let totals = images::run_batch(&args.images_args())?;
    let audio_result = audio::run_single(&args.audio_args()).await?;

    output::print_header("Optimization Summary");

    if totals.total() > 0 {
        images::print_images_summary(&totals);
    }
    if let Some(sizes) = &audio_result {
        audio::print_audio_summary(sizes);
    }

    // 总计：WebP 产物 + 优化音频 对比 全部原始体积
    let audio_original = audio_result.map(|s| s.original).unwrap_or(0);
    let audio_optimized = audio_result.map(|s| s.optimized).unwrap_or(0);
    let grand_original = totals.original + audio_original;
    let grand_optimized = totals.webp + audio_optimized;
    let saved = grand_original.saturating_sub(grand_optimized);

    output::print_section("TOTAL");
    output::print_stat("Original", &format_bytes(grand_original));
    output::print_stat("Optimized", &format_bytes(grand_optimized));
    output::print_stat(
        "Saved",
        &format!(
            "{} ({})",
            format_savings(grand_original, grand_optimized),
            format_bytes(saved)
        ),
    );

    output::print_done(&format!(
        "Optimized assets are in '{}'",
        args.output.display()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[tokio::test]
    async fn test_execute_images_only_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        RgbaImage::from_pixel(16, 16, Rgba([80, 80, 80, 255]))
            .save(dir.path().join("banner.png"))
            .unwrap();

        let args = AllArgs {
            input: dir.path().to_path_buf(),
            output: dir.path().join("optimized"),
            quality: 85,
            exclude: vec!["rrss.jpg".to_string()],
            // 音频输入缺失：应当跳过而不是报错
            audio_input: dir.path().join("elu.mp3"),
            bitrate: 96,
            channels: 2,
            sample_rate: 44100,
        };

        execute(&args).await.unwrap();
        assert!(args.output.join("banner.webp").is_file());
        assert!(args.output.join("banner.png").is_file());
    }

    #[tokio::test]
    async fn test_execute_with_nothing_to_do() {
        let dir = tempfile::tempdir().unwrap();
        let args = AllArgs {
            input: dir.path().to_path_buf(),
            output: dir.path().join("optimized"),
            quality: 85,
            exclude: vec![],
            audio_input: dir.path().join("elu.mp3"),
            bitrate: 96,
            channels: 2,
            sample_rate: 44100,
        };

        // 零图片 + 无音频：总计为零，但不是错误
        execute(&args).await.unwrap();
    }
}
