//! # images 命令实现
//!
//! 批量优化图片：每个输入产出一个 WebP 和一个原格式回退文件。
//!
//! ## 功能
//! - 扫描输入目录顶层的 PNG/JPEG
//! - 逐个顺序转换，单个失败不中断批次
//! - 逐文件打印结果行，最后输出小计
//!
//! ## 依赖关系
//! - 使用 `cli/images.rs` 定义的参数
//! - 使用 `batch/`, `codec/image.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/format.rs`

use std::fs;
use std::path::Path;

use crate::batch::{ConversionTarget, ImageCollector, ImageSizes, RunTotals, TargetOutcome};
use crate::cli::images::ImagesArgs;
use crate::codec;
use crate::error::{Result, WeboptError};
use crate::utils::format::{format_bytes, format_savings};
use crate::utils::{output, progress};

/// 执行 images 命令
pub fn execute(args: &ImagesArgs) -> Result<()> {
    output::print_header("Optimizing Images");

    let totals = run_batch(args)?;
    if totals.total() == 0 {
        return Ok(());
    }

    output::print_header("Optimization Summary");
    print_images_summary(&totals);

    output::print_done(&format!(
        "Optimized images are in '{}'",
        args.output.display()
    ));
    Ok(())
}

/// 运行图片批处理，返回运行统计
///
/// 严格按发现顺序逐个处理；单个文件的失败被隔离在该文件
/// 内部（记为失败并打印错误行），绝不中断循环。
pub(crate) fn run_batch(args: &ImagesArgs) -> Result<RunTotals> {
    // 确保输出目录存在（幂等）
    fs::create_dir_all(&args.output).map_err(|e| WeboptError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let targets = ImageCollector::new(args.input.clone())
        .with_denylist(&args.exclude)
        .collect()?;

    if targets.is_empty() {
        output::print_warning(&format!(
            "No images found under {}",
            args.input.display()
        ));
        return Ok(RunTotals::default());
    }

    output::print_info(&format!("Found {} images to optimize", targets.len()));

    let pb = progress::create_progress_bar(targets.len() as u64, "Optimizing");
    let mut totals = RunTotals::default();

    for target in &targets {
        let outcome = convert_target(target, &args.output, args.quality);

        match &outcome {
            TargetOutcome::Converted(sizes) => {
                pb.suspend(|| {
                    output::print_conversion(
                        &target.file_name,
                        &format!(
                            "{} webp (saved {})",
                            format_bytes(sizes.webp),
                            format_savings(sizes.original, sizes.webp)
                        ),
                    );
                });
            }
            TargetOutcome::Failed(name, reason) => {
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", name, reason));
                });
            }
        }

        totals.merge(&outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(totals)
}

/// 打印图片小计（成功文件数与三类体积）
pub(crate) fn print_images_summary(totals: &RunTotals) {
    output::print_section(&format!("IMAGES ({} files)", totals.converted));
    output::print_stat("Original", &format_bytes(totals.original));
    output::print_stat(
        "WebP",
        &format!(
            "{} (saved {})",
            format_bytes(totals.webp),
            format_savings(totals.original, totals.webp)
        ),
    );
    output::print_stat(
        "Fallback",
        &format!(
            "{} (saved {})",
            format_bytes(totals.fallback),
            format_savings(totals.original, totals.fallback)
        ),
    );
}

/// 转换单个文件，把任何错误折叠为失败结果
fn convert_target(target: &ConversionTarget, output_dir: &Path, quality: u8) -> TargetOutcome {
    match convert_inner(target, output_dir, quality) {
        Ok(sizes) => TargetOutcome::Converted(sizes),
        Err(e) => TargetOutcome::Failed(target.file_name.clone(), e.to_string()),
    }
}

/// 单文件转换流程：量原始 -> WebP -> 量 -> 回退 -> 量
///
/// 中途失败时已写出的部分产物留在磁盘上，不回滚。
fn convert_inner(
    target: &ConversionTarget,
    output_dir: &Path,
    quality: u8,
) -> Result<ImageSizes> {
    let original = codec::file_size(&target.path)?;
    let img = codec::image::load_image(&target.path)?;

    let webp_path = output_dir.join(format!("{}.webp", target.stem));
    let webp = codec::image::encode_webp(&img, quality, &webp_path)?;

    // 回退产物用原始文件名写入输出目录，不触碰输入文件
    let fallback_path = output_dir.join(&target.file_name);
    let fallback = codec::image::encode_fallback(&img, &target.extension, quality, &fallback_path)?;

    Ok(ImageSizes {
        original,
        webp,
        fallback,
    })
}
