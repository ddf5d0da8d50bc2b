//! # 运行统计累加器
//!
//! 逐文件转换结果及其跨批次的总计。
//!
//! ## 功能
//! - 单文件结果（成功带尺寸 / 失败带原因）
//! - 失败不计入体积总计，只计失败数
//!
//! ## 依赖关系
//! - 被 `commands/images.rs`、`commands/all.rs` 使用

/// 单张图片转换成功后的实测字节数
///
/// 三个尺寸都在写盘完成后从文件系统读取，不做估算。
#[derive(Debug, Clone, Copy)]
pub struct ImageSizes {
    /// 原始文件大小
    pub original: u64,
    /// WebP 产物大小
    pub webp: u64,
    /// 原格式回退产物大小
    pub fallback: u64,
}

/// 单个文件的处理结果
#[derive(Debug, Clone)]
pub enum TargetOutcome {
    /// 转换成功
    Converted(ImageSizes),
    /// 转换失败 (文件名, 错误信息)
    Failed(String, String),
}

/// 批量运行统计
#[derive(Debug, Default, Clone, Copy)]
pub struct RunTotals {
    /// 成功文件的原始大小总和
    pub original: u64,
    /// WebP 产物大小总和
    pub webp: u64,
    /// 回退产物大小总和
    pub fallback: u64,
    /// 成功数量
    pub converted: usize,
    /// 失败数量
    pub failed: usize,
}

impl RunTotals {
    /// 归并单个文件的处理结果
    ///
    /// 只有成功的文件才累加体积；失败的文件不贡献
    /// 任何字节数，只计入失败数。
    pub fn merge(&mut self, outcome: &TargetOutcome) {
        match outcome {
            TargetOutcome::Converted(sizes) => {
                self.original += sizes.original;
                self.webp += sizes.webp;
                self.fallback += sizes.fallback;
                self.converted += 1;
            }
            TargetOutcome::Failed(_, _) => self.failed += 1,
        }
    }

    /// 发现的目标总数（成功 + 失败）
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }
}
