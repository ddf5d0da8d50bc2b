//! # 批量处理模块
//!
//! 提供文件发现与运行统计累加能力。
//!
//! ## 功能
//! - 按扩展名收集待转换图片（排除名单 + 字典序排序）
//! - 逐文件结果归并为运行总计
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir` 遍历目录

pub mod collector;
pub mod totals;

pub use collector::{ConversionTarget, ImageCollector};
pub use totals::{ImageSizes, RunTotals, TargetOutcome};
