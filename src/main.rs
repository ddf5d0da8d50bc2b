//! # Webopt - 网页资源批量优化工具
//!
//! 将图片 (PNG/JPEG) 批量转换为 WebP 及回退格式，并可选地
//! 把单个 MP3 重编码为较低码率，统计并报告体积节省。
//!
//! ## 子命令
//! - `images` - 图片批量优化 (WebP + 原格式回退)
//! - `audio`  - 音频重编码 (ffmpeg, MP3 降码率)
//! - `all`    - 完整流水线：图片 + 音频 + 汇总报告
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/ (文件发现与统计累加)
//!   │     └── codec/ (图片编码 / ffmpeg 转码)
//!   ├── utils/      (输出与格式化工具)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

// 单线程协作式调度：图片编码是同步调用，唯一的挂起点
// 是等待 ffmpeg 子进程结束。
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command).await {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
