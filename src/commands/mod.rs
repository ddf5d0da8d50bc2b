//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `codec/`, `utils/`
//! - 子模块: images, audio, all

pub mod all;
pub mod audio;
pub mod images;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub async fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Images(args) => images::execute(&args),
        Commands::Audio(args) => audio::execute(&args).await,
        Commands::All(args) => all::execute(&args).await,
    }
}
