//! # generate 子命令 CLI 定义
//!
//! 三个必需路径（参数目录、相互作用目录、输出文件）加两个
//! 可选的数据集描述字符串，无其他开关。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/generate.rs`

use clap::Args;
use std::path::PathBuf;

/// generate 子命令参数
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory containing individual mineral parameter files
    #[arg(short, long)]
    pub params: PathBuf,

    /// Directory containing phase interaction files
    #[arg(short = 'i', long)]
    pub phases: PathBuf,

    /// Output XML file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Dataset identifier written to the module root
    #[arg(long, default_value = "SLB24")]
    pub dataset_id: String,

    /// Dataset display name written to the module blurb
    #[arg(long, default_value = "HeFESTo Parameters 010123")]
    pub dataset_name: String,
}
