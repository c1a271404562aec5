//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `generate`: 从参数目录与相互作用目录生成 EoS XML 数据库
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: generate

pub mod generate;

use clap::{Parser, Subcommand};

/// Hefconv - HeFESTo 参数数据库转换工具
#[derive(Parser)]
#[command(name = "hefconv")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A HeFESTo thermodynamic parameter database to EoS XML converter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the EoS XML database from HeFESTo parameter files
    Generate(generate::GenerateArgs),
}
