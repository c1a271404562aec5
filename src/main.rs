//! # Hefconv - HeFESTo 参数数据库转换工具
//!
//! 将 HeFESTo 矿物热力学参数文件集转换为状态方程 (EoS)
//! 求值引擎可读取的 XML 数据库。
//!
//! ## 子命令
//! - `generate` - 扫描参数目录与相互作用目录，生成 XML 数据库
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (参数文件解析器)
//!   │     ├── models/    (数据模型)
//!   │     └── builder.rs (XML 文档构建)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod builder;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
