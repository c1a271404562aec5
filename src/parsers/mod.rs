//! # 解析器模块
//!
//! 提供 HeFESTo 参数文件、相互作用文件的解析器与化学式规范化。
//!
//! 所有内容解析都是宽容的：无法解析的行或记号被跳过而不是报错，
//! 以保证单个坏文件不会中断整批转换。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: param, phase, formula

pub mod formula;
pub mod param;
pub mod phase;
