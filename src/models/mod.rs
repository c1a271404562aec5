//! # 数据模型模块
//!
//! 定义矿物参数记录、相互作用表、相分类配置与 XML 输出文档树。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`builder.rs`、`commands/` 使用
//! - 无外部模块依赖
//! - 子模块: record, interaction, taxonomy, document

pub mod document;
pub mod interaction;
pub mod record;
pub mod taxonomy;

pub use document::XmlNode;
pub use interaction::{Interaction, InteractionTable};
pub use record::ParameterRecord;
pub use taxonomy::PhaseGroup;
