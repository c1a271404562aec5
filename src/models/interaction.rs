//! # 相互作用表数据模型
//!
//! 一个相文件对应一个 `InteractionTable`：端元列表（顺序即
//! 相互作用矩阵的行列索引，也是输出顺序）和上三角的非零
//! 相互作用系数。
//!
//! ## 依赖关系
//! - 被 `parsers/phase.rs` 和 `builder.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 一对端元之间的相互作用系数
///
/// `member_a` 在端元列表中先于 `member_b`，每个无序对至多一条。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub member_a: String,
    pub member_b: String,
    /// 相互作用系数 W（存储单位按数据集约定为 kJ/mol）
    pub w: f64,
}

/// 一个固溶体相组的端元与相互作用参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionTable {
    /// 相组标识符（来自文件名）
    pub id: String,

    /// 端元 id 的有序列表
    pub endmembers: Vec<String>,

    /// 非零相互作用系数；W == 0 表示"无相互作用"，不记录
    pub interactions: Vec<Interaction>,
}

impl InteractionTable {
    pub fn new(id: impl Into<String>) -> Self {
        InteractionTable {
            id: id.into(),
            endmembers: Vec::new(),
            interactions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = InteractionTable::new("ol");
        assert_eq!(table.id, "ol");
        assert!(table.endmembers.is_empty());
        assert!(table.interactions.is_empty());
    }
}
