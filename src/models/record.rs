//! # 矿物参数记录数据模型
//!
//! 一个 HeFESTo 参数文件对应一个 `ParameterRecord`。
//! 43 个物理量按行号位置绑定，顺序即 `PARAM_SCHEMA` 表的顺序。
//!
//! ## 依赖关系
//! - 被 `parsers/param.rs` 和 `builder.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 参数文件行号 (1-based) 到物理量名称的固定位置表
///
/// `PARAM_SCHEMA[i - 1]` 对应文件第 i 行（第 0 行为化学式与名称）。
/// 该表是数据集的领域约定，保持为可审计的静态表而非顺序读取。
pub const PARAM_SCHEMA: [&str; 43] = [
    "n_atoms",
    "Z",
    "mass",
    "T0",
    "F0",
    "V0",
    "K0",
    "K0_p",
    "K0K0_pp",
    "theta0",
    "debye_acoustic_2",
    "debye_acoustic_3",
    "sin_acoustic_1",
    "sin_acoustic_2",
    "sin_acoustic_3",
    "einstein_1",
    "weight_einstein_1",
    "einstein_2",
    "weight_einstein_2",
    "einstein_3",
    "weight_einstein_3",
    "einstein_4",
    "weight_einstein_4",
    "optic_upper",
    "optic_lower",
    "gamma0",
    "q0",
    "beta",
    "gammael0",
    "q2A2",
    "high_temp_approx",
    "BM_or_Vinet",
    "Einstein_or_Debye",
    "zero_point_pressure",
    "G0",
    "G0_p",
    "G0_T",
    "T_crit",
    "S_crit",
    "V_crit",
    "van_laar",
    "C12_p",
    "C44_p",
];

/// 单个矿物的参数记录
///
/// 解析时一次性创建，之后不可变；缺失的物理量不会出现在
/// `values` 中（缺失不等于零）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterRecord {
    /// 矿物标识符（来自文件名，同时作为查找键和输出 id）
    pub id: String,

    /// 位点记号化学式（如 `Mg_2Si_1O_4`）
    pub formula_raw: String,

    /// 自由文本显示名称
    pub display_name: String,

    /// 物理量名称到数值的映射，键为 `PARAM_SCHEMA` 的子集
    pub values: HashMap<String, f64>,
}

impl ParameterRecord {
    pub fn new(id: impl Into<String>) -> Self {
        ParameterRecord {
            id: id.into(),
            formula_raw: String::new(),
            display_name: String::new(),
            values: HashMap::new(),
        }
    }

    /// 按物理量名称读取数值
    pub fn get(&self, quantity: &str) -> Option<f64> {
        self.values.get(quantity).copied()
    }

    /// 输出用的显示名称；记录中没有名称时退回首字母大写的 id
    pub fn blurb(&self) -> String {
        if self.display_name.is_empty() {
            let mut chars = self.id.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        } else {
            self.display_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_43_quantities() {
        assert_eq!(PARAM_SCHEMA.len(), 43);
    }

    #[test]
    fn test_schema_line_positions() {
        // 1-based 行号减一即为表索引
        assert_eq!(PARAM_SCHEMA[5 - 1], "F0");
        assert_eq!(PARAM_SCHEMA[7 - 1], "K0");
        assert_eq!(PARAM_SCHEMA[38 - 1], "T_crit");
        assert_eq!(PARAM_SCHEMA[43 - 1], "C44_p");
    }

    #[test]
    fn test_missing_value_is_absent() {
        let record = ParameterRecord::new("fo");
        assert!(record.get("F0").is_none());
    }

    #[test]
    fn test_blurb_falls_back_to_capitalized_id() {
        let record = ParameterRecord::new("fo");
        assert_eq!(record.blurb(), "Fo");

        let mut named = ParameterRecord::new("fo");
        named.display_name = "Forsterite".to_string();
        assert_eq!(named.blurb(), "Forsterite");
    }
}
