//! # HeFESTo 参数文件解析器
//!
//! 解析单个矿物参数文件为 `ParameterRecord`。
//!
//! ## 文件格式说明
//! ```text
//! Mg_2Si_1O_4 Forsterite     # 化学式 + 显示名称
//! 7.0      n                 # 每行一个数值，行号位置绑定物理量
//! 4.0      Z
//! ...                        # 共 43 行，见 PARAM_SCHEMA
//! ```
//! 每行只取第一个空白分隔记号；无法解析为数字的行对应的物理量
//! 直接缺失，不视为错误。面向整批数据的产出率优化，而非单文件
//! 的严格性。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/record.rs`

use crate::error::{HefconvError, Result};
use crate::models::record::{ParameterRecord, PARAM_SCHEMA};
use std::fs;
use std::path::Path;

/// 解析参数文件，矿物 id 取自文件名
pub fn parse_param_file(path: &Path) -> Result<ParameterRecord> {
    let content = fs::read_to_string(path).map_err(|e| HefconvError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_param_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    ))
}

/// 从字符串内容解析参数记录
///
/// 本身从不失败：空输入产生空化学式、空名称、无数值的
/// 退化记录。
pub fn parse_param_content(content: &str, id: &str) -> ParameterRecord {
    let lines: Vec<&str> = content.lines().collect();
    let mut record = ParameterRecord::new(id);

    // Line 0: formula + display name
    if let Some(header) = lines.first() {
        let parts: Vec<&str> = header.split_whitespace().collect();
        if let Some((formula, name)) = parts.split_first() {
            record.formula_raw = formula.to_string();
            record.display_name = name.join(" ");
        }
    }

    // Lines 1..=43: positional quantity values
    for (index, line) in lines.iter().enumerate().skip(1) {
        if let Some((quantity, value)) = parse_value_line(index, line) {
            record.values.insert(quantity.to_string(), value);
        }
    }

    record
}

/// 解析一个数据行：行号位置绑定物理量，首记号解析为数值
///
/// 行号超出 schema、行为空、或首记号不是数字时返回 `None`；
/// "跳过"语义由返回类型显式表达。
fn parse_value_line(index: usize, line: &str) -> Option<(&'static str, f64)> {
    let quantity = *PARAM_SCHEMA.get(index.checked_sub(1)?)?;
    let token = line.split_whitespace().next()?;
    let value: f64 = token.parse().ok()?;
    Some((quantity, value))
}
