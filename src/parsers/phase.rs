//! # 相互作用文件解析器
//!
//! 解析一个固溶体相组的端元列表与两两相互作用系数矩阵。
//!
//! ## 文件格式说明
//! ```text
//! fo fa mgwa              # 第 0 行：端元 id，顺序即矩阵索引
//! 0.0  7.8  0.0           # 第 i 行对应端元 i-1 的矩阵行
//! 7.8  0.0  5.0
//! 0.0  5.0  0.0
//! Volume                  # 可选：此行之后为体积相互作用，不解析
//! ...
//! ```
//! 对称矩阵只读对角线右侧（上三角），避免 (A,B)/(B,A) 重复；
//! 零值表示"无相互作用"，不记录。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/interaction.rs`

use crate::error::{HefconvError, Result};
use crate::models::interaction::{Interaction, InteractionTable};
use std::fs;
use std::path::Path;

/// 能量相互作用块的结束标记
const VOLUME_MARKER: &str = "Volume";

/// 解析相互作用文件，相组 id 取自文件名
pub fn parse_phase_file(path: &Path) -> Result<InteractionTable> {
    let content = fs::read_to_string(path).map_err(|e| HefconvError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_phase_content(
        &content,
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown"),
    ))
}

/// 从字符串内容解析相互作用表
///
/// 空输入或单端元输入产生无相互作用的表；无法解析的记号跳过。
pub fn parse_phase_content(content: &str, id: &str) -> InteractionTable {
    let lines: Vec<&str> = content.lines().collect();
    let mut table = InteractionTable::new(id);

    let Some(header) = lines.first() else {
        return table;
    };
    table.endmembers = header.split_whitespace().map(String::from).collect();

    // "Volume" 标记行及其后的行不属于能量相互作用矩阵
    let cutoff = lines
        .iter()
        .position(|line| line.contains(VOLUME_MARKER))
        .unwrap_or(lines.len());

    let n = table.endmembers.len();
    for i in 1..(n + 1).min(cutoff) {
        let Some(line) = lines.get(i) else {
            break;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        // 第 i 行对应端元 i-1，只读对角线右侧的列
        let row = i - 1;
        for j in (row + 1)..n.min(tokens.len()) {
            let Ok(w) = tokens[j].parse::<f64>() else {
                continue;
            };
            if w != 0.0 {
                table.interactions.push(Interaction {
                    member_a: table.endmembers[row].clone(),
                    member_b: table.endmembers[j].clone(),
                    w,
                });
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endmember_order_preserved() {
        let table = parse_phase_content("fo fa mgwa\n", "ol");
        assert_eq!(table.endmembers, ["fo", "fa", "mgwa"]);
        assert!(table.interactions.is_empty());
    }

    #[test]
    fn test_upper_triangle_only() {
        // 仅 row0[2] 的上三角元素非零；下三角与对角线无论取值都不读
        let content = "a b c\n9.0 0.0 5.0\n9.0 9.0 0.0\n9.0 9.0 9.0\n";
        let table = parse_phase_content(content, "ol");
        assert_eq!(table.interactions.len(), 1);
        assert_eq!(table.interactions[0].member_a, "a");
        assert_eq!(table.interactions[0].member_b, "c");
        assert_eq!(table.interactions[0].w, 5.0);
    }

    #[test]
    fn test_zero_means_no_interaction() {
        let content = "a b\n0.0 0.0\n0.0 0.0\n";
        let table = parse_phase_content(content, "ol");
        assert!(table.interactions.is_empty());
    }

    #[test]
    fn test_volume_marker_truncates() {
        // 第 2 行起为体积块，b-c 的相互作用不再解析
        let content = "a b c\n0.0 7.8 0.0\nVolume\n0.0 0.0 5.0\n";
        let table = parse_phase_content(content, "ol");
        assert_eq!(table.interactions.len(), 1);
        assert_eq!(table.interactions[0].member_a, "a");
        assert_eq!(table.interactions[0].member_b, "b");
    }

    #[test]
    fn test_no_marker_reads_all_rows() {
        let content = "a b\n0.0 7.8\n7.8 0.0\n";
        let table = parse_phase_content(content, "opx");
        assert_eq!(table.interactions.len(), 1);
    }

    #[test]
    fn test_unparsable_token_skipped() {
        let content = "a b c\n0.0 x 5.0\n";
        let table = parse_phase_content(content, "ol");
        assert_eq!(table.interactions.len(), 1);
        assert_eq!(table.interactions[0].member_b, "c");
    }

    #[test]
    fn test_short_row_tolerated() {
        let content = "a b c\n0.0 7.8\n";
        let table = parse_phase_content(content, "ol");
        assert_eq!(table.interactions.len(), 1);
        assert_eq!(table.interactions[0].member_b, "b");
    }

    #[test]
    fn test_empty_and_single_endmember() {
        assert!(parse_phase_content("", "x").endmembers.is_empty());

        let single = parse_phase_content("fo\n0.0\n", "ol");
        assert_eq!(single.endmembers, ["fo"]);
        assert!(single.interactions.is_empty());
    }
}
