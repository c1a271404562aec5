//! # 化学式规范化
//!
//! 将 HeFESTo 位点记号化学式转换为标准括号化学式。
//!
//! ## 记号说明
//! ```text
//! Mg_2Si_1O_4                 -> (Mg)2(Si)(O)4
//! Fe_1                        -> (Fe)
//! Na_1Mg_2(Al_5Si_1)O_12      -> (Na)(Mg)2(Al5Si)(O)12
//! (Na_2Mg_1)Si_1Si_1Si_3O_12  -> (Na2Mg)(Si)(Si)(Si)3(O)12
//! ```
//! 每个位点（单元素或括号内的混合占据）在输出中包一层括号，
//! 计数为 1 时省略。显式状态扫描器实现（位点外 / 混合位点内 /
//! 读计数），无法识别的字符直接跳过，从不失败。
//!
//! ## 依赖关系
//! - 被 `builder.rs` 使用
//! - 无外部模块依赖

/// 将位点记号化学式规范化为括号化学式
///
/// 纯函数；畸形输入按文法能产出的部分结果降级，不报错。
pub fn normalize_formula(raw: &str) -> String {
    let chars: Vec<char> = raw.trim().chars().collect();
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '(' {
            // 混合位点：收集到 ')' 为止，内部元素计数直接拼接
            i += 1;
            let mut site = String::new();
            while i < chars.len() && chars[i] != ')' {
                if chars[i].is_ascii_uppercase() {
                    let elem = read_element(&chars, &mut i);
                    if i < chars.len() && chars[i] == '_' {
                        i += 1;
                    }
                    let count = read_count(&chars, &mut i);
                    site.push_str(&elem);
                    if !count.is_empty() && count != "1" {
                        site.push_str(&count);
                    }
                } else {
                    i += 1;
                }
            }
            if i < chars.len() {
                i += 1; // ')'
            }
            out.push('(');
            out.push_str(&site);
            out.push(')');

            // 括号后的位点计数：仅在下划线后确有数字时消费
            let mut j = i;
            if j < chars.len() && chars[j] == '_' {
                j += 1;
            }
            let count = read_count(&chars, &mut j);
            if !count.is_empty() {
                i = j;
                if count != "1" {
                    out.push_str(&count);
                }
            }
        } else if c.is_ascii_uppercase() {
            // 单元素位点
            let elem = read_element(&chars, &mut i);
            if i < chars.len() && chars[i] == '_' {
                i += 1;
            }
            let count = read_count(&chars, &mut i);
            out.push('(');
            out.push_str(&elem);
            out.push(')');
            if !count.is_empty() && count != "1" {
                out.push_str(&count);
            }
        } else {
            i += 1;
        }
    }

    out
}

/// 读取元素符号：大写字母加可选的一个小写字母
fn read_element(chars: &[char], i: &mut usize) -> String {
    let mut elem = String::new();
    elem.push(chars[*i]);
    *i += 1;
    if *i < chars.len() && chars[*i].is_ascii_lowercase() {
        elem.push(chars[*i]);
        *i += 1;
    }
    elem
}

/// 读取计数：数字序列加可选的小数部分；无数字时返回空串且不移动
fn read_count(chars: &[char], i: &mut usize) -> String {
    let mut count = String::new();
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        count.push(chars[*i]);
        *i += 1;
    }
    if !count.is_empty() && *i < chars.len() && chars[*i] == '.' {
        count.push('.');
        *i += 1;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            count.push(chars[*i]);
            *i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_formula() {
        assert_eq!(normalize_formula("Mg_2Si_1O_4"), "(Mg)2(Si)(O)4");
    }

    #[test]
    fn test_single_element_unit_count() {
        assert_eq!(normalize_formula("Fe_1"), "(Fe)");
    }

    #[test]
    fn test_mixed_site() {
        assert_eq!(
            normalize_formula("Na_1Mg_2(Al_5Si_1)O_12"),
            "(Na)(Mg)2(Al5Si)(O)12"
        );
    }

    #[test]
    fn test_leading_mixed_site() {
        assert_eq!(
            normalize_formula("(Na_2Mg_1)Si_1Si_1Si_3O_12"),
            "(Na2Mg)(Si)(Si)(Si)3(O)12"
        );
    }

    #[test]
    fn test_mixed_site_with_count() {
        assert_eq!(normalize_formula("(Mg_3Fe_1)_2Si_1"), "(Mg3Fe)2(Si)");
    }

    #[test]
    fn test_missing_count_suffix() {
        // 无 _count 后缀视为 1
        assert_eq!(normalize_formula("MgO"), "(Mg)(O)");
    }

    #[test]
    fn test_multi_digit_and_decimal_counts() {
        assert_eq!(normalize_formula("Si_12"), "(Si)12");
        assert_eq!(normalize_formula("Fe_0.5O_1.5"), "(Fe)0.5(O)1.5");
    }

    #[test]
    fn test_unrecognized_characters_skipped() {
        assert_eq!(normalize_formula("Mg_2*Si_1"), "(Mg)2(Si)");
        assert_eq!(normalize_formula("  Fe_2  "), "(Fe)2");
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert_eq!(normalize_formula(""), "");
        assert_eq!(normalize_formula("()"), "()");
        assert_eq!(normalize_formula("_4"), "");
    }

    #[test]
    fn test_unclosed_mixed_site() {
        // 缺失 ')' 时按部分输出降级
        assert_eq!(normalize_formula("(Mg_2Fe_1"), "(Mg2Fe)");
    }
}
