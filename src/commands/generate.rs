//! # generate 命令实现
//!
//! 扫描参数目录与相互作用目录，解析全部输入文件，构建并写出
//! EoS XML 数据库。
//!
//! ## 功能
//! - 枚举参数目录（跳过固定的非数据文件），逐文件解析矿物记录
//! - 枚举相互作用目录（可缺失），解析相组端元与相互作用矩阵
//! - 单文件解析失败只产生警告，整批继续
//! - 按相分类顺序组装文档并一次性序列化写出
//! - 结束后输出汇总表
//!
//! ## 依赖关系
//! - 使用 `cli/generate.rs` 定义的参数
//! - 使用 `parsers/`, `models/`, `builder.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::builder::{self, BuildOptions};
use crate::cli::generate::GenerateArgs;
use crate::error::{HefconvError, Result};
use crate::models::taxonomy::{EXCLUDED_FILES, PHASE_GROUPS, STANDALONE_MINERALS};
use crate::models::{InteractionTable, ParameterRecord};
use crate::parsers::{param, phase};
use crate::utils::{output, progress};

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};
use walkdir::WalkDir;

/// 汇总表行
#[derive(Debug, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 generate 命令
pub fn execute(args: GenerateArgs) -> Result<()> {
    output::print_header("Generating EoS XML database");

    // 参数目录是硬性前置条件
    if !args.params.exists() {
        return Err(HefconvError::DirectoryNotFound {
            path: args.params.display().to_string(),
        });
    }

    let minerals = read_minerals(&args.params)?;
    let phases = read_phases(&args.phases)?;

    // 组装文档并一次性序列化
    let opts = BuildOptions {
        dataset_id: args.dataset_id.clone(),
        dataset_name: args.dataset_name.clone(),
    };
    let document = builder::build_document(
        &minerals,
        &phases,
        PHASE_GROUPS,
        STANDALONE_MINERALS,
        &opts,
    );

    fs::write(&args.output, document.to_xml_string()).map_err(|e| {
        HefconvError::FileWriteError {
            path: args.output.display().to_string(),
            source: e,
        }
    })?;

    output::print_done(&format!("Generated XML file: {}", args.output.display()));

    let summary = vec![
        SummaryRow {
            item: "Minerals".to_string(),
            value: minerals.len().to_string(),
        },
        SummaryRow {
            item: "Phase groups".to_string(),
            value: phases.len().to_string(),
        },
        SummaryRow {
            item: "Dataset".to_string(),
            value: args.dataset_id,
        },
    ];
    println!("{}", Table::new(summary));

    Ok(())
}

/// 读取参数目录，得到矿物 id 到参数记录的映射
fn read_minerals(param_dir: &Path) -> Result<HashMap<String, ParameterRecord>> {
    let files = collect_files(param_dir, EXCLUDED_FILES)?;
    output::print_info(&format!(
        "Found {} parameter files in '{}'",
        files.len(),
        param_dir.display()
    ));

    let pb = progress::create_progress_bar(files.len() as u64, "Parsing parameters");
    let mut minerals = HashMap::new();

    for path in &files {
        match param::parse_param_file(path) {
            Ok(record) => {
                if minerals.contains_key(&record.id) {
                    pb.suspend(|| {
                        output::print_warning(&format!(
                            "Duplicate mineral id '{}', keeping the later file",
                            record.id
                        ));
                    });
                }
                minerals.insert(record.id.clone(), record);
            }
            Err(e) => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "Could not parse {}: {}",
                        path.display(),
                        e
                    ));
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(minerals)
}

/// 读取相互作用目录，得到相组 id 到相互作用表的映射
///
/// 目录缺失不视为错误；端元列表为空的表视为无内容，丢弃。
fn read_phases(phase_dir: &Path) -> Result<HashMap<String, InteractionTable>> {
    let mut phases = HashMap::new();
    if !phase_dir.exists() {
        output::print_warning(&format!(
            "Phase directory '{}' not found, no solution phases will be generated",
            phase_dir.display()
        ));
        return Ok(phases);
    }

    let files = collect_files(phase_dir, &[])?;
    for path in &files {
        match phase::parse_phase_file(path) {
            Ok(table) => {
                if !table.endmembers.is_empty() {
                    phases.insert(table.id.clone(), table);
                }
            }
            Err(e) => {
                output::print_warning(&format!("Could not parse phase {}: {}", path.display(), e));
            }
        }
    }

    Ok(phases)
}

/// 枚举目录中的普通文件（不递归），按路径排序
fn collect_files(dir: &Path, excluded: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if excluded.contains(&name) {
                continue;
            }
        }
        files.push(entry.path().to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_files_applies_exclusion() {
        let dir = std::env::temp_dir().join("hefconv_collect_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("fo"), "Mg_2Si_1O_4 Forsterite\n").unwrap();
        fs::write(dir.join("fa"), "Fe_2Si_1O_4 Fayalite\n").unwrap();
        fs::write(dir.join("README.md"), "docs\n").unwrap();
        fs::write(dir.join(".gitignore"), "out\n").unwrap();

        let files = collect_files(&dir, EXCLUDED_FILES).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, ["fa", "fo"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_phases_missing_dir_is_empty() {
        let dir = std::env::temp_dir().join("hefconv_no_such_dir");
        let phases = read_phases(&dir).unwrap();
        assert!(phases.is_empty());
    }

    #[test]
    fn test_read_phases_discards_empty_tables() {
        let dir = std::env::temp_dir().join("hefconv_phase_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("ol"), "fo fa\n0.0 7.8\n").unwrap();
        fs::write(dir.join("empty"), "").unwrap();

        let phases = read_phases(&dir).unwrap();
        assert_eq!(phases.len(), 1);
        assert!(phases.contains_key("ol"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
