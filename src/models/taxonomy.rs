//! # 相分类静态配置
//!
//! 相组代码到显示名称、结构模型与输出标志的固定映射，以及
//! 独立矿物列表和参数目录的排除文件名。这些是领域知识常量，
//! 不从输入推导；构建文档时显式传入 `builder`，便于注入测试。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 和 `builder.rs` 使用
//! - 无外部模块依赖

/// 固溶体相组的静态配置项
#[derive(Debug, Clone, Copy)]
pub struct PhaseGroup {
    /// 相组代码，与相互作用文件名一致
    pub id: &'static str,

    /// 显示名称
    pub name: &'static str,

    /// 结构模型标签（EoS 引擎的类型名）
    pub model: &'static str,

    /// 是否允许负组分
    pub allows_negative: bool,

    /// 替代输出 id（当相组代码与其端元之一同名时使用）
    pub solution_id: Option<&'static str>,
}

/// 固溶体结构模型标签
pub const REGULAR_SOLUTION: &str = "EoS.Phases.RegularSolution, EoS.Core";

/// 相组配置表，顺序即输出顺序
pub static PHASE_GROUPS: &[PhaseGroup] = &[
    PhaseGroup {
        id: "ol",
        name: "Olivine",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "opx",
        name: "Orthopyroxene",
        model: REGULAR_SOLUTION,
        allows_negative: true,
        solution_id: None,
    },
    PhaseGroup {
        id: "cpx",
        name: "Clinopyroxene",
        model: REGULAR_SOLUTION,
        allows_negative: true,
        solution_id: None,
    },
    PhaseGroup {
        id: "gt",
        name: "Garnet",
        model: REGULAR_SOLUTION,
        allows_negative: true,
        solution_id: None,
    },
    PhaseGroup {
        id: "pv",
        name: "Perovskite",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "ppv",
        name: "Post-Perovskite",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "sp",
        name: "Spinel",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        // 端元中已有 'sp'，改用 'sps' 避免 id 冲突
        solution_id: Some("sps"),
    },
    PhaseGroup {
        id: "wa",
        name: "Wadsleyite",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "ri",
        name: "Ringwoodite",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "plg",
        name: "Feldspar",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "cf",
        name: "Ca-Ferrite",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "mw",
        name: "Ferropericlase",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "il",
        name: "Akimotoite",
        model: REGULAR_SOLUTION,
        allows_negative: true,
        solution_id: None,
    },
    PhaseGroup {
        id: "nal",
        name: "NAL Phase",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
    PhaseGroup {
        id: "c2c",
        name: "HP-Clinopyroxene",
        model: REGULAR_SOLUTION,
        allows_negative: false,
        solution_id: None,
    },
];

/// 不属于任何固溶体的独立矿物，顺序即输出顺序
pub static STANDALONE_MINERALS: &[&str] = &[
    "st", "coes", "qtz", "capv", "ky", "neph", "fea", "fee", "feg", "wo", "pwo", "apbo", "lppv",
];

/// 参数目录中需要跳过的非数据文件
pub static EXCLUDED_FILES: &[&str] = &["changelog", "README.md", "out", ".gitignore"];
