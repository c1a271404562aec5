//! # XML 文档构建
//!
//! 编排两类解析结果，按相分类顺序组装输出文档树：
//! 文档头 → 固溶体相组（端元 + 相互作用）→ 独立矿物。
//!
//! 结构性条件逻辑集中在这里：T_crit > 0 的矿物包一层朗道相变
//! 节点；相互作用系数按 kJ/mol → J/mol 换算输出；分类表中没有
//! 对应解析数据的条目直接省略，不报错。
//!
//! ## 依赖关系
//! - 被 `commands/generate.rs` 使用
//! - 使用 `models/`、`parsers/formula.rs`

use crate::models::record::ParameterRecord;
use crate::models::taxonomy::PhaseGroup;
use crate::models::{InteractionTable, XmlNode};
use crate::parsers::formula::normalize_formula;
use std::collections::HashMap;

/// 输出文档的 XML 命名空间
const EOS_NAMESPACE: &str = "http://chust.org/eos";

/// 基础矿物模型的类型标签
const DEBYE_SOLID: &str = "EoS.DebyeModel.DebyeSolid, EoS.DebyeModel";

/// 朗道相变修正的类型标签
const LANDAU_MODIFICATION: &str = "EoS.DebyeModel.LandauModification, EoS.DebyeModel";

/// 文档级布尔配置标志，属于生成器常量而非输入数据
const HEADER_FLAGS: &[(&str, &str)] = &[
    ("allows-negative-components", "False"),
    ("excludes-endmember-configuration-entropy", "False"),
    ("transparent-fallback", "True"),
];

/// 单个物理量的输出约定：存储值到输出字符串的固定表示契约
///
/// 换算通过十进制指数后缀表达（如 GPa -> Pa 即 `e9`），小数位
/// 与后缀都是数据集的固定约定，不从数据推导。
struct EmitRule {
    /// `ParameterRecord::values` 中的键
    quantity: &'static str,
    /// 输出的 let 名称（G0_T 以导出量 η0 的名义输出）
    name: &'static str,
    /// 输出单位
    unit: &'static str,
    /// 小数位数
    decimals: usize,
    /// 十进制指数后缀
    suffix: &'static str,
}

/// 基础模型节点的物理量输出表，顺序即输出顺序
const EMIT_RULES: &[EmitRule] = &[
    // F0: kJ/mol -> J/mol
    EmitRule { quantity: "F0", name: "F0", unit: "J/mol", decimals: 3, suffix: "e3" },
    // V0: cm^3/mol -> m^3/mol
    EmitRule { quantity: "V0", name: "V0", unit: "m^3/mol", decimals: 4, suffix: "e-6" },
    // K0: GPa -> Pa
    EmitRule { quantity: "K0", name: "K0", unit: "Pa", decimals: 5, suffix: "e9" },
    EmitRule { quantity: "K0_p", name: "K0_p", unit: "1", decimals: 5, suffix: "" },
    EmitRule { quantity: "theta0", name: "θ0", unit: "K", decimals: 4, suffix: "" },
    EmitRule { quantity: "gamma0", name: "γ0", unit: "1", decimals: 5, suffix: "" },
    EmitRule { quantity: "q0", name: "q0", unit: "1", decimals: 5, suffix: "" },
    // G0: GPa -> Pa
    EmitRule { quantity: "G0", name: "G0", unit: "Pa", decimals: 1, suffix: "e9" },
    EmitRule { quantity: "G0_p", name: "G0_p", unit: "1", decimals: 5, suffix: "" },
    EmitRule { quantity: "G0_T", name: "η0", unit: "1", decimals: 5, suffix: "" },
];

/// 文档构建选项
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub dataset_id: String,
    pub dataset_name: String,
}

/// 组装完整输出文档树
///
/// 相分类表与独立矿物列表显式传入，而非引用全局状态；
/// 分类条目或端元没有对应解析数据时静默省略。
pub fn build_document(
    minerals: &HashMap<String, ParameterRecord>,
    phases: &HashMap<String, InteractionTable>,
    taxonomy: &[PhaseGroup],
    standalone: &[&str],
    opts: &BuildOptions,
) -> XmlNode {
    let mut root = XmlNode::new("module")
        .attr("xmlns", EOS_NAMESPACE)
        .attr("id", &opts.dataset_id);

    root.push(XmlNode::new("blurb").text(header_blurb(&opts.dataset_name)));
    root.push(
        XmlNode::new("let")
            .attr("name", "T0")
            .attr("unit", "K")
            .text("300.0"),
    );
    for (name, value) in HEADER_FLAGS {
        root.push(XmlNode::new("let").attr("name", *name).text(*value));
    }

    for group in taxonomy {
        if let Some(table) = phases.get(group.id) {
            root.push(build_phase_group(group, table, minerals));
        }
    }

    for id in standalone {
        if let Some(record) = minerals.get(*id) {
            root.push(build_mineral_phase(record));
        }
    }

    root
}

/// 文档头说明文本
fn header_blurb(dataset_name: &str) -> String {
    format!(
        "\n    Thermodynamic dataset: {}\n    Parameter set 010123 for use with HeFESTo\n\n    \
         Reference:\n    Stixrude, L. and C. Lithgow-Bertelloni,\n    \
         Thermodynamics of mantle minerals - III. The role of iron,\n    \
         Geophysical Journal International, in press, 2024.\n  ",
        dataset_name
    )
}

/// 构建一个固溶体相组节点
fn build_phase_group(
    group: &PhaseGroup,
    table: &InteractionTable,
    minerals: &HashMap<String, ParameterRecord>,
) -> XmlNode {
    let mut phase = XmlNode::new("phase")
        .attr("type", group.model)
        .attr("id", group.solution_id.unwrap_or(group.id));

    phase.push(XmlNode::new("blurb").text(group.name));

    if group.allows_negative {
        phase.push(
            XmlNode::new("let")
                .attr("name", "allows-negative-components")
                .text("True"),
        );
    }

    // 端元按相文件中的顺序输出；没有参数记录的端元省略
    for endmember in &table.endmembers {
        if let Some(record) = minerals.get(endmember) {
            phase.push(build_mineral_phase(record));
        }
    }

    // 相互作用只引用本组内实际输出过的端元
    for interaction in &table.interactions {
        if !minerals.contains_key(&interaction.member_a)
            || !minerals.contains_key(&interaction.member_b)
        {
            continue;
        }
        // W 按数据集约定以 kJ/mol 存储，换算为 J/mol 输出
        let mut node = XmlNode::new("interaction")
            .attr("unit", "J/mol")
            .attr("value", format!("{:.1}e3", interaction.w));
        node.push(XmlNode::new("phase").attr("ref", &interaction.member_a));
        node.push(XmlNode::new("phase").attr("ref", &interaction.member_b));
        phase.push(node);
    }

    phase
}

/// 构建单个矿物相节点
///
/// T_crit > 0 时外层包朗道相变节点（临界温度、临界熵、临界
/// 体积），内层为 id 加 `/nolandau` 后缀的基础模型节点；
/// 否则直接输出基础模型节点。
fn build_mineral_phase(record: &ParameterRecord) -> XmlNode {
    let t_crit = record.get("T_crit").unwrap_or(0.0);

    if t_crit > 0.0 {
        let s_crit = record.get("S_crit").unwrap_or(0.0);
        let v_crit = record.get("V_crit").unwrap_or(0.0);

        let mut landau = XmlNode::new("phase")
            .attr("type", LANDAU_MODIFICATION)
            .attr("id", &record.id);
        landau.push(XmlNode::new("blurb").text(record.blurb()));
        landau.push(make_let("TC0", "K", format!("{:.5}", t_crit)));
        landau.push(make_let("SD", "J/mol/K", format!("{:.3}", s_crit)));
        landau.push(make_let("VD", "m^3/mol", format!("{:.3}e-6", v_crit)));

        let mut inner = XmlNode::new("phase")
            .attr("type", DEBYE_SOLID)
            .attr("id", format!("{}/nolandau", record.id));
        inner.push(XmlNode::new("blurb").text(format!("{} (no Landau)", record.blurb())));
        fill_base_model(&mut inner, record);

        landau.push(inner);
        landau
    } else {
        let mut phase = XmlNode::new("phase")
            .attr("type", DEBYE_SOLID)
            .attr("id", &record.id);
        phase.push(XmlNode::new("blurb").text(record.blurb()));
        fill_base_model(&mut phase, record);
        phase
    }
}

/// 填充基础模型节点：规范化化学式 + 按输出表逐物理量赋值
fn fill_base_model(phase: &mut XmlNode, record: &ParameterRecord) {
    phase.push(XmlNode::new("formula").text(normalize_formula(&record.formula_raw)));

    for rule in EMIT_RULES {
        if let Some(value) = record.get(rule.quantity) {
            phase.push(make_let(
                rule.name,
                rule.unit,
                format!("{:.prec$}{}", value, rule.suffix, prec = rule.decimals),
            ));
        }
    }
}

fn make_let(name: &str, unit: &str, value: String) -> XmlNode {
    XmlNode::new("let").attr("name", name).attr("unit", unit).text(value)
}
