//! # XML 输出文档树
//!
//! 有序的类型化节点树：每个节点有标签、按插入顺序保存的属性、
//! 可选文本和子节点。整棵树增量构建，最后一次性序列化。
//!
//! ## 序列化格式
//! ```text
//! <?xml version="1.0" ?>
//! <module xmlns="..." id="...">
//!   <let name="T0" unit="K">300.0</let>
//!   <phase type="..." id="...">
//!     ...
//!   </phase>
//! </module>
//! ```
//! 两空格缩进，仅含文本的元素单行输出，空元素自闭合，
//! 全空白行在最终输出中剔除。
//!
//! ## 依赖关系
//! - 被 `builder.rs` 和 `commands/generate.rs` 使用
//! - 无外部模块依赖

use std::fmt::Write as _;

/// XML 文档树节点
#[derive(Debug, Clone)]
pub struct XmlNode {
    /// 标签名
    pub tag: String,

    /// 属性，按插入顺序输出
    pub attrs: Vec<(String, String)>,

    /// 可选文本内容（与子节点互斥）
    pub text: Option<String>,

    /// 子节点
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn new(tag: impl Into<String>) -> Self {
        XmlNode {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// 追加一个属性（消耗并返回自身，便于链式构建）
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// 设置文本内容
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// 追加一个子节点
    pub fn push(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// 序列化整棵树为带缩进的 XML 字符串
    pub fn to_xml_string(&self) -> String {
        let mut buf = String::new();
        self.write_node(&mut buf, 0);

        let mut out = String::from("<?xml version=\"1.0\" ?>\n");
        for line in buf.lines().filter(|l| !l.trim().is_empty()) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn write_node(&self, out: &mut String, depth: usize) {
        let pad = "  ".repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }

        if !self.children.is_empty() {
            out.push_str(">\n");
            for child in &self.children {
                child.write_node(out, depth + 1);
            }
            let _ = writeln!(out, "{}</{}>", pad, self.tag);
        } else if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let _ = writeln!(out, ">{}</{}>", escape_text(text), self.tag);
        } else {
            out.push_str("/>\n");
        }
    }
}

/// 转义文本内容中的保留字符
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// 转义属性值中的保留字符
fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_self_closes() {
        let node = XmlNode::new("phase").attr("ref", "fo");
        assert_eq!(node.to_xml_string(), "<?xml version=\"1.0\" ?>\n<phase ref=\"fo\"/>\n");
    }

    #[test]
    fn test_text_element_inline() {
        let node = XmlNode::new("let")
            .attr("name", "T0")
            .attr("unit", "K")
            .text("300.0");
        assert_eq!(
            node.to_xml_string(),
            "<?xml version=\"1.0\" ?>\n<let name=\"T0\" unit=\"K\">300.0</let>\n"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let mut root = XmlNode::new("module").attr("id", "SLB24");
        let mut phase = XmlNode::new("phase").attr("id", "ol");
        phase.push(XmlNode::new("formula").text("(Mg)2(Si)(O)4"));
        root.push(phase);

        let xml = root.to_xml_string();
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], "<?xml version=\"1.0\" ?>");
        assert_eq!(lines[1], "<module id=\"SLB24\">");
        assert_eq!(lines[2], "  <phase id=\"ol\">");
        assert_eq!(lines[3], "    <formula>(Mg)2(Si)(O)4</formula>");
        assert_eq!(lines[4], "  </phase>");
        assert_eq!(lines[5], "</module>");
    }

    #[test]
    fn test_attrs_keep_insertion_order() {
        let node = XmlNode::new("phase").attr("type", "X, Y").attr("id", "ol");
        assert!(node.to_xml_string().contains("<phase type=\"X, Y\" id=\"ol\"/>"));
    }

    #[test]
    fn test_escaping() {
        let node = XmlNode::new("blurb").attr("note", "a \"b\" & c").text("1 < 2 & 3 > 2");
        let xml = node.to_xml_string();
        assert!(xml.contains("note=\"a &quot;b&quot; &amp; c\""));
        assert!(xml.contains(">1 &lt; 2 &amp; 3 &gt; 2<"));
    }

    #[test]
    fn test_blank_lines_stripped() {
        let node = XmlNode::new("blurb").text("\n    line one\n\n    line two\n  ");
        let xml = node.to_xml_string();
        assert!(!xml.lines().any(|l| !l.is_empty() && l.trim().is_empty()));
        assert!(xml.lines().all(|l| !l.is_empty()));
        assert!(xml.contains("line one"));
        assert!(xml.contains("line two"));
    }
}
