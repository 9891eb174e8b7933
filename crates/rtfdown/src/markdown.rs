//! Markdown parsing support.
//!
//! This module parses Markdown source text with comrak and converts the
//! result to the AST structure used by the RTF renderer.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options as ComrakOptions};

use rtfdown_core::Node;

/// Parse a Markdown string into a Node tree.
///
/// Kinds the renderer has no rule for (block quotes, ordered lists, tables,
/// ...) become [`Node::Unknown`] and take the graceful fallback path.
///
/// # Example
///
/// ```rust
/// use rtfdown::{parse_markdown, RtfService};
///
/// let ast = parse_markdown("# Hello **World**");
///
/// let service = RtfService::new();
/// let rtf = service.rtf(&ast).unwrap();
/// assert!(rtf.starts_with("{\\rtf1\\ansi"));
/// ```
pub fn parse_markdown(source: &str) -> Node {
    let arena = Arena::new();
    let root = parse_document(&arena, source, &ComrakOptions::default());
    convert(root)
}

/// Convert a comrak node to our AST structure
fn convert<'a>(node: &'a AstNode<'a>) -> Node {
    let children: Vec<Node> = node.children().map(convert).collect();
    let ast = node.data.borrow();

    match &ast.value {
        NodeValue::Document => Node::Document(children),

        NodeValue::Heading(heading) => Node::Header {
            level: heading.level,
            children,
        },

        NodeValue::Paragraph => Node::Paragraph(children),

        NodeValue::List(list) if list.list_type == ListType::Bullet => {
            Node::BulletList(children)
        }

        NodeValue::Item(_) => Node::ListItem(children),

        NodeValue::Strong => Node::Strong(children),

        NodeValue::Emph => Node::Emphasis(children),

        NodeValue::Code(code) => Node::InlineCode(vec![Node::text(&code.literal)]),

        NodeValue::Link(link) => Node::Link {
            href: link.url.clone(),
            children,
        },

        NodeValue::Image(link) => {
            // comrak stores alt text as the image's inline children
            let alt: String = children.iter().map(|c| c.text_content()).collect();
            Node::Image {
                href: link.url.clone(),
                alt,
            }
        }

        NodeValue::Text(text) => Node::Text(text.clone()),

        NodeValue::SoftBreak | NodeValue::LineBreak => Node::text(" "),

        // Everything else funnels into the fallback rendering, named after
        // the classic markdown-js tags where one exists.
        NodeValue::List(_) => Node::unknown("numberlist", children),
        NodeValue::BlockQuote => Node::unknown("blockquote", children),
        NodeValue::ThematicBreak => Node::unknown("hr", children),
        NodeValue::CodeBlock(block) => {
            Node::unknown("code_block", vec![Node::text(&block.literal)])
        }
        NodeValue::HtmlBlock(block) => Node::unknown("html", vec![Node::text(&block.literal)]),
        NodeValue::HtmlInline(html) => Node::unknown("html", vec![Node::text(html)]),
        other => Node::unknown(tag_name(other), children),
    }
}

/// Fallback tag for comrak kinds without a rendering rule
fn tag_name(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Strikethrough => "strikethrough",
        NodeValue::Table(_) => "table",
        NodeValue::TableRow(_) => "tablerow",
        NodeValue::TableCell => "tablecell",
        NodeValue::FootnoteDefinition(_) => "footnote",
        NodeValue::FootnoteReference(_) => "footnoteref",
        NodeValue::TaskItem(_) => "taskitem",
        NodeValue::FrontMatter(_) => "frontmatter",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RtfService;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_document() {
        let node = parse_markdown("Hello World");
        assert!(matches!(node, Node::Document(_)));
    }

    #[test]
    fn test_heading_and_strong() {
        let service = RtfService::new();
        let ast = parse_markdown("# Title\n\nHello **world**");
        let result = service.rtf(&ast).unwrap();
        assert_eq!(
            result,
            "{\\rtf1\\ansi\\fs24{\\fs48\\b Title\\b}\\line\\line Hello \\b world\\b0 \\line\\line }"
        );
    }

    #[test]
    fn test_bullet_list() {
        let service = RtfService::new();
        let result = service.rtf_markdown("- One\n- Two").unwrap();
        assert!(result.contains("{\\par \\bullet\\tab "));
        assert!(result.contains("One"));
        assert!(result.contains("Two"));
    }

    #[test]
    fn test_emphasis_and_code() {
        let service = RtfService::new();
        let result = service.rtf_markdown("*it* and `code`").unwrap();
        assert!(result.contains("\\i it\\i0 "));
        assert!(result.contains("\\i\\ul code\\ul0\\i0 "));
    }

    #[test]
    fn test_link() {
        let service = RtfService::new();
        let result = service
            .rtf_markdown("[Example](http://example.com/)")
            .unwrap();
        assert!(result.contains("{\\field{\\*\\fldinst{HYPERLINK \"http://example.com/\"}}"));
        assert!(result.contains("{\\fldrslt Example}}"));
    }

    #[test]
    fn test_image_alt_text() {
        let ast = parse_markdown("![An image](img/a.png)");
        let service = RtfService::new();
        let result = service.rtf(&ast).unwrap();
        assert!(result.contains("{\\fldrslt An image}}"));
    }

    #[test]
    fn test_unsupported_kind_falls_back() {
        let service = RtfService::new();
        let result = service.rtf_markdown("> quoted").unwrap();
        assert!(result.contains("(blockquote)"));
        assert!(result.contains("quoted"));
    }

    #[test]
    fn test_ordered_list_falls_back() {
        let service = RtfService::new();
        let result = service.rtf_markdown("1. One").unwrap();
        assert!(result.contains("(numberlist)"));
    }
}
