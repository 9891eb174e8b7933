//! Markdown Abstract Syntax Tree
//!
//! This module defines the AST nodes the RTF renderer consumes. The tree is
//! built by the caller (typically from a Markdown parser), owned by the
//! caller, and borrowed read-only during rendering.

/// A parsed Markdown node
///
/// Node kinds without a dedicated rendering rule are represented as
/// [`Node::Unknown`], which renders through a textual fallback instead of
/// failing. This keeps the renderer tolerant of parser evolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Root document container
    Document(Vec<Node>),

    /// Heading with level (1-6) and inline content
    Header { level: u8, children: Vec<Node> },

    /// Paragraph containing inline content
    Paragraph(Vec<Node>),

    /// Unordered list of items
    BulletList(Vec<Node>),

    /// Single list item
    ListItem(Vec<Node>),

    /// Strong emphasis (bold)
    Strong(Vec<Node>),

    /// Emphasis (italic)
    Emphasis(Vec<Node>),

    /// Inline code span
    InlineCode(Vec<Node>),

    /// Image with source URL and alt text
    Image { href: String, alt: String },

    /// Link with destination URL and display content
    Link { href: String, children: Vec<Node> },

    /// Plain text (terminal; no children)
    Text(String),

    /// Node kind with no rendering rule, kept for graceful fallback
    Unknown { tag: String, children: Vec<Node> },
}

impl Node {
    /// Create a text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create a header node
    pub fn header(level: u8, children: Vec<Node>) -> Self {
        Node::Header { level, children }
    }

    /// Create a link node
    pub fn link(href: &str, children: Vec<Node>) -> Self {
        Node::Link {
            href: href.to_string(),
            children,
        }
    }

    /// Create an image node
    pub fn image(href: &str, alt: &str) -> Self {
        Node::Image {
            href: href.to_string(),
            alt: alt.to_string(),
        }
    }

    /// Create an unknown node
    pub fn unknown(tag: &str, children: Vec<Node>) -> Self {
        Node::Unknown {
            tag: tag.to_string(),
            children,
        }
    }

    /// The kind name, as used in error messages and fallback rendering
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Document(_) => "document",
            Node::Header { .. } => "header",
            Node::Paragraph(_) => "paragraph",
            Node::BulletList(_) => "bulletlist",
            Node::ListItem(_) => "listitem",
            Node::Strong(_) => "strong",
            Node::Emphasis(_) => "emphasis",
            Node::InlineCode(_) => "inlinecode",
            Node::Image { .. } => "image",
            Node::Link { .. } => "link",
            Node::Text(_) => "text",
            Node::Unknown { tag, .. } => tag,
        }
    }

    /// Child nodes in document order (empty for terminals)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Document(children)
            | Node::Paragraph(children)
            | Node::BulletList(children)
            | Node::ListItem(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::InlineCode(children)
            | Node::Header { children, .. }
            | Node::Link { children, .. }
            | Node::Unknown { children, .. } => children,
            Node::Text(_) | Node::Image { .. } => &[],
        }
    }

    /// Concatenated text content of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Image { alt, .. } => alt.clone(),
            _ => self
                .children()
                .iter()
                .map(|child| child.text_content())
                .collect(),
        }
    }
}
