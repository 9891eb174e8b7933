//! RtfService - the main entry point for Markdown to RTF conversion.

use rtfdown_core::{render, Node, Options};

use crate::Result;

/// The main service for converting Markdown to RTF
pub struct RtfService {
    options: Options,
}

impl RtfService {
    /// Create a new RtfService with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create an RtfService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Render a caller-supplied AST to RTF
    pub fn rtf(&self, node: &Node) -> Result<String> {
        Ok(render(node, &self.options)?)
    }

    /// Parse Markdown source text and render it to RTF
    #[cfg(feature = "markdown")]
    pub fn rtf_markdown(&self, source: &str) -> Result<String> {
        let ast = crate::markdown::parse_markdown(source);
        self.rtf(&ast)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}

impl Default for RtfService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_ast() {
        let service = RtfService::new();
        let ast = Node::Document(vec![Node::Paragraph(vec![Node::text("Hello")])]);
        let result = service.rtf(&ast).unwrap();
        assert_eq!(result, "{\\rtf1\\ansi\\fs24Hello\\line\\line }");
    }

    #[test]
    fn test_base_url_option() {
        let service = RtfService::with_options(Options {
            base_url: Some("http://example.com/repo/".to_string()),
            ..Default::default()
        });
        let ast = Node::link("a.png", vec![Node::text("a")]);
        let result = service.rtf(&ast).unwrap();
        assert!(result.contains("http://example.com/repo/a.png"));
    }

    #[test]
    fn test_options_mut() {
        let mut service = RtfService::new();
        assert!(!service.options().embed_images);
        service.options_mut().embed_images = true;
        assert!(service.options().embed_images);
    }
}
