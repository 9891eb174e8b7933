//! rtfdown-core - Markdown AST and RTF rendering
//!
//! This crate provides the core data structures and RTF serialization for
//! rtfdown. It accepts a parsed Markdown document tree and produces a single
//! RTF control-word string, suitable for embedding verbatim inside a larger
//! document (an XML attribute, a CDATA section, an HTML fragment).
//!
//! # Architecture
//!
//! ```text
//! Markdown source ──parser──▶ ┌──────────────┐
//!                             │              │
//!                             │ Markdown AST │ ──render──▶ RTF String
//! Hand-built tree ───────────▶│              │
//!                             └──────────────┘
//! ```
//!
//! The renderer never parses text itself; any Markdown parser can convert
//! its output to the [`Node`] structure. Rendering is a pure post-order walk
//! over a borrowed tree: children first, then the parent's rule. All
//! configuration travels as an explicit [`Options`] parameter, so concurrent
//! renders share no state.
//!
//! # Example
//!
//! ```rust
//! use rtfdown_core::{render, Node, Options};
//!
//! let ast = Node::Document(vec![
//!     Node::header(1, vec![Node::text("Hello World")]),
//!     Node::Paragraph(vec![
//!         Node::text("This is "),
//!         Node::Strong(vec![Node::text("bold")]),
//!         Node::text(" text."),
//!     ]),
//! ]);
//!
//! let rtf = render(&ast, &Options::default()).unwrap();
//! assert!(rtf.starts_with("{\\rtf1\\ansi\\fs24"));
//! ```

mod ast;
mod escape;
mod options;
mod render;
mod resolve;

pub use ast::Node;
pub use escape::{escape_rtf, quote_field_url};
pub use options::Options;
pub use render::render;
pub use resolve::resolve_url;

/// Error type for RTF rendering
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Header carries a level outside 1..=6
    #[error("header level {level} is outside 1..=6")]
    InvalidHeaderLevel { level: u8 },

    /// A node is missing a required attribute (e.g. a link with an empty href)
    #[error("{kind} node is missing required attribute `{attribute}`")]
    MissingAttribute {
        kind: &'static str,
        attribute: &'static str,
    },

    /// Document nesting exceeds the recursion guard
    #[error("document nesting deeper than {depth} levels")]
    NestingTooDeep { depth: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
