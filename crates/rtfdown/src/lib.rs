//! # rtfdown
//!
//! Convert Markdown documents to RTF.
//!
//! The renderer walks a parsed Markdown tree and emits an RTF control-word
//! stream, suitable for embedding as an opaque string inside a larger
//! document (an XML attribute, a CDATA section, an HTML fragment).
//!
//! ## Design
//!
//! The core works on a plain AST rather than Markdown text. This design
//! allows:
//!
//! - **Zero parsing overhead**: When an AST is already available
//! - **Parser agnostic**: Any Markdown parser can convert to the Node structure
//! - **Smaller binaries**: No Markdown parser bundled when the `markdown`
//!   feature is disabled
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use rtfdown::{RtfService, Node};
//!
//! let service = RtfService::new();
//!
//! // Build a simple document tree
//! let ast = Node::Document(vec![Node::header(1, vec![Node::text("Hello World")])]);
//!
//! let rtf = service.rtf(&ast).unwrap();
//! assert!(rtf.contains("Hello World"));
//! ```
//!
//! ## Example (Markdown string)
//!
//! ```rust
//! use rtfdown::RtfService;
//!
//! let service = RtfService::new();
//! let rtf = service.rtf_markdown("# Hello World").unwrap();
//! assert!(rtf.contains("Hello World"));
//! ```

#[cfg(feature = "markdown")]
pub mod markdown;
mod service;

#[cfg(feature = "markdown")]
pub use markdown::parse_markdown;
pub use rtfdown_core::{escape_rtf, resolve_url, Node, Options, RenderError};
pub use service::RtfService;

/// Error type for rtfdown operations
#[derive(Debug, thiserror::Error)]
pub enum RtfdownError {
    #[error("render error: {0}")]
    Render(#[from] rtfdown_core::RenderError),
}

pub type Result<T> = std::result::Result<T, RtfdownError>;
