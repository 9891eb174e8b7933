//! Markdown AST to RTF rendering
//!
//! Converts Markdown AST nodes into an RTF control-word stream.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use crate::ast::Node;
use crate::escape::{escape_rtf, quote_field_url};
use crate::options::Options;
use crate::resolve::resolve_url;
use crate::{RenderError, Result};

/// Recursion guard against pathologically nested documents.
const MAX_DEPTH: usize = 512;

/// Render an AST to an RTF string.
///
/// Post-order walk: children are rendered first, in document order, and the
/// parent's rule wraps their concatenated output. The tree is borrowed
/// read-only; a fresh output string is produced per call and no state is
/// shared between calls.
pub fn render(node: &Node, options: &Options) -> Result<String> {
    let mut output = String::with_capacity(1024);
    render_node(node, options, 0, &mut output)?;
    Ok(output)
}

fn render_node(node: &Node, options: &Options, depth: usize, out: &mut String) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(RenderError::NestingTooDeep { depth });
    }

    match node {
        Node::Text(text) => out.push_str(&escape_rtf(text)),

        Node::Document(children) => {
            out.push_str("{\\rtf1\\ansi\\fs24");
            render_children(children, options, depth, out)?;
            out.push('}');
        }

        Node::Header { level, children } => {
            if !(1..=6).contains(level) {
                return Err(RenderError::InvalidHeaderLevel { level: *level });
            }
            // Point sizes 48,24,16,12,10,8 for levels 1..6 (48/level, rounded)
            let level = u32::from(*level);
            let size = (48 + level / 2) / level;
            let _ = write!(out, "{{\\fs{:02}\\b ", size);
            render_children(children, options, depth, out)?;
            out.push_str("\\b}\\line\\line ");
        }

        Node::Paragraph(children) => {
            render_children(children, options, depth, out)?;
            out.push_str("\\line\\line ");
        }

        Node::BulletList(children) => {
            out.push_str("{\\par ");
            render_children(children, options, depth, out)?;
            out.push_str("}\\line ");
        }

        Node::ListItem(children) => {
            out.push_str("\\bullet\\tab ");
            render_children(children, options, depth, out)?;
            out.push_str("\\line ");
        }

        Node::Strong(children) => {
            out.push_str("\\b ");
            render_children(children, options, depth, out)?;
            out.push_str("\\b0 ");
        }

        Node::Emphasis(children) => {
            out.push_str("\\i ");
            render_children(children, options, depth, out)?;
            out.push_str("\\i0 ");
        }

        Node::InlineCode(children) => {
            // RTF has no monospace guarantee; italic+underline stands in.
            out.push_str("\\i\\ul ");
            render_children(children, options, depth, out)?;
            out.push_str("\\ul0\\i0 ");
        }

        Node::Link { href, children } => {
            if href.is_empty() {
                return Err(RenderError::MissingAttribute {
                    kind: "link",
                    attribute: "href",
                });
            }
            render_link(href, children, options, depth, out)?;
        }

        Node::Image { href, alt } => {
            if href.is_empty() {
                return Err(RenderError::MissingAttribute {
                    kind: "image",
                    attribute: "href",
                });
            }
            render_image(href, alt, options, depth, out)?;
        }

        Node::Unknown { tag, children } => {
            // Mandatory fallback: unknown kinds degrade to a textual marker
            // instead of aborting the conversion.
            out.push_str(&escape_rtf(&format!("({})", tag)));
            render_children(children, options, depth, out)?;
        }
    }

    Ok(())
}

fn render_children(
    children: &[Node],
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    for child in children {
        render_node(child, options, depth + 1, out)?;
    }
    Ok(())
}

fn render_link(
    href: &str,
    children: &[Node],
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    let resolved = resolve_url(href, options.base_url.as_deref());
    out.push_str("{\\field{\\*\\fldinst{HYPERLINK ");
    out.push_str(&quote_field_url(&resolved));
    out.push_str("}}{\\fldrslt ");
    render_children(children, options, depth, out)?;
    out.push_str("}}");
    Ok(())
}

fn render_image(
    href: &str,
    alt: &str,
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    if options.embed_images && !href.contains("://") {
        if let Some(picture) = embed_picture(href, options) {
            out.push_str(&picture);
            return Ok(());
        }
    }

    // Fallback: render as a link with the alt text as display content.
    let alt_text = [Node::Text(alt.to_string())];
    render_link(href, &alt_text, options, depth, out)
}

/// Read a local image file and build its `\pict` group, or `None` when the
/// extension is unrecognized or the file cannot be read. The renderer's
/// only I/O lives here, behind the `embed_images` capability.
fn embed_picture(href: &str, options: &Options) -> Option<String> {
    let extension = Path::new(href)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let blip = match extension.as_deref() {
        Some("png") => "\\pngblip",
        Some("jpg") | Some("jpeg") => "\\jpegblip",
        _ => {
            tracing::debug!(href, "unrecognized image extension, rendering as link");
            return None;
        }
    };

    let path = match &options.source_dir {
        Some(dir) => dir.join(href),
        None => PathBuf::from(href),
    };

    match std::fs::read(&path) {
        Ok(bytes) => Some(format!("{{\\pict{} {}}}", blip, hex::encode(bytes))),
        Err(error) => {
            tracing::debug!(href, %error, "unreadable image file, rendering as link");
            None
        }
    }
}
