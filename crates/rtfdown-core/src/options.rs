//! Configuration options for RTF rendering

use std::path::PathBuf;

/// Options for RTF rendering
///
/// One value is threaded through every recursive call as an explicit
/// parameter; nothing is captured or shared between renders.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Base URL for resolving relative link and image destinations
    pub base_url: Option<String>,

    /// Embed local images as binary blips instead of rendering them as links
    pub embed_images: bool,

    /// Base directory for locating local image files when embedding
    pub source_dir: Option<PathBuf>,
}
