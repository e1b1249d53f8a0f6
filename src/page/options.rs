use std::path::PathBuf;

use crate::front_matter::Frontmatter;

/// Input for the page factory
///
/// A page needs either a route `path`, a resolvable `file_path`, or
/// front matter carrying a permalink; creation fails otherwise.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Explicit route path
    pub path: Option<String>,
    /// Source file, absolute or relative to the source directory
    pub file_path: Option<PathBuf>,
    /// Raw content overriding the source file
    pub content: Option<String>,
    /// Front matter overriding values parsed from the content
    pub frontmatter: Option<Frontmatter>,
}
