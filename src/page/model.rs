use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::front_matter::Frontmatter;
use crate::markdown::{PageHeader, PageLink};

/// A routable page and its generated build artifacts
///
/// Constructed once by the page factory, passed through the
/// `extendsPage` hook, then treated as immutable by rendering.
#[derive(Debug, Clone)]
pub struct Page {
    /// Stable identifier derived from the route path
    pub key: String,
    /// Route path, unique per page
    pub path: String,
    /// Page title
    pub title: String,
    /// Page language
    pub lang: String,
    /// Parsed front matter
    pub frontmatter: Frontmatter,
    /// Rendered excerpt HTML
    pub excerpt: String,
    /// Headers extracted from the rendered content
    pub headers: Vec<PageHeader>,

    /// Source markdown without front matter
    pub content: String,
    /// Rendered HTML
    pub content_rendered: String,
    /// Page date, `0000-00-00` when unknown
    pub date: String,
    /// Files the rendered content depends on
    pub deps: Vec<String>,
    /// Script and style blocks hoisted out of the rendered content
    pub hoisted_tags: Vec<String>,
    /// Internal links found in the rendered content
    pub links: Vec<PageLink>,
    /// Route path inferred from the source file, if any
    pub path_inferred: Option<String>,
    /// Route prefix of the page locale
    pub path_locale: String,
    /// Resolved permalink, if any
    pub permalink: Option<String>,
    /// Slug derived from the source file name
    pub slug: String,

    /// Absolute source file path, absent for synthetic pages
    pub file_path: Option<PathBuf>,
    /// Source file path relative to the source directory
    pub file_path_relative: Option<PathBuf>,

    /// Output HTML file path
    pub html_file_path: PathBuf,
    pub html_file_path_relative: PathBuf,

    /// Generated component file path
    pub component_file_path: PathBuf,
    pub component_file_path_relative: PathBuf,
    /// Chunk name of the component file, equals `key`
    pub component_file_chunk_name: String,

    /// Generated data file path
    pub data_file_path: PathBuf,
    pub data_file_path_relative: PathBuf,
    /// Chunk name of the data file, equals `key`
    pub data_file_chunk_name: String,
}

impl Page {
    /// The client-facing subset serialized into the data file
    pub fn data(&self) -> PageData {
        PageData {
            key: self.key.clone(),
            path: self.path.clone(),
            title: self.title.clone(),
            lang: self.lang.clone(),
            frontmatter: self.frontmatter.clone(),
            excerpt: self.excerpt.clone(),
            headers: self.headers.clone(),
        }
    }
}

/// Page data shipped to the client runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData {
    pub key: String,
    pub path: String,
    pub title: String,
    pub lang: String,
    pub frontmatter: Frontmatter,
    pub excerpt: String,
    pub headers: Vec<PageHeader>,
}
