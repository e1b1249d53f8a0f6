//! Markdown extraction layer for the page factory
//!
//! Rendering is delegated to comrak; everything else here pulls
//! structure out of the rendered output: headers, internal links,
//! hoisted tags and code snippet dependencies.

pub mod engine;
pub mod headers;
pub mod hoist;
pub mod links;
pub mod snippets;

pub use engine::{create_comrak_options, render_markdown};
pub use headers::{extract_headers, resolve_headers, PageHeader};
pub use hoist::extract_hoisted_tags;
pub use links::{extract_links, PageLink};
pub use snippets::resolve_import_code;
