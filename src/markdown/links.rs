use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::path::normalize_route;

lazy_static! {
    static ref HREF_REGEX: Regex = Regex::new(r#"<a\s[^>]*?href=["']([^"']+)["']"#).unwrap();

    static ref EXTERNAL_REGEX: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").unwrap();
}

/// An internal link found in rendered page content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageLink {
    /// The href exactly as written
    pub raw: String,
    /// The link relative to the site root, without a leading slash
    pub relative: String,
    /// The link resolved against the page route path
    pub absolute: String,
}

/// Extract internal links from rendered HTML
///
/// External links (any scheme, including mailto) and in-page anchors
/// are skipped.
pub fn extract_links(html: &str, page_path: &str) -> Vec<PageLink> {
    let base = parent_route(page_path);
    let mut links = Vec::new();

    for cap in HREF_REGEX.captures_iter(html) {
        let raw = cap[1].to_string();

        if raw.starts_with('#') || raw.starts_with("//") || EXTERNAL_REGEX.is_match(&raw) {
            continue;
        }

        // Resolve against the page route, dropping any fragment or query
        let target = raw.split(['#', '?']).next().unwrap_or("").to_string();
        if target.is_empty() {
            continue;
        }

        let absolute = if target.starts_with('/') {
            normalize_route(&target)
        } else {
            normalize_route(&format!("{}{}", base, target))
        };

        links.push(PageLink {
            relative: absolute.trim_start_matches('/').to_string(),
            raw,
            absolute,
        });
    }

    links
}

/// The directory part of a route path, with a trailing slash
fn parent_route(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => path[..idx + 1].to_string(),
        None => "/".to_string(),
    }
}
