use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::utils::error::BoxResult;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(
        r"(?s)<h([1-6])([^>]*)>(.*?)</h[1-6]>"
    ).unwrap();

    static ref ID_ATTR_REGEX: Regex = Regex::new(r#"id=["']([^"']+)["']"#).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// A single heading extracted from rendered page content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageHeader {
    pub level: usize,
    pub title: String,
    pub slug: String,
    pub children: Vec<PageHeader>,
}

impl PageHeader {
    pub fn new(level: usize, title: String, slug: String) -> Self {
        Self {
            level,
            title,
            slug,
            children: Vec::new(),
        }
    }
}

/// Extract flat (level, slug, title) tuples from rendered HTML
pub fn extract_headers(html: &str) -> BoxResult<Vec<(usize, String, String)>> {
    let mut headers = Vec::new();

    for cap in HEADING_REGEX.captures_iter(html) {
        let level: usize = cap[1].parse()?;
        let inner = &cap[3];
        let title = header_text(inner);

        // The id may sit on the heading tag itself or on the anchor
        // element the renderer injects into it
        let slug = ID_ATTR_REGEX
            .captures(&cap[2])
            .or_else(|| ID_ATTR_REGEX.captures(inner))
            .map(|id| id[1].to_string())
            .unwrap_or_else(|| slug::slugify(&title));

        headers.push((level, slug, title));
    }

    Ok(headers)
}

/// Build a hierarchical header tree from rendered HTML
pub fn resolve_headers(html: &str) -> BoxResult<Vec<PageHeader>> {
    let flat = extract_headers(html)?;

    let mut root: Vec<PageHeader> = Vec::new();
    let mut stack: Vec<PageHeader> = Vec::new();

    for (level, slug, title) in flat {
        while stack.last().map_or(false, |h| h.level >= level) {
            let done = stack.pop().unwrap();
            match stack.last_mut() {
                Some(parent) => parent.children.push(done),
                None => root.push(done),
            }
        }
        stack.push(PageHeader::new(level, title, slug));
    }

    while let Some(done) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => root.push(done),
        }
    }

    Ok(root)
}

/// Strip markup from heading inner HTML and decode entities
fn header_text(inner: &str) -> String {
    let stripped = TAG_REGEX.replace_all(inner, "");
    html_escape::decode_html_entities(stripped.trim()).to_string()
}
