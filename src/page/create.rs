use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::{debug, error};
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::app::{App, LocaleOptions};
use crate::front_matter::{self, Frontmatter};
use crate::markdown::{
    create_comrak_options, extract_hoisted_tags, extract_links, render_markdown,
    resolve_headers, resolve_import_code, PageHeader,
};
use crate::utils::error::{BoxResult, PressError};
use crate::utils::path::normalize_path;

use super::model::Page;
use super::options::PageOptions;
use super::paths::{
    html_file_path_relative, infer_route_path, normalize_route_path, resolve_page_permalink,
};

/// Marker separating the excerpt from the rest of the content
const MORE_MARKER: &str = "<!-- more -->";

/// Date value used when no date can be resolved
const UNKNOWN_DATE: &str = "0000-00-00";

lazy_static! {
    static ref FILENAME_DATE_REGEX: Regex = Regex::new(r"^(\d{4}-\d{1,2}-\d{1,2})-").unwrap();
}

/// Create a page from the given options
///
/// Builds the page record, derives its generated file paths from the
/// route path, and runs the `extendsPage` hook exactly once before
/// returning.
pub async fn create_page(app: &App, options: PageOptions) -> BoxResult<Page> {
    let (file_path, file_path_relative) = resolve_page_file_path(app, &options)?;

    let raw = resolve_page_content(&options, file_path.as_deref())?;
    let (frontmatter, content) = resolve_page_frontmatter(&options, &raw)?;

    let slug = resolve_page_slug(&frontmatter, file_path_relative.as_deref());
    let date = resolve_page_date(&frontmatter, file_path_relative.as_deref());
    let path_inferred = file_path_relative.as_deref().map(infer_route_path);

    // Route path resolution order: permalink, explicit path, inferred.
    // A page without any of these cannot be routed.
    let path_locale_hint = options
        .path
        .as_deref()
        .or(path_inferred.as_deref())
        .unwrap_or("/");
    let path_locale_early = resolve_path_locale(&app.options.locales, path_locale_hint);
    let permalink = resolve_page_permalink(
        &frontmatter,
        app.options.permalink_pattern.as_deref(),
        &slug,
        &date,
        &path_locale_early,
    );

    let path = permalink
        .clone()
        .or_else(|| options.path.clone())
        .or_else(|| path_inferred.clone())
        .filter(|p| !p.is_empty());

    let path = match path {
        Some(p) => normalize_route_path(&p),
        None => {
            error!("Page creation failed: no route path and no resolvable source file");
            return Err(PressError::Page(
                "a page requires a path, a source file, or a permalink".into(),
            )
            .into());
        }
    };

    debug!("Creating page {}", path);

    let path_locale = resolve_path_locale(&app.options.locales, &path);
    let lang = resolve_page_lang(app, &frontmatter, &path_locale);

    // Markdown pipeline: snippet imports, render, hoist, headers, links
    let mut deps = Vec::new();
    let file_dir = file_path.as_deref().and_then(Path::parent);
    let content_resolved = resolve_import_code(&content, file_dir, &mut deps);

    let md_options = create_comrak_options();
    let rendered = if content_resolved.trim().is_empty() {
        String::new()
    } else {
        render_markdown(&content_resolved, &md_options)
    };
    let (content_rendered, hoisted_tags) = extract_hoisted_tags(&rendered);
    let headers = resolve_headers(&content_rendered)?;
    let links = extract_links(&content_rendered, &path);

    let excerpt = resolve_page_excerpt(&content, &md_options);
    let title = resolve_page_title(&frontmatter, &headers);
    let key = resolve_page_key(&path);

    // Every generated path is a pure function of the route path and
    // the directory roots
    let html_file_path_relative = html_file_path_relative(&path);
    let html_file_path = app.dir.dest(&html_file_path_relative);

    let component_file_path_relative =
        PathBuf::from("pages").join(format!("{}.vue", html_file_path_relative.display()));
    let component_file_path = app.dir.temp(&component_file_path_relative);

    let data_file_path_relative =
        PathBuf::from("pages").join(format!("{}.js", html_file_path_relative.display()));
    let data_file_path = app.dir.temp(&data_file_path_relative);

    let mut page = Page {
        component_file_chunk_name: key.clone(),
        data_file_chunk_name: key.clone(),
        key,
        path,
        title,
        lang,
        frontmatter,
        excerpt,
        headers,
        content,
        content_rendered,
        date,
        deps,
        hoisted_tags,
        links,
        path_inferred,
        path_locale,
        permalink,
        slug,
        file_path,
        file_path_relative,
        html_file_path,
        html_file_path_relative,
        component_file_path,
        component_file_path_relative,
        data_file_path,
        data_file_path_relative,
    };

    app.plugin_api
        .hooks
        .extends_page
        .process(&mut page, app)
        .await?;

    Ok(page)
}

/// Resolve the absolute and source-relative file paths of a page
fn resolve_page_file_path(
    app: &App,
    options: &PageOptions,
) -> BoxResult<(Option<PathBuf>, Option<PathBuf>)> {
    let file_path = match &options.file_path {
        Some(path) => path,
        None => return Ok((None, None)),
    };

    let absolute = if file_path.is_absolute() {
        normalize_path(file_path)
    } else {
        app.dir.source(file_path)
    };

    if !absolute.is_file() {
        error!("Page source file not found: {}", absolute.display());
        return Err(PressError::Page(format!(
            "page source file not found: {}",
            absolute.display()
        ))
        .into());
    }

    let relative = absolute
        .strip_prefix(app.dir.source_root())
        .map(Path::to_path_buf)
        .ok();

    Ok((Some(absolute), relative))
}

/// Resolve the raw page content: explicit option, source file, or empty
fn resolve_page_content(options: &PageOptions, file_path: Option<&Path>) -> BoxResult<String> {
    if let Some(content) = &options.content {
        return Ok(content.clone());
    }

    match file_path {
        Some(path) => Ok(fs::read_to_string(path).map_err(|e| {
            PressError::Page(format!("failed to read {}: {}", path.display(), e))
        })?),
        None => Ok(String::new()),
    }
}

/// Parse front matter from content and merge in option overrides
fn resolve_page_frontmatter(
    options: &PageOptions,
    raw: &str,
) -> BoxResult<(Frontmatter, String)> {
    let (parsed, content) = front_matter::parse(raw)?;

    // Option front matter takes precedence over the parsed block
    let frontmatter = match &options.frontmatter {
        Some(overrides) => {
            let mut merged = overrides.clone();
            merged.merge(&parsed);
            merged
        }
        None => parsed,
    };

    Ok((frontmatter, content))
}

/// Slug from front matter, else the source file name with any date
/// prefix stripped
fn resolve_page_slug(frontmatter: &Frontmatter, file_path_relative: Option<&Path>) -> String {
    if let Some(slug) = &frontmatter.slug {
        return slug.clone();
    }

    let stem = match file_path_relative.and_then(|p| p.file_stem()).and_then(|s| s.to_str()) {
        Some(stem) => stem,
        None => return String::new(),
    };

    FILENAME_DATE_REGEX.replace(stem, "").to_string()
}

/// Resolve the page date from front matter or a filename date prefix
fn resolve_page_date(frontmatter: &Frontmatter, file_path_relative: Option<&Path>) -> String {
    if let Some(date) = &frontmatter.date {
        // Accept a plain date or a date with a trailing time part
        let head = date.split_whitespace().next().unwrap_or("");
        if let Ok(parsed) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
            return parsed.format("%Y-%m-%d").to_string();
        }
    }

    if let Some(name) = file_path_relative.and_then(|p| p.file_name()).and_then(|s| s.to_str()) {
        if let Some(caps) = FILENAME_DATE_REGEX.captures(name) {
            if let Ok(parsed) = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d") {
                return parsed.format("%Y-%m-%d").to_string();
            }
        }
    }

    UNKNOWN_DATE.to_string()
}

/// The longest locale prefix matching the route path
fn resolve_path_locale(locales: &HashMap<String, LocaleOptions>, path: &str) -> String {
    locales
        .keys()
        .filter(|prefix| path.starts_with(prefix.as_str()))
        .max_by_key(|prefix| prefix.len())
        .cloned()
        .unwrap_or_else(|| "/".to_string())
}

/// Page language: front matter, locale config, then the site default
fn resolve_page_lang(app: &App, frontmatter: &Frontmatter, path_locale: &str) -> String {
    if let Some(lang) = &frontmatter.lang {
        return lang.clone();
    }

    app.options
        .locales
        .get(path_locale)
        .and_then(|locale| locale.lang.clone())
        .unwrap_or_else(|| app.options.lang.clone())
}

/// Rendered excerpt: the content before the `<!-- more -->` marker
fn resolve_page_excerpt(content: &str, md_options: &comrak::Options) -> String {
    match content.find(MORE_MARKER) {
        Some(idx) => {
            let head = content[..idx].trim();
            if head.is_empty() {
                String::new()
            } else {
                render_markdown(head, md_options)
            }
        }
        None => String::new(),
    }
}

/// Page title: front matter, else the first level-1 header
fn resolve_page_title(frontmatter: &Frontmatter, headers: &[PageHeader]) -> String {
    if let Some(title) = &frontmatter.title {
        return title.clone();
    }

    headers
        .iter()
        .find(|h| h.level == 1)
        .map(|h| h.title.clone())
        .unwrap_or_default()
}

/// Stable page key derived from the route path
fn resolve_page_key(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    format!("v-{}", &hex::encode(digest)[..8])
}
