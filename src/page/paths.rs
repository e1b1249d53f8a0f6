use std::path::{Path, PathBuf};

use crate::front_matter::Frontmatter;
use crate::utils::path::{get_extension, get_stem, normalize_route, to_forward_slashes};

/// Infer the route path of a page from its relative source file path
///
/// `guide/intro.md` becomes `/guide/intro.html`; `README.md` and
/// `index.md` map to the directory route. Segments are URL-encoded.
pub fn infer_route_path(relative: &Path) -> String {
    let dir = relative
        .parent()
        .map(to_forward_slashes)
        .filter(|d| !d.is_empty());

    let stem = get_stem(relative).unwrap_or_default();
    let is_index = stem.eq_ignore_ascii_case("readme") || stem.eq_ignore_ascii_case("index");

    let mut route = String::from("/");
    if let Some(dir) = dir {
        for segment in dir.split('/') {
            route.push_str(&urlencoding::encode(segment));
            route.push('/');
        }
    }

    if !is_index {
        route.push_str(&urlencoding::encode(&stem));
        route.push_str(".html");
    }

    route
}

/// Normalize a route path: leading slash, resolved dot segments,
/// `index.html` collapsed to the directory route, and an `.html`
/// suffix for extensionless paths
pub fn normalize_route_path(path: &str) -> String {
    let mut path = if path.starts_with('/') {
        normalize_route(path)
    } else {
        normalize_route(&format!("/{}", path))
    };

    if let Some(prefix) = path.strip_suffix("/index.html") {
        path = format!("{}/", prefix);
    }

    if !path.ends_with('/') && !last_segment_has_extension(&path) {
        path.push_str(".html");
    }

    path
}

/// The output HTML file path relative to the destination directory,
/// derived from the route path alone
pub fn html_file_path_relative(path: &str) -> PathBuf {
    let rel = path.trim_start_matches('/');

    if path.ends_with('/') || rel.is_empty() {
        PathBuf::from(format!("{}index.html", rel))
    } else {
        PathBuf::from(rel)
    }
}

/// Resolve the page permalink from front matter or the site pattern
///
/// The pattern supports `:year`, `:month`, `:day` and `:slug`
/// placeholders and only applies to file-backed pages with a slug.
pub fn resolve_page_permalink(
    frontmatter: &Frontmatter,
    pattern: Option<&str>,
    slug: &str,
    date: &str,
    path_locale: &str,
) -> Option<String> {
    if let Some(permalink) = &frontmatter.permalink {
        return Some(normalize_route_path(permalink));
    }

    let pattern = pattern?;
    if slug.is_empty() {
        return None;
    }

    let mut parts = date.split('-');
    let year = parts.next().unwrap_or("0000");
    let month = parts.next().unwrap_or("00");
    let day = parts.next().unwrap_or("00");

    let expanded = pattern
        .replace(":year", year)
        .replace(":month", month)
        .replace(":day", day)
        .replace(":slug", slug);

    let prefixed = format!(
        "{}/{}",
        path_locale.trim_end_matches('/'),
        expanded.trim_start_matches('/')
    );

    Some(normalize_route_path(&prefixed))
}

fn last_segment_has_extension(path: &str) -> bool {
    let segment = path.rsplit('/').next().unwrap_or("");
    get_extension(Path::new(segment)).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_route_path() {
        assert_eq!(infer_route_path(Path::new("README.md")), "/");
        assert_eq!(infer_route_path(Path::new("index.md")), "/");
        assert_eq!(infer_route_path(Path::new("guide/README.md")), "/guide/");
        assert_eq!(infer_route_path(Path::new("guide/intro.md")), "/guide/intro.html");
        assert_eq!(
            infer_route_path(Path::new("notes/my note.md")),
            "/notes/my%20note.html"
        );
    }

    #[test]
    fn test_normalize_route_path() {
        assert_eq!(normalize_route_path("/"), "/");
        assert_eq!(normalize_route_path("guide"), "/guide.html");
        assert_eq!(normalize_route_path("/guide/"), "/guide/");
        assert_eq!(normalize_route_path("/guide/index.html"), "/guide/");
        assert_eq!(normalize_route_path("/a/../b.html"), "/b.html");
    }

    #[test]
    fn test_html_file_path_relative() {
        assert_eq!(html_file_path_relative("/"), PathBuf::from("index.html"));
        assert_eq!(html_file_path_relative("/guide/"), PathBuf::from("guide/index.html"));
        assert_eq!(html_file_path_relative("/guide/intro.html"), PathBuf::from("guide/intro.html"));
    }

    #[test]
    fn test_permalink_from_front_matter() {
        let fm = Frontmatter {
            permalink: Some("posts/hello/".to_string()),
            ..Frontmatter::default()
        };
        let permalink = resolve_page_permalink(&fm, None, "", "0000-00-00", "/");
        assert_eq!(permalink.as_deref(), Some("/posts/hello/"));
    }

    #[test]
    fn test_permalink_from_pattern() {
        let fm = Frontmatter::default();
        let permalink = resolve_page_permalink(
            &fm,
            Some(":year/:month/:day/:slug.html"),
            "hello-world",
            "2024-03-05",
            "/",
        );
        assert_eq!(permalink.as_deref(), Some("/2024/03/05/hello-world.html"));
    }

    #[test]
    fn test_permalink_pattern_needs_slug() {
        let fm = Frontmatter::default();
        let permalink = resolve_page_permalink(&fm, Some(":year/:slug.html"), "", "0000-00-00", "/");
        assert!(permalink.is_none());
    }

    #[test]
    fn test_permalink_pattern_with_locale() {
        let fm = Frontmatter::default();
        let permalink = resolve_page_permalink(
            &fm,
            Some(":year/:slug.html"),
            "bonjour",
            "2024-01-02",
            "/fr/",
        );
        assert_eq!(permalink.as_deref(), Some("/fr/2024/bonjour.html"));
    }
}
