use std::path::{Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            std::path::Component::ParentDir => {
                // Go up one level unless we're at the root
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            },
            std::path::Component::CurDir => {
                // Skip "." components
            },
            _ => {
                result.push(component);
            }
        }
    }

    result
}

/// Get file extension as a string
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Get file name without extension
pub fn get_stem<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|s| s.to_string())
}

/// Convert a filesystem path to a forward-slash string
pub fn to_forward_slashes<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}

/// Normalize a route path string, resolving ".." and "." segments
pub fn normalize_route(route: &str) -> String {
    let absolute = route.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in route.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut result = segments.join("/");
    if absolute {
        result.insert(0, '/');
    }
    if route.ends_with('/') && !result.ends_with('/') {
        result.push('/');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("a/b/../c"), PathBuf::from("a/c"));
        assert_eq!(normalize_path("./a/./b"), PathBuf::from("a/b"));
    }

    #[test]
    fn test_to_forward_slashes() {
        assert_eq!(to_forward_slashes(Path::new("guide").join("intro.md")), "guide/intro.md");
    }

    #[test]
    fn test_normalize_route() {
        assert_eq!(normalize_route("/guide/../intro.html"), "/intro.html");
        assert_eq!(normalize_route("/guide/./sub/"), "/guide/sub/");
        assert_eq!(normalize_route("a//b"), "a/b");
    }
}
