use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::utils::path::{get_extension, to_forward_slashes};

lazy_static! {
    static ref IMPORT_CODE_REGEX: Regex = Regex::new(
        r"(?m)^@\[code(?:\s+([^\]]+))?\]\(([^)]+)\)[ \t]*$"
    ).unwrap();
}

/// Resolve `@[code](./path)` import directives in markdown content
///
/// Each directive is replaced with a fenced code block containing the
/// referenced file, and the resolved file path is recorded as a page
/// dependency. Relative paths resolve against `file_dir`.
pub fn resolve_import_code(
    content: &str,
    file_dir: Option<&Path>,
    deps: &mut Vec<String>,
) -> String {
    if !content.contains("@[code") {
        return content.to_string();
    }

    IMPORT_CODE_REGEX
        .replace_all(content, |caps: &regex::Captures| {
            let target = caps[2].trim();
            let resolved = match file_dir {
                Some(dir) if !Path::new(target).is_absolute() => {
                    crate::utils::path::normalize_path(dir.join(target))
                }
                _ => crate::utils::path::normalize_path(target),
            };

            deps.push(to_forward_slashes(&resolved));

            let info = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .or_else(|| get_extension(&resolved))
                .unwrap_or_else(|| "text".to_string());

            match fs::read_to_string(&resolved) {
                Ok(code) => format!("```{}\n{}\n```", info, code.trim_end()),
                Err(e) => {
                    warn!("Code snippet {} could not be read: {}", resolved.display(), e);
                    format!("```text\nCode snippet not found: {}\n```", target)
                }
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_snippet_keeps_dep() {
        let mut deps = Vec::new();
        let out = resolve_import_code(
            "@[code](./missing.rs)\n",
            Some(Path::new("/nonexistent/docs")),
            &mut deps,
        );

        assert_eq!(deps, vec!["/nonexistent/docs/missing.rs".to_string()]);
        assert!(out.contains("Code snippet not found"));
    }

    #[test]
    fn test_no_directive_is_untouched() {
        let mut deps = Vec::new();
        let content = "Some text with @[code] inline but no directive line.\n";
        assert_eq!(resolve_import_code(content, None, &mut deps), content);
        assert!(deps.is_empty());
    }

    #[test]
    fn test_existing_snippet_is_inlined() {
        let dir = std::env::temp_dir().join("rustpress-snippet-test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("demo.rs");
        fs::write(&file, "fn main() {}\n").unwrap();

        let mut deps = Vec::new();
        let out = resolve_import_code("@[code](./demo.rs)\n", Some(&dir), &mut deps);

        assert!(out.contains("```rs\nfn main() {}\n```"));
        assert_eq!(deps, vec![to_forward_slashes(PathBuf::from(&file))]);

        fs::remove_file(&file).ok();
    }
}
