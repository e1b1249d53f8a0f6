use log::debug;

use crate::utils::error::{BoxResult, PressError};
use super::types::Frontmatter;

const FENCE: &str = "---";

/// Check if content starts with a front matter fence
pub fn has_front_matter(content: &str) -> bool {
    let trimmed = content.trim_start_matches('\u{feff}');
    trimmed.starts_with(FENCE)
        && trimmed[FENCE.len()..].trim_start_matches([' ', '\t']).starts_with(['\n', '\r'])
}

/// Split content into a raw front matter block and the remaining body
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let trimmed = content.trim_start_matches('\u{feff}');
    if !has_front_matter(trimmed) {
        return (None, trimmed);
    }

    // Skip the opening fence line
    let after_open = match trimmed.find('\n') {
        Some(idx) => &trimmed[idx + 1..],
        None => return (None, trimmed),
    };

    // Find the closing fence on its own line
    for (offset, line) in line_offsets(after_open) {
        if line.trim_end() == FENCE {
            let raw = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            let body = body.strip_prefix('\n').unwrap_or(body);
            return (Some(raw), body);
        }
    }

    (None, trimmed)
}

/// Parse content into front matter and body
pub fn parse(content: &str) -> BoxResult<(Frontmatter, String)> {
    let (raw, body) = split_front_matter(content);

    let front_matter = match raw {
        Some(yaml) if !yaml.trim().is_empty() => {
            debug!("Parsing front matter block ({} bytes)", yaml.len());
            serde_yaml::from_str(yaml)
                .map_err(|e| PressError::FrontMatter(format!("invalid YAML front matter: {}", e)))?
        }
        _ => Frontmatter::default(),
    };

    Ok((front_matter, body.to_string()))
}

/// Iterate over lines with their byte offsets, newline included in the line
fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('\n').map(move |line| {
        let current = offset;
        offset += line.len();
        (current, line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_front_matter() {
        assert!(has_front_matter("---\ntitle: Hi\n---\nbody"));
        assert!(!has_front_matter("# Heading\n---\n"));
        assert!(!has_front_matter("--- not a fence"));
    }

    #[test]
    fn test_split_front_matter() {
        let content = "---\ntitle: Hi\n---\nbody text";
        let (raw, body) = split_front_matter(content);
        assert_eq!(raw, Some("title: Hi\n"));
        assert_eq!(body, "body text");
    }

    #[test]
    fn test_parse_with_front_matter() {
        let content = "---\ntitle: Hello\nlang: zh-CN\ntags:\n  - a\n---\n# Heading\n";
        let (fm, body) = parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.lang.as_deref(), Some("zh-CN"));
        assert!(fm.custom.contains_key("tags"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_parse_without_front_matter() {
        let content = "# Heading\n\nJust text.\n";
        let (fm, body) = parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        assert!(parse(content).is_err());
    }

    #[test]
    fn test_unterminated_fence_is_body() {
        let content = "---\ntitle: Hi\nbody without closing fence";
        let (fm, body) = parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }
}
