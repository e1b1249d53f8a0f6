use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HOISTED_TAG_REGEX: Regex = Regex::new(
        r"(?s)<script(?:\s[^>]*)?>.*?</script>|<style(?:\s[^>]*)?>.*?</style>"
    ).unwrap();
}

/// Pull `<script>` and `<style>` blocks out of rendered content
///
/// Returns the content with the blocks removed plus the blocks in
/// document order, so they can be hoisted into the page component.
pub fn extract_hoisted_tags(html: &str) -> (String, Vec<String>) {
    let mut tags = Vec::new();

    let stripped = HOISTED_TAG_REGEX.replace_all(html, |caps: &regex::Captures| {
        tags.push(caps[0].trim().to_string());
        ""
    });

    (stripped.into_owned(), tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hoisted_tags() {
        let html = concat!(
            "<p>before</p>\n",
            "<script setup>\nconst n = 1\n</script>\n",
            "<p>middle</p>\n",
            "<style>\n.red { color: red }\n</style>\n",
            "<p>after</p>\n",
        );

        let (content, tags) = extract_hoisted_tags(html);
        assert_eq!(tags.len(), 2);
        assert!(tags[0].starts_with("<script setup>"));
        assert!(tags[1].starts_with("<style>"));
        assert!(content.contains("<p>middle</p>"));
        assert!(!content.contains("<script"));
        assert!(!content.contains("<style"));
    }

    #[test]
    fn test_no_hoisted_tags() {
        let html = "<p>plain</p>";
        let (content, tags) = extract_hoisted_tags(html);
        assert_eq!(content, html);
        assert!(tags.is_empty());
    }
}
