use comrak::Options;

/// Create default ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = false;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true; // Raw HTML must survive for hoisting

    // Parse options
    options.parse.smart = false;
    options.parse.default_info_string = Some("text".to_string());

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_ids() {
        let options = create_comrak_options();
        let html = render_markdown("## Getting Started", &options);

        assert!(html.contains("id=\"getting-started\""));
    }

    #[test]
    fn test_raw_script_and_style_pass_through() {
        let options = create_comrak_options();
        let html = render_markdown(
            "intro\n\n<script>window.x = 1;</script>\n\n<style>body { color: red; }</style>\n",
            &options,
        );

        assert!(html.contains("<script>window.x = 1;</script>"));
        assert!(html.contains("<style>body { color: red; }</style>"));
    }

    #[test]
    fn test_smart_punctuation_stays_literal() {
        let options = create_comrak_options();
        let html = render_markdown("\"quoted\" -- dashed", &options);

        assert!(html.contains("&quot;quoted&quot; -- dashed"));
    }
}
