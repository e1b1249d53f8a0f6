use crate::utils::error::BoxResult;

use super::model::Page;

/// Render the generated single-file component for a page
///
/// Hoisted script and style blocks move to the top level of the
/// component, next to the template wrapping the rendered content.
pub fn render_page_component(page: &Page) -> String {
    let mut component = String::new();

    component.push_str("<template><div>");
    component.push_str(&page.content_rendered);
    component.push_str("</div></template>\n");

    for tag in &page.hoisted_tags {
        component.push_str(tag);
        component.push('\n');
    }

    component
}

/// Render the generated data file for a page
///
/// The page data is double-encoded so the emitted module parses the
/// payload as a plain JSON string at runtime.
pub fn render_page_data(page: &Page) -> BoxResult<String> {
    let json = serde_json::to_string(&page.data())?;
    Ok(format!(
        "export const data = JSON.parse({});\n",
        serde_json::to_string(&json)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, AppOptions};
    use crate::page::{create_page, PageOptions};

    async fn sample_page(content: &str) -> Page {
        let app = App::new(AppOptions::new("/nonexistent/fake-source")).unwrap();
        create_page(
            &app,
            PageOptions {
                path: Some("/sample.html".to_string()),
                content: Some(content.to_string()),
                ..PageOptions::default()
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_render_page_component() {
        let page = sample_page("# Title\n\ntext\n\n<style>.a{}</style>\n").await;
        let component = render_page_component(&page);

        assert!(component.starts_with("<template><div>"));
        assert!(component.contains("text"));
        assert!(component.trim_end().ends_with("<style>.a{}</style>"));
        // Hoisted blocks do not stay inside the template
        let template_end = component.find("</template>").unwrap();
        assert!(!component[..template_end].contains("<style>"));
    }

    #[tokio::test]
    async fn test_render_page_data() {
        let page = sample_page("---\ntitle: Data Page\n---\ncontent\n").await;
        let data = render_page_data(&page).unwrap();

        assert!(data.starts_with("export const data = JSON.parse(\""));
        assert!(data.contains("Data Page"));
        assert!(data.contains(&page.key));
    }
}
