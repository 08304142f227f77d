use super::{escape, layout, page_title};

/// Render an error state, optionally with a link back to the catalog.
pub fn render(message: &str, back_link: bool) -> String {
    let back = if back_link {
        r#"<a class="back" href="/">&larr; Back to All Fighters</a>"#
    } else {
        ""
    };

    let content = format!(
        r#"<main class="error"><div class="message">Error: {}</div>{}</main>"#,
        escape(message),
        back
    );

    layout(&page_title(Some("Error")), &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_page_links_back() {
        let html = render("Fighter not found", true);
        assert!(html.contains("Error: Fighter not found"));
        assert!(html.contains("Back to All Fighters"));
    }

    #[test]
    fn test_fetch_failure_page_has_no_link() {
        let html = render("Failed to fetch fighters", false);
        assert!(html.contains("Error: Failed to fetch fighters"));
        assert!(!html.contains("Back to All Fighters"));
    }
}
