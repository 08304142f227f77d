//! HTML rendering for the catalog pages.

use roster::catalog::SortOption;

pub mod detail;
pub mod error;
pub mod list;

const SITE_TITLE: &str = "UFC Fighter Stats";
const SITE_DESCRIPTION: &str = "View UFC fighter statistics, records, and fight history";

const STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { background: #0a0a0a; color: #fff; font-family: system-ui, -apple-system, sans-serif; }
a { color: inherit; text-decoration: none; }
main { min-height: 100vh; padding: 2rem 1rem; }
.container { max-width: 80rem; margin: 0 auto; }
.header { text-align: center; margin-bottom: 3rem; }
.header h1 { font-size: 4rem; font-weight: 900; letter-spacing: -0.05em; }
.header h1 .accent, .accent { color: #dc2626; }
.rule { height: 4px; width: 8rem; background: #dc2626; margin: 0 auto; }
.tagline { margin-top: 1rem; color: #9ca3af; font-size: 1.125rem; }
.controls { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: space-between; margin-bottom: 2rem; }
.control-label { display: block; font-size: 0.875rem; font-weight: 600; color: #9ca3af; margin-bottom: 0.5rem; }
.chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.chip { padding: 0.5rem 1rem; border-radius: 0.5rem; font-weight: 600; font-size: 0.875rem; background: #1a1a1a; color: #9ca3af; border: 1px solid #2a2a2a; }
.chip:hover { color: #fff; border-color: rgba(220, 38, 38, 0.5); }
.chip.active { background: #dc2626; color: #fff; border-color: #dc2626; }
select { padding: 0.5rem 1rem; border-radius: 0.5rem; background: #1a1a1a; color: #fff; font-weight: 600; border: 1px solid #2a2a2a; }
.count { text-align: center; color: #9ca3af; font-size: 0.875rem; margin-bottom: 1rem; }
.count strong { color: #dc2626; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr)); gap: 1.5rem; }
.card { display: block; background: linear-gradient(#1a1a1a, #000); border: 1px solid #2a2a2a; border-radius: 0.75rem; overflow: hidden; transition: transform 0.3s; }
.card:hover { border-color: #dc2626; transform: scale(1.03); }
.card-image { position: relative; height: 20rem; }
.card-image img, .hero-image img { width: 100%; height: 100%; object-fit: contain; }
.badge-form { position: absolute; top: 1rem; right: 1rem; padding: 0.5rem 1rem; border-radius: 0.5rem; text-align: center; }
.badge-form .value { font-size: 1.5rem; font-weight: 900; }
.badge-form .label { font-size: 0.75rem; font-weight: 600; }
.badge-class { position: absolute; top: 1rem; left: 1rem; background: rgba(0, 0, 0, 0.8); padding: 0.25rem 0.75rem; border-radius: 0.375rem; border: 1px solid rgba(220, 38, 38, 0.5); font-size: 0.75rem; font-weight: 700; text-transform: uppercase; }
.form-elite { background: linear-gradient(to right, #dc2626, #b91c1c); }
.form-strong { background: linear-gradient(to right, #ef4444, #dc2626); }
.form-standard { background: linear-gradient(to right, #4b5563, #374151); }
.card-body { padding: 1.5rem; }
.card-body h2 { font-size: 1.5rem; font-weight: 900; }
.nickname { color: #9ca3af; font-weight: 600; font-size: 0.875rem; text-transform: uppercase; margin-bottom: 1rem; }
.row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.75rem; }
.row .key { color: #9ca3af; font-size: 0.875rem; }
.record .losses { color: #dc2626; }
.record .draws { color: #6b7280; }
.cta { border-top: 1px solid #2a2a2a; padding-top: 0.75rem; text-align: center; color: #6b7280; font-size: 0.875rem; font-weight: 600; }
.back { display: inline-block; font-weight: 600; margin-bottom: 2rem; }
.back:hover { color: #dc2626; }
.panel { background: linear-gradient(#1a1a1a, #000); border: 1px solid #2a2a2a; border-radius: 1rem; padding: 2rem; }
.hero { display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 2rem; margin-bottom: 2rem; }
.hero-image { height: 500px; border-radius: 0.75rem; overflow: hidden; background: linear-gradient(#2a2a2a, #000); }
.division { display: inline-block; background: rgba(0, 0, 0, 0.8); padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid rgba(220, 38, 38, 0.5); font-size: 0.875rem; font-weight: 700; text-transform: uppercase; margin-bottom: 1rem; }
.hero h1 { font-size: 3.5rem; font-weight: 900; }
.hero .nickname { font-size: 1.5rem; }
.form-block { display: inline-block; padding: 1rem 2rem; border-radius: 0.75rem; margin-bottom: 2rem; }
.form-block .value { font-size: 3rem; font-weight: 900; }
.form-block .label { font-size: 0.875rem; font-weight: 600; text-transform: uppercase; }
.facts { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.fact { background: rgba(0, 0, 0, 0.5); border: 1px solid #2a2a2a; border-radius: 0.5rem; padding: 1rem; }
.fact .key { color: #9ca3af; font-size: 0.875rem; margin-bottom: 0.25rem; }
.fact .value { font-size: 1.125rem; font-weight: 600; }
.columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 2rem; }
.section-title { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; font-size: 1.875rem; font-weight: 900; }
.section-title::before { content: ""; width: 3rem; height: 4px; background: #dc2626; }
.stat { margin-bottom: 1.5rem; }
.bar { height: 0.5rem; background: #000; border-radius: 9999px; overflow: hidden; }
.bar-fill { height: 100%; background: linear-gradient(to right, #dc2626, #ef4444); }
.fight { background: rgba(0, 0, 0, 0.5); border: 1px solid #2a2a2a; border-radius: 0.75rem; padding: 1.25rem; margin-bottom: 1rem; }
.fight-head { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; }
.fight-head .opponent { font-weight: 700; font-size: 1.125rem; }
.result { padding: 0.25rem 0.75rem; border-radius: 0.375rem; font-size: 0.75rem; font-weight: 900; text-transform: uppercase; }
.result-win { background: #fff; color: #000; }
.result-loss { background: #dc2626; color: #fff; }
.result-other { background: #4b5563; color: #fff; }
.fight-method { color: #9ca3af; font-size: 0.875rem; }
.fight-foot { display: flex; justify-content: space-between; border-top: 1px solid #2a2a2a; margin-top: 0.75rem; padding-top: 0.75rem; font-size: 0.75rem; }
.fight-foot .date { color: #6b7280; }
.error { min-height: 100vh; display: flex; flex-direction: column; gap: 1rem; align-items: center; justify-content: center; }
.error .message { font-size: 1.5rem; font-weight: 700; color: #dc2626; }
"#;

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Link to the catalog with the given filter and sort selection.
pub fn catalog_href(weight_class: &str, sort_by: SortOption) -> String {
    format!(
        "/?weightClass={}&sortBy={}",
        urlencoding::encode(weight_class),
        sort_by.as_param()
    )
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
{content}
</body>
</html>
"#,
        description = SITE_DESCRIPTION,
        title = escape(title),
        styles = STYLES,
        content = content,
    )
}

fn page_title(subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("{} | {}", subject, SITE_TITLE),
        None => SITE_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("Sean O'Malley"), "Sean O&#39;Malley");
        assert_eq!(escape("<b>\"x\" & y</b>"), "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_catalog_href_encodes_weight_class() {
        assert_eq!(
            catalog_href("Light Heavyweight", SortOption::Wins),
            "/?weightClass=Light%20Heavyweight&sortBy=wins"
        );
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("A & B", "<p>body</p>");
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}
