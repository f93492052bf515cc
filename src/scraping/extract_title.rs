use scraper::{Html, Selector};

/// Extracts the plain text of the `<title>` element, or an empty string.
pub fn extract_title(html_content: &str) -> String {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse("title").unwrap();

    document
        .select(&selector)
        .next()
        .map(|n| n.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}
