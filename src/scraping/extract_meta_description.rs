use scraper::{Html, Selector};

/// Extracts the `content` of `<meta name="description">`, or an empty string.
pub fn extract_meta_description(html_content: &str) -> String {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse(r#"meta[name="description"]"#).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content").map(String::from))
        .unwrap_or_default()
}
