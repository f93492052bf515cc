use scraper::{Html, Selector};

/// Extracts the `content` of `<meta property="og:image">`, or an empty string.
pub fn extract_og_image(html_content: &str) -> String {
    let document = Html::parse_document(html_content);
    let selector = Selector::parse(r#"meta[property="og:image"]"#).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content").map(String::from))
        .unwrap_or_default()
}
