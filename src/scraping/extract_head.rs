/// Slices the `<head>...</head>` section out of a full HTML document.
///
/// Matches on the literal tokens `<head>` and `</head>`, with an explicit
/// policy for malformed documents:
/// - `<head>` absent: returns an empty fragment, so every extractor
///   downstream comes back empty
/// - `</head>` absent: returns from `<head>` to the end of the document
pub fn extract_head(html: &str) -> &str {
    let Some(start) = html.find("<head>") else {
        return "";
    };

    match html[start..].find("</head>") {
        Some(end) => &html[start..start + end + "</head>".len()],
        None => &html[start..],
    }
}
