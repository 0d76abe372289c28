/// Display markup for a page title: the first parenthesized suffix is
/// wrapped in a span, `Title (2023)` -> `Title <span>(2023)</span>`.
pub fn title_markup(title: &str) -> String {
    match title.find('(') {
        Some(pos) => format!("{}<span>{}</span>", &title[..pos], &title[pos..]),
        None => title.to_string(),
    }
}
