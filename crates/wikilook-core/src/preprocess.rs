/// Trim clipboard text; empty or whitespace-only means no selection
pub fn normalize_selection(raw: Option<&str>) -> Option<String> {
    let text = raw?.trim();

    if text.is_empty() {
        return None;
    }

    Some(text.to_string())
}
