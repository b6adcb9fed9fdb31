/// Blank optional text means "no value"
pub fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Patch variant: an omitted field stays `None`, an empty one becomes `Some(None)`
pub fn normalize_patch(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| normalize_text(Some(v)))
}

/// Lowercase ASCII slug: runs of anything other than `a-z0-9` collapse to one `-`
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
