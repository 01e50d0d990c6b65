// src/core/sanitize.rs

/// Value of a digit character, ASCII or full-width (`０`..`９`).
pub fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => ch.to_digit(10),
        '０'..='９' => Some(ch as u32 - '０' as u32),
        _ => None,
    }
}

/// Look up one property in an inline `style="a: b; c: d"` attribute.
/// Property names compare case-insensitively; the value comes back trimmed.
pub fn style_value<'a>(style: &'a str, prop: &str) -> Option<&'a str> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(prop))
        .map(|(_, value)| value.trim())
        .map(|v| v.strip_suffix("!important").map(str::trim_end).unwrap_or(v))
        .filter(|v| !v.is_empty())
}
