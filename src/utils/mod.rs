/// Read a setting the forgiving way: surrounding whitespace is ignored,
/// then an optional sign and the leading decimal digits are taken.
/// No digits, or a value too large for `i64`, reads as 0.
pub fn coerce_integer(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

/// Action name with any `_suffix` removed, lower-cased.
pub fn base_action_name(action: &str) -> String {
    let action = action.trim();
    action
        .split_once('_')
        .map_or(action, |(base, _)| base)
        .to_ascii_lowercase()
}

pub fn is_edit_action(action: &str) -> bool {
    base_action_name(action) == "edit"
}
