pub(super) fn is_param_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Letters, `_` and decimal digits. Superscripts and roman numerals end the name.
pub(super) fn is_param_char(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_ascii_digit()
}

/// `::` at `idx`, the PostgreSQL cast operator.
pub(super) fn is_type_cast(chars: &[char], idx: usize) -> bool {
    chars.get(idx) == Some(&':') && chars.get(idx + 1) == Some(&':')
}

/// End index (exclusive) of a `:name` token whose colon sits at `idx`, if one starts there.
pub(super) fn scan_param_name(chars: &[char], idx: usize) -> Option<usize> {
    let start = idx + 1;
    if !chars.get(start).is_some_and(|c| is_param_start(*c)) {
        return None;
    }
    let mut end = start + 1;
    while end < chars.len() && is_param_char(chars[end]) {
        end += 1;
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_at(sql: &str, idx: usize) -> Option<String> {
        let chars: Vec<char> = sql.chars().collect();
        scan_param_name(&chars, idx).map(|end| chars[idx + 1..end].iter().collect())
    }

    #[test]
    fn names_stop_at_non_decimal_numerics() {
        assert_eq!(name_at(":a²", 0).as_deref(), Some("a"));
        assert_eq!(name_at(":rⅫ", 0).as_deref(), Some("r"));
        assert_eq!(name_at(":p10_x", 0).as_deref(), Some("p10_x"));
        assert_eq!(name_at(":név", 0).as_deref(), Some("név"));
        assert_eq!(name_at(":²", 0), None);
    }
}
