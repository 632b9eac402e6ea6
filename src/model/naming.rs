//! Mapping from Rust type and field names to table and column names.

/// Converts model type names to table names and field names to column names.
pub trait NamingStrategy {
    fn table_name(&self, type_name: &str) -> String;
    fn column_name(&self, field_name: &str) -> String;
}

/// snake_case names; table names get a trailing `s` unless pluralization is turned off.
///
/// Runs of capitals stay together as one word, so `HTTPRequest` becomes `http_request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultNamingStrategy {
    pub pluralize_tables: bool,
}

impl Default for DefaultNamingStrategy {
    fn default() -> Self {
        Self {
            pluralize_tables: true,
        }
    }
}

impl NamingStrategy for DefaultNamingStrategy {
    fn table_name(&self, type_name: &str) -> String {
        let mut name = to_snake_case(type_name);
        if self.pluralize_tables {
            name.push('s');
        }
        name
    }

    fn column_name(&self, field_name: &str) -> String {
        to_snake_case(field_name)
    }
}

/// CamelCase to snake_case. Already snake_case input comes back unchanged.
#[must_use]
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            out.push(c);
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // word start after lowercase, or the last capital of an acronym
            if prev.is_lowercase() || (prev.is_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
