use std::borrow::Cow;

use crate::dialect::Dialect;

/// Quote `name` if the dialect treats it as a keyword, otherwise return it untouched.
///
/// The keyword lookup ignores case; the output keeps the caller's casing. Quote characters
/// inside a quoted name are doubled.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// assert_eq!(escape_identifier(Dialect::Postgres, "user"), "\"user\"");
/// assert_eq!(escape_identifier(Dialect::Mysql, "Order"), "`Order`");
/// assert_eq!(escape_identifier(Dialect::Sqlite, "email"), "email");
/// ```
#[must_use]
pub fn escape_identifier(dialect: Dialect, name: &str) -> Cow<'_, str> {
    if !dialect.is_reserved(name) {
        return Cow::Borrowed(name);
    }

    let quote = dialect.caps().identifier_quote;
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push(quote);
    for c in name.chars() {
        if c == quote {
            escaped.push(quote);
        }
        escaped.push(c);
    }
    escaped.push(quote);
    Cow::Owned(escaped)
}
