//! Placeholder spelling, WHERE-clause renumbering and IN-list helpers.

use std::borrow::Cow;

use crate::dialect::Dialect;
use crate::translation::LiteralTracker;

pub(crate) fn write_numbered(arg_index: usize, out: &mut String) {
    out.push('$');
    out.push_str(&arg_index.to_string());
}

pub(crate) fn write_positional(_arg_index: usize, out: &mut String) {
    out.push('?');
}

/// Shift every `$N` outside string literals by `offset`.
pub(crate) fn renumber_numbered(where_clause: &str, offset: usize) -> Cow<'_, str> {
    if offset == 0 || !where_clause.contains('$') {
        return Cow::Borrowed(where_clause);
    }

    let chars: Vec<char> = where_clause.chars().collect();
    let mut out = String::with_capacity(where_clause.len() + 4);
    let mut tracker = LiteralTracker::new(false);
    let mut idx = 0;

    while idx < chars.len() {
        if let Some(consumed) = tracker.step(&chars, idx) {
            out.extend(&chars[idx..idx + consumed]);
            idx += consumed;
            continue;
        }

        let c = chars[idx];
        if c == '$' {
            let digits_end = scan_digits(&chars, idx + 1);
            if digits_end > idx + 1 {
                let digits: String = chars[idx + 1..digits_end].iter().collect();
                match digits.parse::<usize>().ok().and_then(|n| n.checked_add(offset)) {
                    Some(shifted) => write_numbered(shifted, &mut out),
                    // out of range: keep the numeral as written
                    None => {
                        out.push('$');
                        out.push_str(&digits);
                    }
                }
                idx = digits_end;
                continue;
            }
        }
        out.push(c);
        idx += 1;
    }

    Cow::Owned(out)
}

pub(crate) fn renumber_positional(where_clause: &str, _offset: usize) -> Cow<'_, str> {
    Cow::Borrowed(where_clause)
}

pub(crate) fn join_numbered(offset: usize, count: usize) -> String {
    let mut out = String::with_capacity(count * 4);
    for i in 1..=count {
        if i > 1 {
            out.push(',');
        }
        write_numbered(offset + i, &mut out);
    }
    out
}

pub(crate) fn join_positional(_offset: usize, count: usize) -> String {
    vec!["?"; count].join(",")
}

fn scan_digits(chars: &[char], start: usize) -> usize {
    let mut idx = start;
    while idx < chars.len() && chars[idx].is_ascii_digit() {
        idx += 1;
    }
    idx
}

/// Add `offset` to every numbered placeholder in a WHERE fragment.
///
/// Used when a caller-typed clause (numbered from `$1`) is appended to a statement that
/// already consumed `offset` placeholders. Placeholders inside quoted literals are left
/// alone. `?`-style dialects get the fragment back unchanged.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// assert_eq!(renumber_placeholders(Dialect::Postgres, "id = $1", 3), "id = $4");
/// assert_eq!(renumber_placeholders(Dialect::Sqlite, "id = ?", 3), "id = ?");
/// ```
#[must_use]
pub fn renumber_placeholders(dialect: Dialect, where_clause: &str, offset: usize) -> String {
    (dialect.caps().renumber_where_clause)(where_clause, offset).into_owned()
}

/// Comma-joined placeholders for an `IN (...)` list of `count` values.
///
/// Numbered dialects continue after `offset`; `?` dialects ignore it.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// assert_eq!(join_placeholders_for_in(Dialect::Postgres, 2, 3), "$3,$4,$5");
/// assert_eq!(join_placeholders_for_in(Dialect::Mysql, 2, 3), "?,?,?");
/// ```
#[must_use]
pub fn join_placeholders_for_in(dialect: Dialect, offset: usize, count: usize) -> String {
    (dialect.caps().join_for_in)(offset, count)
}

/// Inline a list of integer ids, e.g. `1,2,3`, for `IN (...)` clauses built from trusted ids.
#[must_use]
pub fn join_for_in(ids: &[i64]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
