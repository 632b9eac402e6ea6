//! Per-dialect keyword tables used when escaping identifiers.
//!
//! The sets hold uppercase words only; lookups upper-case the candidate first.

use std::collections::HashSet;

mod mysql;
mod postgres;
mod sqlite;

pub(crate) use mysql::MYSQL_KEYWORDS;
pub(crate) use postgres::POSTGRES_KEYWORDS;
pub(crate) use sqlite::SQLITE_KEYWORDS;

pub(crate) fn is_keyword(table: &HashSet<&'static str>, word: &str) -> bool {
    table.contains(word.to_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_uppercase() {
        for table in [&*POSTGRES_KEYWORDS, &*MYSQL_KEYWORDS, &*SQLITE_KEYWORDS] {
            assert!(table.iter().all(|w| w.chars().all(|c| !c.is_lowercase())));
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert!(is_keyword(&POSTGRES_KEYWORDS, "user"));
        assert!(is_keyword(&MYSQL_KEYWORDS, "Order"));
        assert!(is_keyword(&SQLITE_KEYWORDS, "pragma"));
        assert!(!is_keyword(&SQLITE_KEYWORDS, "user"));
        assert!(!is_keyword(&POSTGRES_KEYWORDS, "first_name"));
    }

    #[test]
    fn dialects_disagree_on_some_words() {
        assert!(is_keyword(&SQLITE_KEYWORDS, "AUTOINCREMENT"));
        assert!(!is_keyword(&POSTGRES_KEYWORDS, "AUTOINCREMENT"));
        assert!(is_keyword(&MYSQL_KEYWORDS, "ZEROFILL"));
        assert!(!is_keyword(&MYSQL_KEYWORDS, "USER"));
    }
}
