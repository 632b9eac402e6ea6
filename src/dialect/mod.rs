use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SqlPortableError;
use crate::generate::{self, GeneratedStatement};
use crate::placeholders;
use crate::translation::{self, NamedParams};
use crate::types::QueryAndParams;

mod mysql;
mod postgres;
mod sqlite;

/// The SQL dialects this crate can emit.
///
/// The set is closed; everything dialect-specific is looked up through [`Dialect::caps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `PostgreSQL`: `$N` placeholders, `RETURNING id`
    #[value(name = "postgres", alias = "postgresql")]
    #[serde(alias = "postgresql")]
    Postgres,
    /// `MySQL`: `?` placeholders, backslash escapes, last insert id
    #[value(name = "mysql")]
    Mysql,
    /// `SQLite`: `?` placeholders, `NULL` for generated ids, last insert id
    #[value(name = "sqlite")]
    Sqlite,
}

/// How placeholders are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// `$1`, `$2`, ...
    Numbered,
    /// `?` for every argument
    Positional,
}

/// What an INSERT writes into the `id` slot of a model with an integer identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityDefault {
    /// Emit this keyword in the VALUES list.
    Keyword(&'static str),
    /// Leave the column out of the statement and let auto-increment fill it.
    Omitted,
}

/// How the generated id of a freshly inserted row is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRetrieval {
    /// The INSERT carries `RETURNING id`; read the single returned row.
    ReturningRow,
    /// Execute the INSERT and ask the driver for the last inserted row id.
    LastInsertId,
}

/// Static capability record for one dialect.
pub struct DialectCaps {
    pub name: &'static str,
    pub placeholder_style: PlaceholderStyle,
    pub identifier_quote: char,
    /// Whether `\` escapes the next character inside `'...'` and `"..."` literals.
    pub supports_backslash_escape: bool,
    pub identity_default: IdentityDefault,
    pub insert_suffix: &'static str,
    pub id_retrieval: IdRetrieval,
    pub(crate) is_reserved: fn(&str) -> bool,
    pub(crate) write_placeholder: fn(usize, &mut String),
    pub(crate) renumber_where_clause: for<'a> fn(&'a str, usize) -> Cow<'a, str>,
    pub(crate) join_for_in: fn(usize, usize) -> String,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Postgres, Dialect::Mysql, Dialect::Sqlite];

    #[must_use]
    pub fn caps(self) -> &'static DialectCaps {
        match self {
            Dialect::Postgres => &postgres::CAPS,
            Dialect::Mysql => &mysql::CAPS,
            Dialect::Sqlite => &sqlite::CAPS,
        }
    }

    /// Human-readable name, e.g. `PostgreSQL`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.caps().name
    }

    #[must_use]
    pub fn placeholder_style(self) -> PlaceholderStyle {
        self.caps().placeholder_style
    }

    #[must_use]
    pub fn supports_backslash_escape(self) -> bool {
        self.caps().supports_backslash_escape
    }

    #[must_use]
    pub fn id_retrieval(self) -> IdRetrieval {
        self.caps().id_retrieval
    }

    #[must_use]
    pub fn is_reserved(self, word: &str) -> bool {
        (self.caps().is_reserved)(word)
    }

    /// Placeholder for the 1-based `arg_index`-th argument: `$3` or `?`.
    #[must_use]
    pub fn placeholder(self, arg_index: usize) -> String {
        let mut out = String::new();
        self.write_placeholder(arg_index, &mut out);
        out
    }

    pub fn write_placeholder(self, arg_index: usize, out: &mut String) {
        (self.caps().write_placeholder)(arg_index, out);
    }

    #[must_use]
    pub fn escape_identifier(self, name: &str) -> Cow<'_, str> {
        crate::escape::escape_identifier(self, name)
    }

    #[must_use]
    pub fn generate_insert<S: AsRef<str>>(
        self,
        table: &str,
        columns: &[S],
        has_int_id: bool,
    ) -> GeneratedStatement {
        generate::generate_insert(self, table, columns, has_int_id)
    }

    #[must_use]
    pub fn generate_update<S: AsRef<str>>(self, table: &str, columns: &[S]) -> String {
        generate::generate_update(self, table, columns)
    }

    /// See [`translation::rewrite_named_query`].
    ///
    /// # Errors
    ///
    /// Returns `SqlPortableError::MissingParameter` for a `:name` with no entry in `params`.
    pub fn rewrite_named_query<P>(
        self,
        sql: &str,
        params: &P,
    ) -> Result<QueryAndParams<P::Value>, SqlPortableError>
    where
        P: NamedParams + ?Sized,
    {
        translation::rewrite_named_query(self, sql, params)
    }

    #[must_use]
    pub fn renumber_placeholders(self, where_clause: &str, offset: usize) -> String {
        placeholders::renumber_placeholders(self, where_clause, offset)
    }

    #[must_use]
    pub fn join_placeholders_for_in(self, offset: usize, count: usize) -> String {
        placeholders::join_placeholders_for_in(self, offset, count)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = SqlPortableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(SqlPortableError::UnsupportedDialect(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Dialect {
    type Error = SqlPortableError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Dialect::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| SqlPortableError::UnsupportedDialect(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Dialect::Postgres.to_string(), "PostgreSQL");
        assert_eq!(Dialect::Mysql.to_string(), "MySQL");
        assert_eq!(Dialect::Sqlite.to_string(), "SQLite");
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" mysql ".parse::<Dialect>().unwrap(), Dialect::Mysql);
        assert_eq!("sqlite3".parse::<Dialect>().unwrap(), Dialect::Sqlite);
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert_eq!(err, SqlPortableError::UnsupportedDialect("oracle".into()));
        assert!(err.to_string().contains("unsupported dialect"));

        assert_eq!(Dialect::try_from(1u8).unwrap(), Dialect::Mysql);
        assert!(matches!(
            Dialect::try_from(99u8),
            Err(SqlPortableError::UnsupportedDialect(_))
        ));
    }

    #[test]
    fn placeholders_per_dialect() {
        assert_eq!(Dialect::Postgres.placeholder(12), "$12");
        assert_eq!(Dialect::Mysql.placeholder(12), "?");
        assert_eq!(Dialect::Sqlite.placeholder(1), "?");
    }

    #[test]
    fn only_mysql_honors_backslashes() {
        assert!(Dialect::Mysql.supports_backslash_escape());
        assert!(!Dialect::Postgres.supports_backslash_escape());
        assert!(!Dialect::Sqlite.supports_backslash_escape());
    }

    #[test]
    fn id_retrieval_protocol() {
        assert_eq!(Dialect::Postgres.id_retrieval(), IdRetrieval::ReturningRow);
        assert_eq!(Dialect::Mysql.id_retrieval(), IdRetrieval::LastInsertId);
        assert_eq!(Dialect::Sqlite.id_retrieval(), IdRetrieval::LastInsertId);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Dialect::Postgres).unwrap();
        assert_eq!(json, "\"postgres\"");
        let parsed: Dialect = serde_json::from_str("\"postgresql\"").unwrap();
        assert_eq!(parsed, Dialect::Postgres);
    }
}
