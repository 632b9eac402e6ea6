use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

mod parsers;
mod scanner;

use parsers::{is_type_cast, scan_param_name};
pub(crate) use scanner::LiteralTracker;

use crate::dialect::Dialect;
use crate::error::SqlPortableError;
use crate::types::QueryAndParams;

/// A source of named parameter values.
///
/// Implemented for `HashMap` and `BTreeMap` keyed by anything that borrows as `str`, so
/// both `ParamMap` and ad-hoc maps like `HashMap<&str, i64>` work.
pub trait NamedParams {
    type Value: Clone;

    fn lookup(&self, name: &str) -> Option<&Self::Value>;
}

impl<K, V, S> NamedParams for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<K, V> NamedParams for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Clone,
{
    type Value = V;

    fn lookup(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<P: NamedParams + ?Sized> NamedParams for &P {
    type Value = P::Value;

    fn lookup(&self, name: &str) -> Option<&P::Value> {
        (**self).lookup(name)
    }
}

/// Rewrite `:name` parameters into the dialect's positional placeholders.
///
/// The scan copies quoted literals (`'...'`, `"..."`, `` `...` ``) through untouched,
/// honoring doubled-quote escapes and, for MySQL, backslash escapes inside `'` and `"`
/// literals. `::` casts and colons not followed by a letter or `_` are kept as-is. Every
/// occurrence of a name takes a fresh placeholder, so repeated names repeat their value.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// let params = params! { "id" => 42 };
/// let rewritten = rewrite_named_query(
///     Dialect::Postgres,
///     "SELECT * FROM users WHERE id = :id OR parent_id = :id",
///     &params,
/// )?;
/// assert_eq!(rewritten.query, "SELECT * FROM users WHERE id = $1 OR parent_id = $2");
/// assert_eq!(rewritten.params, vec![SqlValue::Int(42), SqlValue::Int(42)]);
/// # Ok::<(), SqlPortableError>(())
/// ```
///
/// # Errors
///
/// Returns `SqlPortableError::MissingParameter` naming the first token with no entry in
/// `params`; nothing partial is returned.
pub fn rewrite_named_query<P>(
    dialect: Dialect,
    sql: &str,
    params: &P,
) -> Result<QueryAndParams<P::Value>, SqlPortableError>
where
    P: NamedParams + ?Sized,
{
    let chars: Vec<char> = sql.chars().collect();
    let mut out = String::with_capacity(sql.len());
    let mut args = Vec::new();
    let mut tracker = LiteralTracker::new(dialect.supports_backslash_escape());
    let mut idx = 0;

    while idx < chars.len() {
        if let Some(consumed) = tracker.step(&chars, idx) {
            out.extend(&chars[idx..idx + consumed]);
            idx += consumed;
            continue;
        }

        let c = chars[idx];
        if c != ':' {
            out.push(c);
            idx += 1;
            continue;
        }

        if is_type_cast(&chars, idx) {
            out.push_str("::");
            idx += 2;
            continue;
        }

        match scan_param_name(&chars, idx) {
            Some(end) => {
                let name: String = chars[idx + 1..end].iter().collect();
                let value = params
                    .lookup(&name)
                    .ok_or(SqlPortableError::MissingParameter(name))?;
                args.push(value.clone());
                dialect.write_placeholder(args.len(), &mut out);
                idx = end;
            }
            None => {
                out.push(':');
                idx += 1;
            }
        }
    }

    tracing::trace!(dialect = %dialect, args = args.len(), "rewrote named query");
    Ok(QueryAndParams::new(out, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParamMap, SqlValue};

    fn pg(sql: &str, params: &ParamMap) -> QueryAndParams {
        rewrite_named_query(Dialect::Postgres, sql, params).unwrap()
    }

    #[test]
    fn basic_per_dialect() {
        let params: ParamMap = [("id".to_string(), SqlValue::Int(1))].into();
        let sql = "SELECT * FROM users WHERE id = :id";

        assert_eq!(pg(sql, &params).query, "SELECT * FROM users WHERE id = $1");
        for dialect in [Dialect::Mysql, Dialect::Sqlite] {
            let res = rewrite_named_query(dialect, sql, &params).unwrap();
            assert_eq!(res.query, "SELECT * FROM users WHERE id = ?");
            assert_eq!(res.params, vec![SqlValue::Int(1)]);
        }
    }

    #[test]
    fn escaped_quotes_in_literals() {
        let params: ParamMap = [("id".to_string(), SqlValue::Int(1))].into();
        let res = pg("WHERE name = 'it''s :val' AND id = :id", &params);
        assert_eq!(res.query, "WHERE name = 'it''s :val' AND id = $1");
        assert_eq!(res.params.len(), 1);
    }

    #[test]
    fn backslash_depends_on_dialect() {
        let params: HashMap<&str, i64> = [("id", 7)].into();
        let sql = r"SELECT 'a\' :skip' AS s, :id";

        let res = rewrite_named_query(Dialect::Mysql, sql, &params).unwrap();
        assert_eq!(res.query, r"SELECT 'a\' :skip' AS s, ?");
        assert_eq!(res.params, vec![7]);

        // Without backslash escapes the literal closes at `\'`, exposing `:skip`.
        let err = rewrite_named_query(Dialect::Postgres, sql, &params).unwrap_err();
        assert_eq!(err, SqlPortableError::MissingParameter("skip".into()));
    }

    #[test]
    fn identifiers_are_skipped() {
        let params: BTreeMap<String, i64> = [("id".to_string(), 3)].into();
        let res = rewrite_named_query(
            Dialect::Mysql,
            "SELECT `a:b`, \"c:d\" FROM t WHERE id = :id",
            &params,
        )
        .unwrap();
        assert_eq!(res.query, "SELECT `a:b`, \"c:d\" FROM t WHERE id = ?");
        assert_eq!(res.params, vec![3]);
    }

    #[test]
    fn chained_casts() {
        let params: ParamMap = [("val".to_string(), SqlValue::Text("123".into()))].into();
        assert_eq!(
            pg("SELECT :val::numeric::text", &params).query,
            "SELECT $1::numeric::text"
        );

        let sql = "SELECT name::text FROM users";
        assert_eq!(pg(sql, &ParamMap::new()).query, sql);
    }

    #[test]
    fn bare_colons() {
        let empty = ParamMap::new();
        for sql in ["SELECT 1 : 2", "SELECT 1:", "SELECT :1abc", ":"] {
            let res = pg(sql, &empty);
            assert_eq!(res.query, sql);
            assert!(res.params.is_empty());
        }
    }

    #[test]
    fn multibyte_text_survives() {
        let params: HashMap<&str, &str> = [("név", "x")].into();
        let res =
            rewrite_named_query(Dialect::Postgres, "SELECT 'é:x', :név, 'ü'", &params).unwrap();
        assert_eq!(res.query, "SELECT 'é:x', $1, 'ü'");
        assert_eq!(res.params, vec!["x"]);
    }

    #[test]
    fn unterminated_literal_is_copied() {
        let res = pg("SELECT 'open :id", &ParamMap::new());
        assert_eq!(res.query, "SELECT 'open :id");
        assert!(res.params.is_empty());
    }
}
