//! INSERT and UPDATE statement generation.
//!
//! The two generators number placeholders differently on purpose: INSERT counts only the
//! columns it binds (the identity column does not take a slot), UPDATE numbers by column
//! position.

use crate::dialect::{Dialect, IdentityDefault};

const IDENTITY_COLUMN: &str = "id";

/// A generated statement and the columns whose values must be bound, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStatement {
    pub sql: String,
    pub arg_columns: Vec<String>,
}

/// Build `INSERT INTO <table> (<columns>) VALUES (<placeholders>)` for `dialect`.
///
/// With `has_int_id`, the `id` column is left to the database: PostgreSQL writes `DEFAULT`,
/// SQLite writes `NULL`, MySQL drops the column from the statement. Without it, `id` is
/// bound like any other column. PostgreSQL statements end in ` RETURNING id`.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// let stmt = generate_insert(Dialect::Postgres, "users", &["id", "first_name"], true);
/// assert_eq!(stmt.sql, "INSERT INTO users (id,first_name) VALUES (DEFAULT,$1) RETURNING id");
/// assert_eq!(stmt.arg_columns, vec!["first_name"]);
/// ```
#[must_use]
pub fn generate_insert<S: AsRef<str>>(
    dialect: Dialect,
    table: &str,
    columns: &[S],
    has_int_id: bool,
) -> GeneratedStatement {
    let caps = dialect.caps();
    let is_generated_id = |column: &str| has_int_id && column == IDENTITY_COLUMN;

    let mut names = Vec::with_capacity(columns.len());
    let mut values = Vec::with_capacity(columns.len());
    let mut arg_columns = Vec::with_capacity(columns.len());

    for column in columns {
        let column: &str = column.as_ref();
        if is_generated_id(column) {
            match caps.identity_default {
                IdentityDefault::Keyword(keyword) => {
                    names.push(dialect.escape_identifier(column));
                    values.push(keyword.to_string());
                }
                IdentityDefault::Omitted => {}
            }
            continue;
        }

        names.push(dialect.escape_identifier(column));
        arg_columns.push(column.to_string());
        values.push(dialect.placeholder(arg_columns.len()));
    }

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({}){}",
        dialect.escape_identifier(table),
        names.join(","),
        values.join(","),
        caps.insert_suffix,
    );

    tracing::debug!(%dialect, table, sql = %sql, "generated insert statement");
    GeneratedStatement { sql, arg_columns }
}

/// Build `UPDATE <table> SET <col> = <ph>,... WHERE ` with the predicate left to the caller.
///
/// Placeholders follow column positions, identity column included.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// let sql = generate_update(Dialect::Postgres, "users", &["id", "email"]);
/// assert_eq!(sql, "UPDATE users SET id = $1,email = $2 WHERE ");
/// ```
#[must_use]
pub fn generate_update<S: AsRef<str>>(dialect: Dialect, table: &str, columns: &[S]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            format!(
                "{} = {}",
                dialect.escape_identifier(column.as_ref()),
                dialect.placeholder(i + 1)
            )
        })
        .collect();

    let sql = format!(
        "UPDATE {} SET {} WHERE ",
        dialect.escape_identifier(table),
        assignments.join(",")
    );

    tracing::debug!(%dialect, table, sql = %sql, "generated update statement");
    sql
}
