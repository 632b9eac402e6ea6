//! Dialect-portable SQL rewriting.
//!
//! Write a query once with `:name` parameters and let the engine produce the
//! PostgreSQL (`$1`), MySQL (`?`) or SQLite (`?`) form with its argument list. The same
//! dialect handles identifier escaping, INSERT/UPDATE generation, WHERE renumbering and
//! IN-list placeholders.
//!
//! ```rust
//! use sql_portable::prelude::*;
//!
//! let rewritten = rewrite_named_query(
//!     Dialect::Mysql,
//!     "SELECT * FROM users WHERE name = :name AND created::date > :since",
//!     &params! { "name" => "ann", "since" => "2024-01-01" },
//! )?;
//! assert_eq!(rewritten.query, "SELECT * FROM users WHERE name = ? AND created::date > ?");
//! assert_eq!(rewritten.params.len(), 2);
//! # Ok::<(), SqlPortableError>(())
//! ```

pub mod dialect;
pub mod error;
pub mod escape;
pub mod generate;
mod macros;
pub mod model;
pub mod placeholders;
pub mod prelude;
mod reserved;
pub mod translation;
pub mod types;

pub use dialect::Dialect;
pub use error::SqlPortableError;
pub use escape::escape_identifier;
pub use generate::{GeneratedStatement, generate_insert, generate_update};
pub use model::{Model, ModelRegistry};
pub use placeholders::{join_for_in, join_placeholders_for_in, renumber_placeholders};
pub use translation::{NamedParams, rewrite_named_query};
pub use types::{ParamMap, QueryAndParams, SqlValue};
