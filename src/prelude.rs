//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::dialect::{Dialect, DialectCaps, IdRetrieval, IdentityDefault, PlaceholderStyle};
pub use crate::error::SqlPortableError;
pub use crate::escape::escape_identifier;
pub use crate::generate::{GeneratedStatement, generate_insert, generate_update};
pub use crate::model::{
    DefaultNamingStrategy, FieldDef, FieldMap, Model, ModelRegistry, NamingStrategy,
    RegistryOptions, RegistryOptionsBuilder,
};
pub use crate::placeholders::{join_for_in, join_placeholders_for_in, renumber_placeholders};
pub use crate::translation::{NamedParams, rewrite_named_query};
pub use crate::types::{ParamMap, QueryAndParams, SqlValue};

pub use crate::params;
