//! Model descriptions and the per-model statement cache.
//!
//! Rust has no runtime reflection, so a model describes its fields through [`Model`]
//! and hands out its current values in declaration order.

use std::collections::HashMap;

use crate::dialect::Dialect;
use crate::error::SqlPortableError;
use crate::generate::{GeneratedStatement, generate_insert, generate_update};
use crate::types::SqlValue;

mod naming;
mod registry;

pub use naming::{DefaultNamingStrategy, NamingStrategy, to_snake_case};
pub use registry::{ModelRegistry, RegistryOptions, RegistryOptionsBuilder};

/// One field of a model, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Rust field name, fed to the naming strategy
    pub name: &'static str,
    /// Explicit column name that bypasses the naming strategy
    pub column: Option<&'static str>,
    /// Whether the field holds an integer (decides database-generated ids)
    pub is_integer: bool,
}

impl FieldDef {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            is_integer: false,
        }
    }

    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            column: None,
            is_integer: true,
        }
    }

    #[must_use]
    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = Some(column);
        self
    }
}

/// A record type that maps onto one table.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// struct User {
///     id: i64,
///     first_name: String,
/// }
///
/// impl Model for User {
///     fn type_name() -> &'static str {
///         "User"
///     }
///
///     fn fields() -> &'static [FieldDef] {
///         const FIELDS: &[FieldDef] = &[FieldDef::integer("id"), FieldDef::new("first_name")];
///         FIELDS
///     }
///
///     fn values(&self) -> Vec<SqlValue> {
///         vec![self.id.into(), self.first_name.as_str().into()]
///     }
/// }
/// ```
pub trait Model: 'static {
    /// Type name fed to the naming strategy, e.g. `UserProfile`.
    fn type_name() -> &'static str;

    fn fields() -> &'static [FieldDef];

    /// Current field values, same order as [`Model::fields`].
    fn values(&self) -> Vec<SqlValue>;
}

/// Everything derived from a model at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMap {
    pub table: String,
    pub columns_map: HashMap<String, usize>,
    pub column_keys: Vec<String>,
    pub has_int_id: bool,
    pub insert: GeneratedStatement,
    pub update_query: String,
    pub dialect: Dialect,
}

impl FieldMap {
    pub(crate) fn build<T: Model, N: NamingStrategy + ?Sized>(dialect: Dialect, naming: &N) -> Self {
        let mut columns_map = HashMap::new();
        let mut column_keys = Vec::with_capacity(T::fields().len());
        let mut has_int_id = false;

        for (i, field) in T::fields().iter().enumerate() {
            let column = field
                .column
                .map_or_else(|| naming.column_name(field.name), str::to_string);
            if column == "id" && field.is_integer {
                has_int_id = true;
            }
            columns_map.insert(column.clone(), i);
            column_keys.push(column);
        }

        let table = naming.table_name(T::type_name());
        let insert = generate_insert(dialect, &table, &column_keys, has_int_id);
        let update_query = generate_update(dialect, &table, &column_keys);

        Self {
            table,
            columns_map,
            column_keys,
            has_int_id,
            insert,
            update_query,
            dialect,
        }
    }

    /// Check that every column belongs to this model.
    ///
    /// # Errors
    ///
    /// Returns `SqlPortableError::InvalidColumn` for the first unknown column.
    pub fn validate_columns<S: AsRef<str>>(&self, columns: &[S]) -> Result<(), SqlPortableError> {
        for column in columns {
            let column: &str = column.as_ref();
            if !self.columns_map.contains_key(column) {
                return Err(SqlPortableError::InvalidColumn(column.to_string()));
            }
        }
        Ok(())
    }

    /// Values of `record` for `columns`, in that order.
    pub(crate) fn values_for<T: Model, S: AsRef<str>>(
        &self,
        record: &T,
        columns: &[S],
    ) -> Result<Vec<SqlValue>, SqlPortableError> {
        self.validate_columns(columns)?;
        let values = record.values();
        columns
            .iter()
            .map(|column| {
                let column: &str = column.as_ref();
                self.columns_map
                    .get(column)
                    .and_then(|&idx| values.get(idx))
                    .cloned()
                    .ok_or_else(|| SqlPortableError::InvalidColumn(column.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Product;

    impl Model for Product {
        fn type_name() -> &'static str {
            "Product"
        }

        fn fields() -> &'static [FieldDef] {
            const FIELDS: &[FieldDef] = &[
                FieldDef::new("id"),
                FieldDef::new("name"),
                FieldDef::integer("price").column("price_cents"),
            ];
            FIELDS
        }

        fn values(&self) -> Vec<SqlValue> {
            vec!["p-1".into(), "Widget".into(), SqlValue::Int(250)]
        }
    }

    #[test]
    fn string_id_is_not_generated() {
        let map = FieldMap::build::<Product, _>(Dialect::Sqlite, &DefaultNamingStrategy::default());
        assert!(!map.has_int_id);
        assert_eq!(map.table, "products");
        assert_eq!(map.column_keys, vec!["id", "name", "price_cents"]);
        assert_eq!(map.insert.arg_columns, vec!["id", "name", "price_cents"]);
        assert_eq!(
            map.insert.sql,
            "INSERT INTO products (id,name,price_cents) VALUES (?,?,?)"
        );
    }

    #[test]
    fn values_follow_requested_columns() {
        let map = FieldMap::build::<Product, _>(Dialect::Mysql, &DefaultNamingStrategy::default());
        let values = map.values_for(&Product, &["price_cents", "id"]).unwrap();
        assert_eq!(values, vec![SqlValue::Int(250), SqlValue::Text("p-1".into())]);

        let err = map.values_for(&Product, &["colour"]).unwrap_err();
        assert_eq!(err, SqlPortableError::InvalidColumn("colour".into()));
    }
}
