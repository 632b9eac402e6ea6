use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DefaultNamingStrategy, FieldMap, Model, NamingStrategy};
use crate::dialect::Dialect;
use crate::error::SqlPortableError;
use crate::translation::NamedParams;
use crate::types::{QueryAndParams, SqlValue};

const IDENTITY_COLUMN: &str = "id";

/// Options for a [`ModelRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Dialect used by [`ModelRegistry::register`]
    pub default_dialect: Option<Dialect>,
    /// Whether the default naming strategy pluralizes table names
    pub pluralize_tables: bool,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            default_dialect: None,
            pluralize_tables: true,
        }
    }
}

impl RegistryOptions {
    #[must_use]
    pub fn new(default_dialect: Dialect) -> Self {
        Self {
            default_dialect: Some(default_dialect),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pluralized_tables(mut self, pluralize_tables: bool) -> Self {
        self.pluralize_tables = pluralize_tables;
        self
    }

    /// Parse options from JSON such as `{"default_dialect": "postgres"}`.
    ///
    /// # Errors
    ///
    /// Returns `SqlPortableError::ConfigError` if the JSON is malformed or names an unknown
    /// dialect.
    pub fn from_json(json: &str) -> Result<Self, SqlPortableError> {
        serde_json::from_str(json)
            .map_err(|e| SqlPortableError::ConfigError(format!("invalid registry options: {e}")))
    }

    fn naming(&self) -> DefaultNamingStrategy {
        DefaultNamingStrategy {
            pluralize_tables: self.pluralize_tables,
        }
    }
}

/// Fluent builder for [`RegistryOptions`].
#[derive(Debug, Clone, Default)]
pub struct RegistryOptionsBuilder {
    opts: RegistryOptions,
}

impl RegistryOptionsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn default_dialect(mut self, dialect: Dialect) -> Self {
        self.opts.default_dialect = Some(dialect);
        self
    }

    #[must_use]
    pub fn pluralize_tables(mut self, pluralize_tables: bool) -> Self {
        self.opts.pluralize_tables = pluralize_tables;
        self
    }

    #[must_use]
    pub fn finish(self) -> RegistryOptions {
        self.opts
    }

    #[must_use]
    pub fn build(self) -> ModelRegistry {
        ModelRegistry::with_options(self.finish())
    }
}

/// Registered models and their cached statements.
///
/// Register every model during startup (`&mut self`), then share the registry read-only,
/// e.g. behind an `Arc`, for the lifetime of the process.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// struct Tag {
///     id: i64,
///     label: String,
/// }
///
/// impl Model for Tag {
///     fn type_name() -> &'static str {
///         "Tag"
///     }
///
///     fn fields() -> &'static [FieldDef] {
///         const FIELDS: &[FieldDef] = &[FieldDef::integer("id"), FieldDef::new("label")];
///         FIELDS
///     }
///
///     fn values(&self) -> Vec<SqlValue> {
///         vec![self.id.into(), self.label.as_str().into()]
///     }
/// }
///
/// let mut registry = ModelRegistry::builder().default_dialect(Dialect::Sqlite).build();
/// registry.register::<Tag>()?;
///
/// let insert = registry.insert_statement(&Tag { id: 0, label: "rust".into() })?;
/// assert_eq!(insert.query, "INSERT INTO tags (id,label) VALUES (NULL,?)");
/// assert_eq!(insert.params, vec![SqlValue::Text("rust".into())]);
/// # Ok::<(), SqlPortableError>(())
/// ```
#[derive(Debug, Default)]
pub struct ModelRegistry {
    options: RegistryOptions,
    models: HashMap<TypeId, Arc<FieldMap>>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            options,
            models: HashMap::new(),
        }
    }

    #[must_use]
    pub fn builder() -> RegistryOptionsBuilder {
        RegistryOptionsBuilder::new()
    }

    #[must_use]
    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Register `T` with the default dialect and naming strategy.
    ///
    /// # Errors
    ///
    /// Returns `SqlPortableError::ConfigError` if no default dialect was configured.
    pub fn register<T: Model>(&mut self) -> Result<Arc<FieldMap>, SqlPortableError> {
        let dialect = self.options.default_dialect.ok_or_else(|| {
            SqlPortableError::ConfigError(format!(
                "no dialect provided for {} and no default dialect set",
                T::type_name()
            ))
        })?;
        Ok(self.register_with::<T>(dialect))
    }

    pub fn register_with<T: Model>(&mut self, dialect: Dialect) -> Arc<FieldMap> {
        let naming = self.options.naming();
        self.register_with_naming::<T, _>(dialect, &naming)
    }

    pub fn register_with_naming<T, N>(&mut self, dialect: Dialect, naming: &N) -> Arc<FieldMap>
    where
        T: Model,
        N: NamingStrategy + ?Sized,
    {
        let field_map = Arc::new(FieldMap::build::<T, N>(dialect, naming));
        tracing::debug!(
            model = T::type_name(),
            table = %field_map.table,
            %dialect,
            has_int_id = field_map.has_int_id,
            "registered model"
        );
        if self
            .models
            .insert(TypeId::of::<T>(), Arc::clone(&field_map))
            .is_some()
        {
            tracing::warn!(model = T::type_name(), "model registered twice, replacing");
        }
        field_map
    }

    #[must_use]
    pub fn is_registered<T: Model>(&self) -> bool {
        self.models.contains_key(&TypeId::of::<T>())
    }

    /// # Errors
    ///
    /// Returns `SqlPortableError::UnregisteredModel` if `T` was never registered.
    pub fn field_map<T: Model>(&self) -> Result<&Arc<FieldMap>, SqlPortableError> {
        self.models
            .get(&TypeId::of::<T>())
            .ok_or_else(|| SqlPortableError::UnregisteredModel(T::type_name().to_string()))
    }

    /// # Errors
    ///
    /// Returns `SqlPortableError::UnregisteredModel` if `T` was never registered.
    pub fn dialect_for<T: Model>(&self) -> Result<Dialect, SqlPortableError> {
        Ok(self.field_map::<T>()?.dialect)
    }

    /// Rewrite a named query with the dialect `T` was registered with.
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredModel` or `MissingParameter`.
    pub fn rewrite_for<T, P>(
        &self,
        sql: &str,
        params: &P,
    ) -> Result<QueryAndParams<P::Value>, SqlPortableError>
    where
        T: Model,
        P: NamedParams + ?Sized,
    {
        self.dialect_for::<T>()?.rewrite_named_query(sql, params)
    }

    /// IN-list placeholders in the dialect `T` was registered with.
    ///
    /// # Errors
    ///
    /// Returns `SqlPortableError::UnregisteredModel` if `T` was never registered.
    pub fn join_for_in<T: Model>(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<String, SqlPortableError> {
        Ok(self.dialect_for::<T>()?.join_placeholders_for_in(offset, count))
    }

    /// The cached INSERT for `record` and the values of its bound columns.
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredModel`, or `InvalidColumn` if the model's values do not cover its
    /// fields.
    pub fn insert_statement<T: Model>(&self, record: &T) -> Result<QueryAndParams, SqlPortableError> {
        let field_map = self.field_map::<T>()?;
        let params = field_map.values_for(record, &field_map.insert.arg_columns)?;
        Ok(QueryAndParams::new(field_map.insert.sql.clone(), params))
    }

    /// Like [`ModelRegistry::insert_statement`] with `id` bound in the `id` slot instead of
    /// the record's own value, for models whose ids are supplied by the caller (UUIDs and
    /// other non-integer keys).
    ///
    /// # Errors
    ///
    /// Returns `UnregisteredModel`, or `InvalidColumn("id")` if the model has no bound `id`
    /// column (integer ids are generated by the database).
    pub fn insert_statement_with_id<T: Model>(
        &self,
        record: &T,
        id: impl Into<SqlValue>,
    ) -> Result<QueryAndParams, SqlPortableError> {
        let field_map = self.field_map::<T>()?;
        let arg_columns = &field_map.insert.arg_columns;
        let slot = arg_columns
            .iter()
            .position(|column| column == IDENTITY_COLUMN)
            .ok_or_else(|| SqlPortableError::InvalidColumn(IDENTITY_COLUMN.to_string()))?;

        let mut params = field_map.values_for(record, arg_columns)?;
        if let Some(value) = params.get_mut(slot) {
            *value = id.into();
        }
        Ok(QueryAndParams::new(field_map.insert.sql.clone(), params))
    }

    /// The cached UPDATE for `record` followed by `where_clause`.
    ///
    /// `where_clause` is written with its own placeholders starting at `$1` (or `?`);
    /// numbered placeholders are shifted past the SET list. The bound values are every
    /// column of `record` followed by `args`.
    ///
    /// # Errors
    ///
    /// Returns `MissingWhere` for an empty clause, `UnregisteredModel`, or `InvalidColumn`.
    pub fn update_statement<T: Model>(
        &self,
        record: &T,
        where_clause: &str,
        args: Vec<SqlValue>,
    ) -> Result<QueryAndParams, SqlPortableError> {
        if where_clause.trim().is_empty() {
            return Err(SqlPortableError::MissingWhere);
        }
        let field_map = self.field_map::<T>()?;
        let mut params = field_map.values_for(record, &field_map.column_keys)?;
        let offset = params.len();
        params.extend(args);

        let where_clause = field_map.dialect.renumber_placeholders(where_clause, offset);
        Ok(QueryAndParams::new(
            format!("{}{}", field_map.update_query, where_clause),
            params,
        ))
    }

    /// Like [`ModelRegistry::update_statement`] with a named-parameter WHERE clause.
    ///
    /// # Errors
    ///
    /// Returns `MissingWhere`, `UnregisteredModel`, `MissingParameter`, or `InvalidColumn`.
    pub fn update_named<T, P>(
        &self,
        record: &T,
        where_clause: &str,
        params: &P,
    ) -> Result<QueryAndParams, SqlPortableError>
    where
        T: Model,
        P: NamedParams<Value = SqlValue> + ?Sized,
    {
        if where_clause.trim().is_empty() {
            return Err(SqlPortableError::MissingWhere);
        }
        let (where_clause, args) = self.rewrite_for::<T, P>(where_clause, params)?.into_parts();
        self.update_statement(record, &where_clause, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDef;

    struct Account {
        id: i64,
        owner: String,
    }

    impl Model for Account {
        fn type_name() -> &'static str {
            "Account"
        }

        fn fields() -> &'static [FieldDef] {
            const FIELDS: &[FieldDef] = &[FieldDef::integer("id"), FieldDef::new("owner")];
            FIELDS
        }

        fn values(&self) -> Vec<SqlValue> {
            vec![SqlValue::Int(self.id), SqlValue::Text(self.owner.clone())]
        }
    }

    #[test]
    fn register_without_default_dialect_fails() {
        let mut registry = ModelRegistry::new();
        let err = registry.register::<Account>().unwrap_err();
        assert!(matches!(err, SqlPortableError::ConfigError(_)));
        assert!(!registry.is_registered::<Account>());
    }

    #[test]
    fn reregistering_replaces_dialect() {
        let mut registry = ModelRegistry::new();
        registry.register_with::<Account>(Dialect::Postgres);
        registry.register_with::<Account>(Dialect::Mysql);
        assert_eq!(registry.dialect_for::<Account>().unwrap(), Dialect::Mysql);
    }

    #[test]
    fn options_from_json() {
        let opts = RegistryOptions::from_json(r#"{"default_dialect": "sqlite"}"#).unwrap();
        assert_eq!(opts.default_dialect, Some(Dialect::Sqlite));
        assert!(opts.pluralize_tables);

        let err = RegistryOptions::from_json(r#"{"default_dialect": "oracle"}"#).unwrap_err();
        assert!(matches!(err, SqlPortableError::ConfigError(_)));
    }

    #[test]
    fn update_requires_where() {
        let mut registry = ModelRegistry::new();
        registry.register_with::<Account>(Dialect::Postgres);
        let account = Account {
            id: 1,
            owner: "ann".into(),
        };
        assert_eq!(
            registry.update_statement(&account, "  ", vec![]).unwrap_err(),
            SqlPortableError::MissingWhere
        );
    }
}
