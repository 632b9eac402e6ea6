use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SqlPortableError {
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error("unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("invalid column that is not found in the model: {0}")]
    InvalidColumn(String),

    #[error(
        "non registered model {0} used. Register it with `ModelRegistry::register_with::<{0}>(dialect)` before use"
    )]
    UnregisteredModel(String),

    #[error("parameter 'where' was not present")]
    MissingWhere,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
