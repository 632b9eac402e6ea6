/// Build a [`ParamMap`](crate::ParamMap) from `name => value` pairs.
///
/// Values go through `SqlValue::from`, so integers, strings, booleans, timestamps and
/// `Option`s of those can be used directly.
///
/// ```rust
/// use sql_portable::prelude::*;
///
/// let params = params! { "id" => 7, "email" => "a@b.c", "deleted_at" => None::<i64> };
/// assert_eq!(params["id"], SqlValue::Int(7));
/// assert!(params["deleted_at"].is_null());
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::ParamMap::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ParamMap::new();
        $(
            map.insert(::std::string::String::from($name), $crate::SqlValue::from($value));
        )+
        map
    }};
}
