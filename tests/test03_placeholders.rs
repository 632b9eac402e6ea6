use sql_portable::prelude::*;

#[test]
fn where_clause_follows_set_list() {
    let columns = ["id", "email", "last_login"];
    let update = generate_update(Dialect::Postgres, "users", &columns);
    let where_clause = renumber_placeholders(
        Dialect::Postgres,
        "id = $1 AND email <> $2",
        columns.len(),
    );
    assert_eq!(
        format!("{update}{where_clause}"),
        "UPDATE users SET id = $1,email = $2,last_login = $3 WHERE id = $4 AND email <> $5"
    );
}

#[test]
fn renumber_without_placeholders_or_offset() {
    for dialect in Dialect::ALL {
        assert_eq!(renumber_placeholders(dialect, "deleted = false", 7), "deleted = false");
    }
    assert_eq!(
        renumber_placeholders(Dialect::Postgres, "id = $1", 0),
        "id = $1"
    );
}

#[test]
fn renumber_skips_dollar_literals() {
    assert_eq!(
        renumber_placeholders(Dialect::Postgres, "price = '$12' AND id = $2", 10),
        "price = '$12' AND id = $12"
    );
}

#[test]
fn in_list_after_existing_arguments() -> Result<(), SqlPortableError> {
    let ids = [4_i64, 8, 15];
    let prefix = rewrite_named_query(
        Dialect::Postgres,
        "SELECT * FROM users WHERE org_id = :org AND id IN (",
        &params! { "org" => 1 },
    )?;
    let list = join_placeholders_for_in(Dialect::Postgres, prefix.params.len(), ids.len());
    assert_eq!(
        format!("{}{list})", prefix.query),
        "SELECT * FROM users WHERE org_id = $1 AND id IN ($2,$3,$4)"
    );

    let list = join_placeholders_for_in(Dialect::Sqlite, prefix.params.len(), ids.len());
    assert_eq!(list, "?,?,?");
    Ok(())
}

#[test]
fn empty_in_list() {
    for dialect in Dialect::ALL {
        assert_eq!(join_placeholders_for_in(dialect, 3, 0), "");
    }
    assert_eq!(join_for_in(&[]), "");
}

#[test]
fn literal_in_list() {
    assert_eq!(join_for_in(&[3, 1, 2]), "3,1,2");
}

#[test]
fn dialect_lookup_by_name_and_index() {
    assert_eq!("postgresql".parse::<Dialect>(), Ok(Dialect::Postgres));
    assert_eq!("MySQL".parse::<Dialect>(), Ok(Dialect::Mysql));
    assert_eq!(Dialect::try_from(2u8), Ok(Dialect::Sqlite));
    assert_eq!(
        "oracle".parse::<Dialect>(),
        Err(SqlPortableError::UnsupportedDialect("oracle".into()))
    );
    assert_eq!(Dialect::Sqlite.to_string(), "SQLite");
    assert_eq!(Dialect::Postgres.placeholder_style(), PlaceholderStyle::Numbered);
    assert_eq!(Dialect::Mysql.placeholder_style(), PlaceholderStyle::Positional);
}
