use sql_portable::prelude::*;

const ORDER_COLUMNS: [&str; 4] = ["id", "user", "order", "total"];

fn placeholder_count(sql: &str) -> usize {
    sql.matches('?').count() + sql.matches('$').count()
}

#[test]
fn insert_per_dialect_with_reserved_names() {
    let pg = generate_insert(Dialect::Postgres, "orders", &ORDER_COLUMNS, true);
    assert_eq!(
        pg.sql,
        "INSERT INTO orders (id,\"user\",\"order\",total) VALUES (DEFAULT,$1,$2,$3) RETURNING id"
    );
    assert_eq!(pg.arg_columns, vec!["user", "order", "total"]);

    let my = generate_insert(Dialect::Mysql, "orders", &ORDER_COLUMNS, true);
    assert_eq!(
        my.sql,
        "INSERT INTO orders (user,`order`,total) VALUES (?,?,?)"
    );
    assert_eq!(my.arg_columns, vec!["user", "order", "total"]);

    let lite = generate_insert(Dialect::Sqlite, "orders", &ORDER_COLUMNS, true);
    assert_eq!(
        lite.sql,
        "INSERT INTO orders (id,user,\"order\",total) VALUES (NULL,?,?,?)"
    );
    assert_eq!(lite.arg_columns, vec!["user", "order", "total"]);
}

#[test]
fn placeholders_match_argument_columns() {
    for dialect in Dialect::ALL {
        for has_int_id in [true, false] {
            let stmt = generate_insert(dialect, "orders", &ORDER_COLUMNS, has_int_id);
            assert_eq!(
                placeholder_count(&stmt.sql),
                stmt.arg_columns.len(),
                "{dialect} has_int_id={has_int_id}: {}",
                stmt.sql
            );
        }
    }
}

#[test]
fn id_retrieval_follows_dialect() {
    assert_eq!(Dialect::Postgres.id_retrieval(), IdRetrieval::ReturningRow);
    assert_eq!(Dialect::Mysql.id_retrieval(), IdRetrieval::LastInsertId);
    assert_eq!(Dialect::Sqlite.id_retrieval(), IdRetrieval::LastInsertId);

    for dialect in [Dialect::Mysql, Dialect::Sqlite] {
        let stmt = generate_insert(dialect, "orders", &ORDER_COLUMNS, true);
        assert!(!stmt.sql.contains("RETURNING"));
    }
}

#[test]
fn update_per_dialect() {
    assert_eq!(
        generate_update(Dialect::Postgres, "orders", &ORDER_COLUMNS),
        "UPDATE orders SET id = $1,\"user\" = $2,\"order\" = $3,total = $4 WHERE "
    );
    assert_eq!(
        generate_update(Dialect::Mysql, "orders", &ORDER_COLUMNS),
        "UPDATE orders SET id = ?,user = ?,`order` = ?,total = ? WHERE "
    );
    assert_eq!(
        generate_update(Dialect::Sqlite, "orders", &ORDER_COLUMNS),
        "UPDATE orders SET id = ?,user = ?,\"order\" = ?,total = ? WHERE "
    );
}

#[test]
fn escaping_is_case_insensitive() {
    for dialect in Dialect::ALL {
        assert_ne!(escape_identifier(dialect, "Select"), "Select");
        assert_eq!(escape_identifier(dialect, "created_at"), "created_at");
    }
}

#[test]
fn generators_through_dialect_methods() {
    let columns = vec!["id".to_string(), "label".to_string()];
    let stmt = Dialect::Sqlite.generate_insert("tags", &columns, false);
    assert_eq!(stmt.sql, "INSERT INTO tags (id,label) VALUES (?,?)");
    assert_eq!(stmt.arg_columns, columns);
    assert_eq!(
        Dialect::Postgres.generate_update("tags", &columns),
        "UPDATE tags SET id = $1,\"label\" = $2 WHERE "
    );
}
