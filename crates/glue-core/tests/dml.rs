//! Tests for INSERT, UPDATE, DELETE and SELECT generation from records,
//! including placeholder numbering and NULL conditions.

mod common;

use common::{dialect, sql};
use glue_core::{Engine, Record, SqlValue};

#[test]
fn test_mysql_insert() {
    let record = Record::new("user").value("name", "Alice").value("age", 30_i64);
    let cmd = dialect(Engine::MySql).insert(&record).unwrap();
    assert_eq!(cmd.sql(), "INSERT INTO `user` (`name`, `age`) VALUES (?, ?)");
    assert_eq!(
        cmd.args(),
        &[SqlValue::Text("Alice".into()), SqlValue::Int(30)]
    );
}

#[test]
fn test_oracle_insert_numbers_placeholders() {
    let record = Record::new("user").value("name", "Bob").value("age", 41_i64);
    assert_eq!(
        sql(dialect(Engine::Oracle).insert(&record)),
        "INSERT INTO \"user\" (\"name\", \"age\") VALUES (:1, :2)"
    );
}

#[test]
fn test_insert_without_values_uses_default_values() {
    for engine in Engine::ALL {
        let d = dialect(engine);
        let cmd = d.insert(&Record::new("audit")).unwrap();
        assert_eq!(
            cmd.sql(),
            format!("INSERT INTO {} DEFAULT VALUES", d.quote("audit"))
        );
        assert!(cmd.args().is_empty());
    }
}

#[test]
fn test_insert_binds_null_values() {
    let record = Record::new("user").value("nick", None::<String>);
    let cmd = dialect(Engine::Sqlite).insert(&record).unwrap();
    assert_eq!(cmd.sql(), "INSERT INTO \"user\" (\"nick\") VALUES (?)");
    assert_eq!(cmd.args(), &[SqlValue::Null]);
}

#[test]
fn test_postgres_update_continues_numbering_into_where() {
    let record = Record::new("user")
        .value("name", "Carol")
        .value("age", 25_i64)
        .filter("id", 9_i64)
        .filter("deleted_at", SqlValue::Null)
        .filter("tenant", 2_i64);
    let cmd = dialect(Engine::Postgres).update(&record).unwrap();
    assert_eq!(
        cmd.sql(),
        "UPDATE \"user\" SET \"name\" = $1, \"age\" = $2 \
         WHERE \"id\" = $3 AND \"deleted_at\" IS NULL AND \"tenant\" = $4"
    );
    assert_eq!(
        cmd.args(),
        &[
            SqlValue::Text("Carol".into()),
            SqlValue::Int(25),
            SqlValue::Int(9),
            SqlValue::Int(2),
        ]
    );
}

#[test]
fn test_update_without_conditions_has_no_where() {
    let record = Record::new("user").value("active", false);
    assert_eq!(
        sql(dialect(Engine::MySql).update(&record)),
        "UPDATE `user` SET `active` = ?"
    );
}

#[test]
fn test_update_without_values_yields_none() {
    let record = Record::new("user").filter("id", 1_i64);
    assert!(dialect(Engine::MySql).update(&record).is_none());
}

#[test]
fn test_delete() {
    let record = Record::new("user").filter("id", 1_i64);
    let cmd = dialect(Engine::MsSql).delete(&record).unwrap();
    assert_eq!(cmd.sql(), "DELETE FROM [user] WHERE [id] = @p1");
    assert_eq!(cmd.args(), &[SqlValue::Int(1)]);
}

#[test]
fn test_delete_without_conditions_yields_none() {
    for engine in Engine::ALL {
        assert!(dialect(engine).delete(&Record::new("user")).is_none());
    }
}

#[test]
fn test_select_all_columns() {
    assert_eq!(
        sql(dialect(Engine::MySql).select(&Record::new("user"))),
        "SELECT * FROM `user`"
    );
}

#[test]
fn test_select_columns_with_filter() {
    let record = Record::new("user")
        .columns(&["id", "name"])
        .filter("id", 5_i64);
    let cmd = dialect(Engine::MsSql).select(&record).unwrap();
    assert_eq!(cmd.sql(), "SELECT [id], [name] FROM [user] WHERE [id] = @p1");
    assert_eq!(cmd.args(), &[SqlValue::Int(5)]);
}

#[test]
fn test_select_null_condition_binds_nothing() {
    let record = Record::new("user").column("id").filter("email", SqlValue::Null);
    let cmd = dialect(Engine::Postgres).select(&record).unwrap();
    assert_eq!(
        cmd.sql(),
        "SELECT \"id\" FROM \"user\" WHERE \"email\" IS NULL"
    );
    assert!(cmd.args().is_empty());
}

#[test]
fn test_values_never_appear_in_sql() {
    let payload = "'; DROP TABLE user; --";
    let record = Record::new("user").value("name", payload).filter("name", payload);
    for engine in Engine::ALL {
        let cmd = dialect(engine).update(&record).unwrap();
        assert!(!cmd.sql().contains(payload));
        assert_eq!(cmd.args().len(), 2);
    }
}

#[test]
fn test_empty_table_yields_none() {
    let record = Record::default().value("a", 1_i64).filter("b", 2_i64);
    let d = dialect(Engine::MySql);
    assert!(d.insert(&record).is_none());
    assert!(d.update(&record).is_none());
    assert!(d.delete(&record).is_none());
    assert!(d.select(&record).is_none());
}
