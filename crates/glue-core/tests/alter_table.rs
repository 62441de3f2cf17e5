//! Tests for single-statement DDL: DROP TABLE, column changes, foreign keys,
//! index removal and key naming.

mod common;

use common::dialect;
use glue_core::{Engine, Field, ForeignKey};

#[test]
fn test_drop_table_quotes_per_engine() {
    let expected = [
        (Engine::MySql, "DROP TABLE `user`"),
        (Engine::Postgres, "DROP TABLE \"user\""),
        (Engine::Sqlite, "DROP TABLE \"user\""),
        (Engine::MsSql, "DROP TABLE [user]"),
        (Engine::Oracle, "DROP TABLE \"user\""),
    ];
    for (engine, sql) in expected {
        let cmd = dialect(engine).drop_table("user");
        assert_eq!(cmd.sql(), sql);
        assert!(cmd.args().is_empty());
    }
}

#[test]
fn test_drop_table_keeps_quoted_identifier() {
    assert_eq!(
        dialect(Engine::MySql).drop_table("`user`").sql(),
        "DROP TABLE `user`"
    );
}

#[test]
fn test_add_column() {
    let field = Field::new("age", "INT")
        .not_null()
        .default_value("18")
        .comment("years");
    assert_eq!(
        dialect(Engine::MySql).add_column("user", &field).sql(),
        "ALTER TABLE `user` ADD COLUMN `age` INT NOT NULL DEFAULT 18 COMMENT 'years'"
    );
}

#[test]
fn test_add_nullable_column() {
    assert_eq!(
        dialect(Engine::Postgres)
            .add_column("user", &Field::new("nick", "TEXT"))
            .sql(),
        "ALTER TABLE \"user\" ADD COLUMN \"nick\" TEXT NULL"
    );
}

#[test]
fn test_add_primary_column_is_never_auto_increment() {
    let field = Field::new("id", "BIGINT").primary().not_null();
    let sql = dialect(Engine::MySql).add_column("user", &field);
    assert!(!sql.sql().contains("AUTO_INCREMENT"));
}

#[test]
fn test_modify_column_renames() {
    let field = Field::new("full_name", "VARCHAR(512)").not_null();
    assert_eq!(
        dialect(Engine::MySql)
            .modify_column("user", "name", &field)
            .sql(),
        "ALTER TABLE `user` CHANGE COLUMN `name` `full_name` VARCHAR(512) NOT NULL"
    );
}

#[test]
fn test_drop_column() {
    assert_eq!(
        dialect(Engine::MsSql).drop_column("user", "age").sql(),
        "ALTER TABLE [user] DROP COLUMN [age]"
    );
}

#[test]
fn test_add_foreign_key() {
    let key = ForeignKey::new("fk_order_user", "user_id", "user", "id");
    assert_eq!(
        dialect(Engine::MySql).add_foreign_key("order", &key).sql(),
        "ALTER TABLE `order` ADD CONSTRAINT fk_order_user \
         FOREIGN KEY (`user_id`) REFERENCES `user` (`id`)"
    );
}

#[test]
fn test_remove_foreign_key() {
    assert_eq!(
        dialect(Engine::MySql)
            .remove_foreign_key("order", "fk_order_user")
            .sql(),
        "ALTER TABLE `order` DROP FOREIGN KEY fk_order_user"
    );
}

#[test]
fn test_remove_index() {
    assert_eq!(
        dialect(Engine::Postgres)
            .remove_index("order", "idx_user")
            .sql(),
        "ALTER TABLE \"order\" DROP INDEX \"idx_user\""
    );
}

#[test]
fn test_build_key_name() {
    let d = dialect(Engine::MySql);
    assert_eq!(
        d.build_key_name("idx", "order", &["user_id", "status"]),
        "idx_order_user_id_status"
    );
    assert_eq!(d.build_key_name("fk", "order", &["user_id"]), "fk_order_user_id");
    assert_eq!(d.build_key_name("uk", "t", &[]), "uk_t");
}

#[test]
fn test_default_values_keyword() {
    for engine in Engine::ALL {
        assert_eq!(dialect(engine).default_values(), "DEFAULT VALUES");
    }
}

#[test]
fn test_drop_table_escapes_wrapped_name_with_bare_delimiters() {
    let cmd = dialect(Engine::MySql).drop_table("`x` (`a` INT); DROP TABLE secrets; -- `");
    assert_eq!(
        cmd.sql(),
        "DROP TABLE ```x`` (``a`` INT); DROP TABLE secrets; -- ```"
    );
}

#[test]
fn test_column_names_cannot_close_quotes() {
    let field = Field::new("\"a\" INT, \"b\"", "TEXT");
    assert_eq!(
        dialect(Engine::Postgres).add_column("t", &field).sql(),
        "ALTER TABLE \"t\" ADD COLUMN \"\"\"a\"\" INT, \"\"b\"\"\" TEXT NULL"
    );
}
