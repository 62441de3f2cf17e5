#![allow(dead_code)]

use glue_core::{
    Command, Definition, Dialect, Engine, Field, ForeignKey, Index, IndexType, Strategy,
};

pub const DATABASE: &str = "shop";

pub fn dialect(engine: Engine) -> Box<dyn Dialect> {
    engine.dialect(DATABASE)
}

/// `user(id BIGINT PK NOT NULL, name VARCHAR(255))`, engine-generated keys.
pub fn user_definition() -> Definition {
    Definition::new("user")
        .model("User")
        .strategy(Strategy::AutoIncrement)
        .field(Field::new("id", "BIGINT").primary().not_null())
        .field(Field::new("name", "VARCHAR(255)"))
        .primary_key("id")
}

/// An order table with a composite primary key, two index groups and a
/// foreign key to `user`.
pub fn order_definition() -> Definition {
    Definition::new("order")
        .field(Field::new("shop_id", "BIGINT").primary().not_null())
        .field(Field::new("order_no", "VARCHAR(32)").primary().not_null())
        .field(Field::new("user_id", "BIGINT").not_null())
        .field(
            Field::new("status", "INT")
                .not_null()
                .default_value("0")
                .comment("order status"),
        )
        .primary_key("shop_id")
        .primary_key("order_no")
        .index(Index::new("idx_user_status", "user_id", IndexType::Normal))
        .index(Index::new("idx_user_status", "status", IndexType::Normal))
        .index(Index::new("uk_order_no", "order_no", IndexType::Unique))
        .foreign_key(ForeignKey::new("fk_order_user", "user_id", "user", "id"))
}

pub fn sql(cmd: Option<Command>) -> String {
    cmd.map(|cmd| cmd.sql().to_string())
        .unwrap_or_else(|| panic!("Expected a command, got None"))
}
