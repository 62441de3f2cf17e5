//! Table definition model consumed by DDL generation.
//!
//! A [`Definition`] arrives fully resolved from the schema layer: column
//! names, engine type strings, nullability, defaults and comments are all
//! final. Generation reads it and never changes it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How primary-key values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The engine generates keys; the first primary column is marked
    /// auto-incrementing.
    AutoIncrement,
    /// Keys are supplied by the application.
    #[default]
    External,
}

/// Kind of an index group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexType {
    /// Plain index.
    #[default]
    Normal,
    /// Unique index.
    Unique,
    /// Full-text index.
    FullText,
    /// Spatial index.
    Spatial,
}

impl IndexType {
    /// Keyword emitted before `INDEX`, if any.
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Unique => Some("UNIQUE"),
            Self::FullText => Some("FULLTEXT"),
            Self::Spatial => Some("SPATIAL"),
        }
    }
}

/// A resolved column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Field {
    /// Declared name in the source model.
    #[serde(default)]
    pub name: String,
    /// Column name in the database.
    pub column: String,
    /// Engine type, e.g. `VARCHAR(255)`.
    pub sql_type: String,
    /// Whether the column belongs to the primary key.
    #[serde(default)]
    pub is_primary: bool,
    /// Whether the column rejects NULL.
    #[serde(default)]
    pub not_null: bool,
    /// Pre-formatted SQL literal, inserted verbatim after `DEFAULT`.
    #[serde(default)]
    pub default: Option<String>,
    /// Column comment; empty means none.
    #[serde(default)]
    pub comment: String,
}

impl Field {
    /// Creates a nullable, non-primary field whose declared name equals the
    /// column name.
    #[must_use]
    pub fn new(column: impl Into<String>, sql_type: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            name: column.clone(),
            column,
            sql_type: sql_type.into(),
            ..Self::default()
        }
    }

    /// Sets the declared (model) name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the field as part of the primary key.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Marks the field NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Sets the default literal. The caller is responsible for escaping.
    #[must_use]
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    /// Sets the column comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// One column of a named index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    /// Index name shared by every column of the group.
    pub name: String,
    /// Indexed column.
    pub column: String,
    /// Index kind.
    #[serde(default, rename = "type")]
    pub index_type: IndexType,
}

impl Index {
    /// Creates an index entry.
    #[must_use]
    pub fn new(name: impl Into<String>, column: impl Into<String>, index_type: IndexType) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            index_type,
        }
    }
}

/// One member of a named foreign-key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,
    /// Local column.
    pub column: String,
    /// Referenced table.
    pub table: String,
    /// Referenced column.
    pub reference: String,
}

impl ForeignKey {
    /// Creates a foreign-key entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        column: impl Into<String>,
        table: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            column: column.into(),
            table: table.into(),
            reference: reference.into(),
        }
    }
}

/// A fully resolved table.
///
/// Index and foreign-key groups are keyed by name in a sorted map, so DDL
/// lists them in name order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Definition {
    /// Table name.
    pub table: String,
    /// Type name of the model the table was resolved from.
    #[serde(default)]
    pub model: Option<String>,
    /// Primary-key generation policy.
    #[serde(default)]
    pub strategy: Strategy,
    /// Columns in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Primary-key columns in key order.
    #[serde(default)]
    pub primary_keys: Vec<String>,
    /// Index groups by name.
    #[serde(default)]
    pub indexes: BTreeMap<String, Vec<Index>>,
    /// Foreign-key groups by name.
    #[serde(default)]
    pub foreign_keys: BTreeMap<String, Vec<ForeignKey>>,
}

impl Definition {
    /// Creates an empty definition for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Records the source model type name.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the primary-key strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a primary-key column.
    #[must_use]
    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_keys.push(column.into());
        self
    }

    /// Adds an index entry to the group named by `index.name`.
    #[must_use]
    pub fn index(mut self, index: Index) -> Self {
        self.indexes
            .entry(index.name.clone())
            .or_default()
            .push(index);
        self
    }

    /// Adds a foreign-key entry to the group named by `key.name`.
    #[must_use]
    pub fn foreign_key(mut self, key: ForeignKey) -> Self {
        self.foreign_keys
            .entry(key.name.clone())
            .or_default()
            .push(key);
        self
    }

    /// Returns true when there is nothing to generate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
