//! Loading table definitions from JSON files.

use std::fs;
use std::path::Path;

use anyhow::Context;
use glue_core::Definition;
use tracing::debug;

/// Reads and parses the serde form of a [`Definition`].
///
/// # Errors
///
/// Fails when the file cannot be read or is not a valid definition.
pub fn load_definition(path: &Path) -> anyhow::Result<Definition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition file '{}'", path.display()))?;
    let definition: Definition = serde_json::from_str(&text)
        .with_context(|| format!("Invalid definition in '{}'", path.display()))?;
    debug!(
        path = %path.display(),
        table = %definition.table,
        fields = definition.fields.len(),
        "Loaded definition"
    );
    Ok(definition)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use glue_core::{IndexType, Strategy};
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_definition() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "table": "user",
                "strategy": "auto_increment",
                "fields": [
                    {{"column": "id", "sql_type": "BIGINT", "is_primary": true, "not_null": true}},
                    {{"column": "email", "sql_type": "VARCHAR(255)"}}
                ],
                "primary_keys": ["id"],
                "indexes": {{
                    "uk_email": [{{"name": "uk_email", "column": "email", "type": "unique"}}]
                }}
            }}"#
        )
        .unwrap();

        let definition = load_definition(file.path()).unwrap();
        assert_eq!(definition.table, "user");
        assert_eq!(definition.strategy, Strategy::AutoIncrement);
        assert_eq!(definition.fields.len(), 2);
        assert!(!definition.fields[1].not_null);
        assert_eq!(definition.indexes["uk_email"][0].index_type, IndexType::Unique);
    }

    #[test]
    fn test_load_definition_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_definition(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read definition file"));
    }

    #[test]
    fn test_load_definition_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"fields\": 3}}").unwrap();
        let err = load_definition(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid definition"));
    }
}
