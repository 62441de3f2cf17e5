//! Printing generated commands.

use glue_core::{Command, SqlValue};
use serde::Serialize;

/// JSON shape of a printed command.
#[derive(Debug, Serialize)]
pub struct Rendered<'a> {
    /// SQL text.
    pub sql: &'a str,
    /// Bind arguments in placeholder order.
    pub args: &'a [SqlValue],
}

impl<'a> From<&'a Command> for Rendered<'a> {
    fn from(cmd: &'a Command) -> Self {
        Self {
            sql: cmd.sql(),
            args: cmd.args(),
        }
    }
}

/// Renders `cmd` as plain SQL, or as a JSON object when `json` is set.
///
/// Plain output appends the arguments as a trailing SQL comment so the text
/// stays runnable in a console.
///
/// # Errors
///
/// Fails only if the arguments cannot be serialized.
pub fn render(cmd: &Command, json: bool) -> serde_json::Result<String> {
    if json {
        return serde_json::to_string(&Rendered::from(cmd));
    }
    if cmd.args().is_empty() {
        return Ok(cmd.sql().to_string());
    }
    let args = serde_json::to_string(cmd.args())?;
    Ok(format!("{}\n-- args: {args}", cmd.sql()))
}
