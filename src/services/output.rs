//! JSON/text output helpers for the usage listings.

use crate::domain::models::JsonOut;
use serde::Serialize;

/// Prints one listing either as pretty JSON wrapped in the `{ok, data}`
/// envelope or as human-readable text produced by `render`.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}
