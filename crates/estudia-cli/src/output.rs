//! Command output in the requested format.
//!
//! JSON goes through serde; text layouts are small enough that each command
//! renders its own.

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text()),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    let rendered = render(value, format, text)?;
    println!("{rendered}");
    Ok(())
}
