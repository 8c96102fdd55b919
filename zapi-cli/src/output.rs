//! JSON output helpers for the zapi CLI.

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

/// Render a JSON value with the given indent width
pub fn render_json(value: &Value, indent: usize) -> Result<String> {
  let indent_bytes = vec![b' '; indent];
  let formatter = PrettyFormatter::with_indent(&indent_bytes);
  let mut buf = Vec::new();
  let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
  value.serialize(&mut serializer)?;
  Ok(String::from_utf8(buf)?)
}

/// Print a JSON value to stdout with the given indent width
#[allow(clippy::print_stdout, reason = "printing the payload is the command's output")]
pub fn print_json(value: &Value, indent: usize) -> Result<()> {
  println!("{}", render_json(value, indent)?);
  Ok(())
}
