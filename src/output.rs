use anyhow::{Context, Result};
use console::style;
use serde_json::Value;

use crate::registry::{self, MethodSpec};

/// Helper: coloured method names so the listing is easy to scan.
fn name(s: &str) -> console::StyledObject<&str> {
  style(s).bold().cyan()
}

/// Prints every registered method with its signature and description.
pub fn print_listing() {
  println!("{}", style("Available methods:").bold());
  for spec in registry::METHODS {
    let args = registry::signature(spec);
    if args.is_empty() {
      println!("  {}", name(spec.name));
    } else {
      println!("  {} {}", name(spec.name), style(args).dim());
    }
    println!("      {}", spec.description);
  }
}

/// Echoes which method is about to run, mirroring the listing format.
pub fn print_invocation(spec: &MethodSpec) {
  println!("{} {}", name("Executing:"), spec.name);
  println!("{} {}", name("Description:"), spec.description);
}

/// Pretty-prints the JSON response with two-space indentation.
pub fn print_result(value: &Value) -> Result<()> {
  serde_json::to_string_pretty(value)
    .map(|s| println!("{s}"))
    .context("Failed to serialize the response to JSON")
}
