//! Table and JSON output formatting, plus alert rendering.

use serde::Serialize;
use tabled::{Table, Tabled};

use reelhub_entity::alert::{Alert, Severity};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Symbol for an alert severity.
fn severity_symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Danger => "✗",
    }
}

/// Render the visible alerts in insertion order.
///
/// Each line carries the index used by the `dismiss <n>` command, the
/// manual-dismiss affordance of the rendered queue.
pub fn render_alerts(alerts: &[Alert]) {
    for (index, alert) in alerts.iter().enumerate() {
        if alert.is_visible() {
            println!(
                "[{}] {} {}: {}",
                index,
                severity_symbol(alert.severity),
                alert.heading,
                alert.message
            );
        }
    }
}
