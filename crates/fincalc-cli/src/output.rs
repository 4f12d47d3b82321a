//! Output formatting utilities.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;
use crate::context::Context;

/// A key-value pair for display.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Inputs echoed back and the results computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    title: &'static str,
    inputs: Vec<KeyValue>,
    results: Vec<KeyValue>,
    sentence: Option<String>,
}

impl Report {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            inputs: Vec::new(),
            results: Vec::new(),
            sentence: None,
        }
    }

    #[must_use]
    pub fn input(mut self, key: &str, value: impl Into<String>) -> Self {
        self.inputs.push(KeyValue::new(key, value));
        self
    }

    #[must_use]
    pub fn result(mut self, key: &str, value: impl Into<String>) -> Self {
        self.results.push(KeyValue::new(key, value));
        self
    }

    /// A full sentence the menu prints instead of the result rows.
    #[must_use]
    pub fn sentence(mut self, sentence: impl Into<String>) -> Self {
        self.sentence = Some(sentence.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn results(&self) -> &[KeyValue] {
        &self.results
    }

    /// The first result, printed alone in minimal mode.
    pub fn primary(&self) -> Option<&KeyValue> {
        self.results.first()
    }

    fn rows(&self) -> Vec<KeyValue> {
        let mut rows = self.inputs.clone();
        if !rows.is_empty() && !self.results.is_empty() {
            rows.push(KeyValue::new("", "")); // Separator
        }
        rows.extend(self.results.iter().cloned());
        rows
    }

    /// Writes the results as sentences, the way the menu reports them.
    pub fn write_prose<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        if let Some(sentence) = &self.sentence {
            return writeln!(out, "{sentence}");
        }
        for row in self.results() {
            writeln!(out, "{}: {}", row.key, row.value)?;
        }
        Ok(())
    }
}

/// Prints a report in the selected format. Minimal output is the primary
/// result alone.
pub fn print_report(report: &Report, ctx: &Context) -> anyhow::Result<()> {
    if ctx.format == OutputFormat::Minimal {
        if let Some(primary) = report.primary() {
            println!("{}", primary.value);
        }
        return Ok(());
    }
    print_key_values(report.title(), &report.rows(), ctx)
}

/// Prints rows as a table, a JSON object, CSV, or `key=value` lines.
///
/// Blank separator rows only appear in tables.
pub fn print_key_values(title: &str, rows: &[KeyValue], ctx: &Context) -> anyhow::Result<()> {
    let keyed = rows.iter().filter(|r| !r.key.is_empty());

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header(title);
            }
            print_table(rows);
        }
        OutputFormat::Json => {
            let output: serde_json::Map<String, serde_json::Value> = keyed
                .map(|r| (r.key.clone(), serde_json::Value::String(r.value.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in keyed {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for row in keyed {
                println!("{}={}", row.key, row.value);
            }
        }
    }
    Ok(())
}

fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Formats a rate fraction as a percentage.
pub fn format_percent(rate: f64, precision: usize) -> String {
    format!("{:.prec$}%", rate * 100.0, prec = precision)
}

/// Formats a currency amount.
pub fn format_money(value: f64, precision: usize) -> String {
    if value < 0.0 {
        format!("-${:.prec$}", -value, prec = precision)
    } else {
        format!("${:.prec$}", value, prec = precision)
    }
}

/// Formats a plain number.
pub fn format_number(value: f64, precision: usize) -> String {
    format!("{:.prec$}", value, prec = precision)
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
