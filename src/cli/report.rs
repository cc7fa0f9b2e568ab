//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow cocolens to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::fold::FoldedFile;
use crate::core::{
    FoldKind,
    strings::{DirectorySummary, Resolved, quote},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const ARROW: &str = "\u{2192}"; // →

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

/// Collapse runs of whitespace so multi-line expressions print on one line.
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Print every fold, grouped by file, to stdout.
pub fn print_folds(files: &[FoldedFile]) {
    print_folds_to(files, &mut io::stdout().lock());
}

pub fn print_folds_to<W: Write>(files: &[FoldedFile], writer: &mut W) {
    for file in files.iter().filter(|f| !f.folds.is_empty()) {
        let locations: Vec<String> = file
            .folds
            .iter()
            .map(|fold| format!("{}:{}", fold.line, fold.column))
            .collect();
        let width = locations.iter().map(|l| l.width()).max().unwrap_or(0);

        let _ = writeln!(writer, "{}", file.path.bold());
        for (fold, location) in file.folds.iter().zip(&locations) {
            let label = match &fold.region.kind {
                FoldKind::Value { kind } => kind.to_string(),
                FoldKind::String { .. } => "string".to_string(),
            };
            let padding = " ".repeat(width - location.width());
            let _ = writeln!(
                writer,
                "  {}{}  {:<6}  {} {} {}",
                location.cyan(),
                padding,
                label,
                one_line(&fold.source).dimmed(),
                ARROW,
                fold.region.placeholder
            );
        }
    }
}

/// Print the closing summary line of `fold`.
pub fn print_fold_summary(files: &[FoldedFile]) {
    print_fold_summary_to(files, &mut io::stdout().lock());
}

pub fn print_fold_summary_to<W: Write>(files: &[FoldedFile], writer: &mut W) {
    let values: usize = files
        .iter()
        .map(|f| f.folds.iter().filter(|fold| fold.is_value()).count())
        .sum();
    let strings: usize = files.iter().map(|f| f.folds.len()).sum::<usize>() - values;

    let msg = if values + strings == 0 {
        format!(
            "Nothing to fold in {} {}",
            files.len(),
            plural(files.len(), "file", "files")
        )
    } else {
        format!(
            "Folded {} {} and {} {} in {} {}",
            values,
            plural(values, "value", "values"),
            strings,
            plural(strings, "string", "strings"),
            files.len(),
            plural(files.len(), "file", "files")
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about files that could not be read or parsed cleanly.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) had syntax errors or could not be read (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// Print the result of resolving one string ID.
pub fn print_lookup_to<W: Write>(
    id: &str,
    resolved: Option<&Resolved>,
    source: Option<&str>,
    writer: &mut W,
) {
    match resolved {
        Some(resolved) => {
            let _ = write!(
                writer,
                "{} {} = {}",
                SUCCESS_MARK.green(),
                id.bold(),
                quote(&resolved.text)
            );
            if let Some(source) = source {
                let _ = write!(writer, "  {}", format!("({})", source).dimmed());
            }
            let _ = writeln!(writer);
        }
        None => {
            let _ = writeln!(
                writer,
                "{} {} {}",
                FAILURE_MARK.red(),
                id.bold(),
                "not found".red()
            );
        }
    }
}

/// Print resource directories with the file chosen for the locale.
pub fn print_tables_to<W: Write>(
    locale: &str,
    tables: &[(String, &DirectorySummary, Option<String>)],
    writer: &mut W,
) {
    if tables.is_empty() {
        let _ = writeln!(
            writer,
            "{} No .strings files found",
            FAILURE_MARK.yellow()
        );
        return;
    }

    let _ = writeln!(writer, "Locale {}", locale.bold());
    for (directory, summary, source) in tables {
        let _ = writeln!(
            writer,
            "  {}  {} {}, {} {}",
            directory.cyan(),
            summary.files.len(),
            plural(summary.files.len(), "file", "files"),
            summary.entries,
            plural(summary.entries, "entry", "entries")
        );
        match source {
            Some(source) => {
                let _ = writeln!(writer, "    {} {}", ARROW, source);
            }
            None => {
                let _ = writeln!(writer, "    {} {}", ARROW, "no table".dimmed());
            }
        }
    }
}

/// Print a before/after view of a rewritten expression.
pub fn print_diff_to<W: Write>(location: &str, before: &str, after: &str, writer: &mut W) {
    let _ = writeln!(writer, "{}", location.bold());
    let _ = writeln!(writer, "  {} {}", "-".red(), one_line(before).red());
    let _ = writeln!(writer, "  {} {}", "+".green(), one_line(after).green());
}
