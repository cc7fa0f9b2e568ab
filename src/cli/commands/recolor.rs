use std::{fs, io};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::RecolorCommand,
    exit_status::ExitStatus,
    report::{self, FAILURE_MARK, SUCCESS_MARK},
};
use crate::core::{
    ValueKind, classify_and_extract,
    context::ProjectContext,
    document::{Document, DocumentKind},
    syntax::{LineIndex, Span, edit::SourceBuffer},
    values::{Color, color_from_arguments, write_color},
};

pub fn recolor(cmd: RecolorCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let color = Color::parse_hex(&cmd.color)?;

    let document = Document::load(&cmd.file, DocumentKind::Source)?;
    let content = &document.content;
    let index = LineIndex::new(content);
    let location = format!("{}:{}", ctx.display_path(&cmd.file), cmd.line);

    let Some(line_start) = index.offset(content, cmd.line, 1) else {
        anyhow::bail!("{} has no line {}", cmd.file.display(), cmd.line);
    };
    let target = cmd
        .column
        .and_then(|column| index.offset(content, cmd.line, column));

    // Smallest literal color covering the column, or the first one starting on the line.
    let mut candidates: Vec<(Span, _)> = document
        .elements
        .iter()
        .filter_map(|element| {
            let matched = classify_and_extract(element)?;
            (matched.kind == ValueKind::Color).then(|| (element.span(), matched.arguments))
        })
        .filter(|(span, _)| match target {
            Some(offset) => span.contains(offset),
            None => index.line(span.start) == cmd.line && span.start >= line_start,
        })
        .collect();
    candidates.sort_by_key(|(span, _)| match target {
        Some(_) => (span.len(), span.start),
        None => (span.start, span.len()),
    });

    let Some((span, arguments)) = candidates.into_iter().next() else {
        println!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("No literal Color3B/Color4B at {}", location).red()
        );
        return Ok(ExitStatus::Failure);
    };

    if let Some(current) = color_from_arguments(&arguments) {
        tracing::debug!(from = %current, to = %color, "recoloring");
    }

    let mut buffer = SourceBuffer::new(content.as_str());
    let written = write_color(&mut buffer, &arguments, color);
    if written == 0 {
        println!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("Could not rewrite the color at {}", location).red()
        );
        return Ok(ExitStatus::Failure);
    }

    let grown = buffer.text().len() as isize - content.len() as isize;
    let new_end = (span.end as isize + grown) as usize;
    let before = &content[span.start..span.end];
    let after = &buffer.text()[span.start..new_end];
    let mut out = io::stdout().lock();
    report::print_diff_to(&location, before, after, &mut out);
    drop(out);

    if cmd.apply {
        fs::write(&cmd.file, buffer.text())
            .with_context(|| format!("Failed to write {}", cmd.file.display()))?;
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Recolored {} ({} {} updated)",
                location,
                written,
                if written == 1 { "channel" } else { "channels" }
            )
            .green()
        );
    } else {
        println!("Run with {} to write the change", "--apply".cyan());
    }

    Ok(ExitStatus::Success)
}
