use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use super::super::{
    args::{FoldCommand, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::core::{
    context::ProjectContext,
    document::{Document, LocatedFold},
};

/// Folds found in one file.
#[derive(Debug, Serialize)]
pub struct FoldedFile {
    pub path: String,
    pub folds: Vec<LocatedFold>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_errors: bool,
}

#[derive(Serialize)]
struct FoldOutput<'a> {
    locale: &'a str,
    files: &'a [FoldedFile],
}

pub fn fold(cmd: FoldCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let cache = ctx.resource_cache()?;
    let cancel = ctx.cancel_token();
    let width = ctx.config.preview_width;

    let scan = ctx.files(&cmd.paths);
    let files: Vec<(PathBuf, _)> = scan
        .files
        .into_iter()
        .filter_map(|path| ctx.document_kind(&path).map(|kind| (path, kind)))
        .collect();

    let results: Vec<Result<FoldedFile>> = files
        .par_iter()
        .map(|(path, kind)| {
            let document = Document::load(path, *kind)?;
            let mut folds = document.fold(cache, width, cancel)?;
            folds.retain(|fold| {
                if cmd.values_only {
                    fold.is_value()
                } else if cmd.strings_only {
                    !fold.is_value()
                } else {
                    true
                }
            });
            Ok(FoldedFile {
                path: path.to_string_lossy().into_owned(),
                folds,
                has_errors: document.has_errors,
            })
        })
        .collect();

    let mut folded = Vec::with_capacity(results.len());
    let mut problem_count = scan.skipped_count;
    for result in results {
        match result {
            Ok(mut file) => {
                if file.has_errors {
                    problem_count += 1;
                    if ctx.verbose {
                        eprintln!("Note: {} has syntax errors", file.path);
                    }
                }
                file.path = ctx.display_path(Path::new(&file.path));
                folded.push(file);
            }
            Err(err) => {
                problem_count += 1;
                if ctx.verbose {
                    eprintln!("Error: {:#}", err);
                }
            }
        }
    }

    match cmd.format {
        OutputFormat::Json => {
            let output = FoldOutput {
                locale: ctx.locale.tag(),
                files: &folded,
            };
            let json = serde_json::to_string_pretty(&output).context("Failed to serialize folds")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            report::print_folds(&folded);
            report::print_fold_summary(&folded);
            report::print_parse_warning(problem_count, ctx.verbose);
        }
    }

    Ok(ExitStatus::Success)
}
