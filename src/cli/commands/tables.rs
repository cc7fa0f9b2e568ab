use std::io;

use anyhow::Result;

use super::super::{args::TablesCommand, exit_status::ExitStatus, report};
use crate::core::context::ProjectContext;

pub fn tables(cmd: TablesCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let cache = ctx.resource_cache()?;

    let summaries = cache.directories();
    let rows: Vec<_> = summaries
        .iter()
        .map(|summary| {
            let source = summary.source.as_deref().map(|file| {
                file.file_name()
                    .map_or_else(|| ctx.display_path(file), |name| name.to_string_lossy().into_owned())
            });
            (ctx.display_path(&summary.directory), summary, source)
        })
        .collect();

    report::print_tables_to(ctx.locale.tag(), &rows, &mut io::stdout().lock());
    Ok(ExitStatus::Success)
}
