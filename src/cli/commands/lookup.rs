use std::io;

use anyhow::Result;

use super::super::{args::LookupCommand, exit_status::ExitStatus, report};
use crate::core::context::ProjectContext;

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let cache = ctx.resource_cache()?;

    let mut missing = 0;
    let mut out = io::stdout().lock();
    for id in &cmd.ids {
        let resolved = cache.resolve(id);
        if resolved.is_none() {
            missing += 1;
        }
        let source = resolved
            .as_ref()
            .and_then(|r| r.file.as_deref())
            .map(|file| ctx.display_path(file));
        report::print_lookup_to(id, resolved.as_ref(), source.as_deref(), &mut out);
    }

    if missing > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
