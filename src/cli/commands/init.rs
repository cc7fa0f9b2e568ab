use std::{fs, path::Path};

use anyhow::Result;
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

/// Writes the default `.cocolensrc.json` into the working directory and
/// lists the settings that decide what gets scanned.
pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    let defaults = Config::default();
    println!("  resource roots:  {}", defaults.resource_roots.join(", "));
    println!("  sources:         {}", defaults.source_extensions.join(", "));
    println!("  layouts:         {}", defaults.layout_extensions.join(", "));
    println!("  locale:          from LC_ALL, LC_MESSAGES or LANG");

    Ok(ExitStatus::Success)
}
