//! `flatkey init`: write a starter `.flatkeyrc.json` in the working directory.
//!
//! The file holds every default (`data.json` in, `translation.csv` out, built-in
//! dictionary on), so editing one field is enough to retarget a project.

use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
};

use anyhow::{Context, Result};

use super::super::{
    exit_status::ExitStatus,
    report::{print_failure, print_success},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Never overwrites: an existing config is a failure, not an error.
pub fn init() -> Result<ExitStatus> {
    let content = default_config_json()?;

    let mut file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(CONFIG_FILE_NAME)
    {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            print_failure(&format!("{} already exists", CONFIG_FILE_NAME));
            return Ok(ExitStatus::Failure);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create {}", CONFIG_FILE_NAME));
        }
    };
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    print_success(&format!("Created {}", CONFIG_FILE_NAME));
    Ok(ExitStatus::Success)
}
