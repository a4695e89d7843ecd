use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use serde_json::Value;

use super::{
    args::{CommonArgs, TableArgs},
    report::print_note,
};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{
        KeyTranslator, TranslationTable,
        parsers::json::{load_document, load_translation_table},
    },
};

/// Configuration and working directory shared by all commands.
///
/// Command-line values win over the config file. Paths given on the command
/// line are relative to the working directory, paths from the config file are
/// relative to the directory holding it.
pub struct RunContext {
    pub loaded: ConfigLoadResult,
    pub cwd: PathBuf,
    pub verbose: bool,
}

impl RunContext {
    pub fn new(verbose: bool) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let loaded = load_config(&cwd)?;

        match &loaded.path {
            Some(path) => print_note(verbose, &format!("using config {}", path.display())),
            None => print_note(verbose, "no config file found, using defaults"),
        }

        Ok(Self {
            loaded,
            cwd,
            verbose,
        })
    }

    pub fn input_path(&self, args: &CommonArgs) -> PathBuf {
        match &args.input {
            Some(input) => self.cwd.join(input),
            None => self.loaded.resolve(&self.loaded.config.input),
        }
    }

    pub fn output_path(&self, output: Option<&Path>) -> PathBuf {
        match output {
            Some(output) => self.cwd.join(output),
            None => self.loaded.resolve(&self.loaded.config.output),
        }
    }

    /// Path as shown to the user: relative to the working directory when possible.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.cwd)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    /// Build the translator from the built-in dictionary and any extra file.
    pub fn translator(&self, args: &TableArgs) -> Result<KeyTranslator> {
        let config = &self.loaded.config;
        let mut table = if config.builtin_translations && !args.no_builtin {
            TranslationTable::builtin()
        } else {
            TranslationTable::new()
        };

        let extra = match (&args.translations, &config.translation_file) {
            (Some(path), _) => Some(self.cwd.join(path)),
            (None, Some(path)) => Some(self.loaded.resolve(path)),
            (None, None) => None,
        };
        if let Some(path) = extra {
            let loaded = load_translation_table(&path)?;
            print_note(
                self.verbose,
                &format!(
                    "loaded {} translations from {}",
                    loaded.len(),
                    self.display_path(&path)
                ),
            );
            table = table.merge(loaded);
        }

        print_note(
            self.verbose,
            &format!("translation table has {} entries", table.len()),
        );
        Ok(KeyTranslator::new(table))
    }

    pub fn load_document(&self, path: &Path) -> Result<Value> {
        print_note(
            self.verbose,
            &format!("reading {}", self.display_path(path)),
        );
        load_document(path)
    }
}
