use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".flatkeyrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Extra translations layered over the built-in dictionary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_file: Option<String>,
    #[serde(default = "default_builtin_translations")]
    pub builtin_translations: bool,
}

fn default_input() -> String {
    "data.json".to_string()
}

fn default_output() -> String {
    "translation.csv".to_string()
}

fn default_builtin_translations() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            translation_file: None,
            builtin_translations: default_builtin_translations(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a path is empty or the output would overwrite the input.
    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            bail!("'input' must not be empty");
        }
        if self.output.trim().is_empty() {
            bail!("'output' must not be empty");
        }
        if let Some(file) = &self.translation_file
            && file.trim().is_empty()
        {
            bail!("'translationFile' must not be empty");
        }
        if Path::new(&self.input) == Path::new(&self.output) {
            bail!(
                "'output' must differ from 'input' (both are \"{}\")",
                self.input
            );
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file that was read, `None` when using defaults.
    pub path: Option<PathBuf>,
    /// Directory relative paths in the config are resolved against.
    pub root: PathBuf,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
                root,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
            root: start_dir.to_path_buf(),
        }),
    }
}
