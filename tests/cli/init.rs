use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .flatkeyrc.json

    ----- stderr -----
    ");
    assert!(test.root().join(".flatkeyrc.json").exists());

    let content = test.read_file(".flatkeyrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["input"], "data.json");
    assert_eq!(parsed["output"], "translation.csv");
    assert_eq!(parsed["builtinTranslations"], true);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".flatkeyrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ .flatkeyrc.json already exists
    ");
    assert_eq!(test.read_file(".flatkeyrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["report", "preview", "get", "translate", "init"] {
        assert!(stdout.contains(command), "missing {}", command);
    }

    Ok(())
}
