use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const RECORD: &str = r#"{
  "certifications": [
    {"info": {"certNO": "C-1", "verifiedAt": null}},
    {"info": {"certNO": "C-2"}}
  ],
  "codes": {"123": "x"}
}"#;

#[test]
fn test_get_scalar() -> Result<()> {
    let test = CliTest::with_file("data.json", RECORD)?;

    assert_cmd_snapshot!(test.command().args(["get", "certifications[1].info.certNO"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    "C-2"

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_get_null_is_found() -> Result<()> {
    let test = CliTest::with_file("data.json", RECORD)?;

    assert_cmd_snapshot!(test.command().args(["get", "certifications[0].info.verifiedAt"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    null

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_get_subtree() -> Result<()> {
    let test = CliTest::with_file("data.json", RECORD)?;

    assert_cmd_snapshot!(test.command().args(["get", "certifications[1].info"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "certNO": "C-2"
    }

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_get_missing_path() -> Result<()> {
    let test = CliTest::with_file("data.json", RECORD)?;

    assert_cmd_snapshot!(test.command().args(["get", "certifications[5].info"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ No value at 'certifications[5].info'
    ");

    Ok(())
}

#[test]
fn test_get_digit_named_key_reads_as_index() -> Result<()> {
    let test = CliTest::with_file("data.json", RECORD)?;

    assert_cmd_snapshot!(test.command().args(["get", "codes.123"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ No value at 'codes.123'
    ");

    Ok(())
}
