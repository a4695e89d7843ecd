use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, TEMP_DIR_FILTER};

#[test]
fn test_translate_paths() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().args(["translate", "product.category[0]", "unknownField.name"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    product.category[0]	产品.类别[0]
    unknownField.name	unknownField.名称

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_with_extra_table() -> Result<()> {
    let test = CliTest::with_file("names.json", r#"{"name": "名字", "sku": "货号"}"#)?;

    assert_cmd_snapshot!(test.command().args(["translate", "org.name", "sku", "--translations", "names.json"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    org.name	组织.名字
    sku	货号

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_translate_invalid_table_fails() -> Result<()> {
    let test = CliTest::with_file("names.json", r#"{"name": 1}"#)?;

    insta::with_settings!({ filters => vec![TEMP_DIR_FILTER] }, {
        assert_cmd_snapshot!(test.command().args(["translate", "name", "--translations", "names.json"]), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse translation file: "[TEMP_DIR]/names.json": Translation for 'name' must be a string, found 1
        "#);
    });

    Ok(())
}
