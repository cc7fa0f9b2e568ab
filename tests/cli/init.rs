use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .cocolensrc.json
      resource roots:  Resources
      sources:         cpp, cc, cxx, c, h, hpp, hh, inl, mm
      layouts:         xml
      locale:          from LC_ALL, LC_MESSAGES or LANG

    ----- stderr -----
    ");

    assert!(test.root().join(".cocolensrc.json").exists());

    let content = test.read_file(".cocolensrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["resourceRoots"], serde_json::json!(["Resources"]));
    assert_eq!(parsed["previewWidth"], 48);
    assert!(parsed.get("sourceExtensions").is_some());
    assert!(parsed.get("locale").is_none(), "unset locale is not written");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".cocolensrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .cocolensrc.json already exists
    ");
    assert_eq!(test.read_file(".cocolensrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".cocolensrc.json", r#"{"previewWidth": 0}"#)?;

    assert_cmd_snapshot!(test.command().arg("tables"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: 'previewWidth' must be greater than 0
    ");

    Ok(())
}
