use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_tables_lists_chosen_files() -> Result<()> {
    let test = CliTest::with_file(
        "Resources/strings/en.strings",
        "\"A\" = \"a\";\n\"B\" = \"b\";\n",
    )?;
    test.write_file("Resources/strings/de.strings", "\"A\" = \"ä\";\n")?;
    test.write_file("Resources/extra/ja.strings", "\"C\" = \"c\";\n")?;

    assert_cmd_snapshot!(test.command().args(["tables", "--locale", "de_DE"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Locale de_DE
      Resources/extra  1 file, 1 entry
        → ja.strings
      Resources/strings  2 files, 1 entry
        → de.strings

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_tables_without_resources() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("tables"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✘ No .strings files found

    ----- stderr -----
    ");

    Ok(())
}
