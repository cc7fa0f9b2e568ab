use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "Resources/strings/en.strings",
        "\"MENU_START\" = \"Start\";\n\"MENU_QUIT\" = \"Quit\";\n",
    )?;
    test.write_file(
        "Resources/strings/de.strings",
        "\"MENU_START\" = \"Starten\";\n",
    )?;
    Ok(test)
}

#[test]
fn test_lookup_found() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.command().args(["lookup", "MENU_START", "MENU_QUIT"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ MENU_START = „Start“  (Resources/strings/en.strings)
    ✓ MENU_QUIT = „Quit“  (Resources/strings/en.strings)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_missing_id_fails() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.command().args(["lookup", "MENU_START", "NOPE"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ MENU_START = „Start“  (Resources/strings/en.strings)
    ✘ NOPE not found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_uses_one_table_per_directory() -> Result<()> {
    let test = project()?;

    // de.strings is chosen for the directory, so en.strings is not consulted.
    assert_cmd_snapshot!(
        test.command()
            .args(["lookup", "--locale", "de_AT", "MENU_START", "MENU_QUIT"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ MENU_START = „Starten“  (Resources/strings/de.strings)
    ✘ MENU_QUIT not found

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_english() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.command().args(["lookup", "--locale", "fr_FR", "MENU_QUIT"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ MENU_QUIT = „Quit“  (Resources/strings/en.strings)

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_lookup_locale_from_environment() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(
        test.command()
            .env("LANG", "de_DE.UTF-8")
            .args(["lookup", "MENU_START"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ MENU_START = „Starten“  (Resources/strings/de.strings)

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_lookup_with_config_resource_roots() -> Result<()> {
    let test = CliTest::with_file(".cocolensrc.json", r#"{"resourceRoots": ["Assets/text"]}"#)?;
    test.write_file("Assets/text/en.strings", "\"HELLO\" = \"Hi\";\n")?;
    test.write_file("Resources/en.strings", "\"HELLO\" = \"Ignored\";\n")?;

    assert_cmd_snapshot!(test.command().args(["lookup", "HELLO"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ HELLO = „Hi“  (Assets/text/en.strings)

    ----- stderr -----
    ");

    Ok(())
}
