use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const SCENE_CPP: &str = "void Scene::init() {
    auto bg = Color3B(255, 0, 128);
    auto tint = Color4B(1, 2, 3, 4); auto fg = Color3B(9, 9, 9);
    auto dyn = Color3B(r, g, b);
}
";

#[test]
fn test_recolor_dry_run_leaves_file() -> Result<()> {
    let test = CliTest::with_file("Classes/Scene.cpp", SCENE_CPP)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["recolor", "Classes/Scene.cpp", "--line", "2", "--color", "#00ff00"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Scene.cpp:2
      - Color3B(255, 0, 128)
      + Color3B(0, 255, 0)
    Run with --apply to write the change

    ----- stderr -----
    "
    );

    assert_eq!(test.read_file("Classes/Scene.cpp")?, SCENE_CPP);

    Ok(())
}

#[test]
fn test_recolor_apply_writes_file() -> Result<()> {
    let test = CliTest::with_file("Classes/Scene.cpp", SCENE_CPP)?;

    assert_cmd_snapshot!(
        test.command().args([
            "recolor",
            "Classes/Scene.cpp",
            "--line",
            "2",
            "--color",
            "0a0b0c",
            "--apply",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Scene.cpp:2
      - Color3B(255, 0, 128)
      + Color3B(10, 11, 12)
    ✓ Recolored Classes/Scene.cpp:2 (3 channels updated)

    ----- stderr -----
    "
    );

    let content = test.read_file("Classes/Scene.cpp")?;
    assert!(content.contains("auto bg = Color3B(10, 11, 12);"));
    assert!(content.contains("Color4B(1, 2, 3, 4)"));

    Ok(())
}

#[test]
fn test_recolor_column_picks_color_on_line() -> Result<()> {
    let test = CliTest::with_file("Classes/Scene.cpp", SCENE_CPP)?;

    // Column 50 is inside the second color on line 3.
    assert_cmd_snapshot!(
        test.command().args([
            "recolor",
            "Classes/Scene.cpp",
            "--line",
            "3",
            "--column",
            "50",
            "--color",
            "#10203040",
            "--apply",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Scene.cpp:3
      - Color3B(9, 9, 9)
      + Color3B(16, 32, 48)
    ✓ Recolored Classes/Scene.cpp:3 (3 channels updated)

    ----- stderr -----
    "
    );

    let content = test.read_file("Classes/Scene.cpp")?;
    assert!(content.contains("Color4B(1, 2, 3, 4); auto fg = Color3B(16, 32, 48);"));

    Ok(())
}

#[test]
fn test_recolor_alpha_channel() -> Result<()> {
    let test = CliTest::with_file("Classes/Scene.cpp", SCENE_CPP)?;

    assert_cmd_snapshot!(
        test.command().args([
            "recolor",
            "Classes/Scene.cpp",
            "--line",
            "3",
            "--color",
            "#10203040",
            "--apply",
        ]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Scene.cpp:3
      - Color4B(1, 2, 3, 4)
      + Color4B(16, 32, 48, 64)
    ✓ Recolored Classes/Scene.cpp:3 (4 channels updated)

    ----- stderr -----
    "
    );

    let content = test.read_file("Classes/Scene.cpp")?;
    assert!(content.contains("Color3B(9, 9, 9)"));

    Ok(())
}

#[test]
fn test_recolor_column_past_line_end_stays_on_line() -> Result<()> {
    let test = CliTest::with_file(
        "Classes/Scene.cpp",
        "void f() {\n    int unused = 0;\nColor3B(1, 2, 3);\n}\n",
    )?;

    assert_cmd_snapshot!(
        test.command()
            .args(["recolor", "Classes/Scene.cpp", "--line", "2", "--column", "999", "--color", "#000000"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ No literal Color3B/Color4B at Classes/Scene.cpp:2

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_recolor_non_literal_color_fails() -> Result<()> {
    let test = CliTest::with_file("Classes/Scene.cpp", SCENE_CPP)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["recolor", "Classes/Scene.cpp", "--line", "4", "--color", "#000000"]),
        @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ No literal Color3B/Color4B at Classes/Scene.cpp:4

    ----- stderr -----
    "
    );
    assert_eq!(test.read_file("Classes/Scene.cpp")?, SCENE_CPP);

    Ok(())
}

#[test]
fn test_recolor_invalid_color_is_an_error() -> Result<()> {
    let test = CliTest::with_file("Classes/Scene.cpp", SCENE_CPP)?;

    assert_cmd_snapshot!(
        test.command()
            .args(["recolor", "Classes/Scene.cpp", "--line", "2", "--color", "green"]),
        @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid color 'green': expected #rrggbb or #rrggbbaa
    "
    );

    Ok(())
}
