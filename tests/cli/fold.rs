use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

const MENU_CPP: &str = r#"#include "cocos2d.h"
using namespace cocos2d;

void Menu::init() {
    auto bg = Color3B(255, 0, 128);
    auto tint = Color4B(0, 0, 0, 128);
    auto pos = Vec2(0.5f, 1.5f);
    auto size = Size(10, 20);
    auto label = Label::createWithTTF(TR("MENU_START"), "font.ttf", 24);
    auto dyn = Color3B(r, 0, 0);
}
"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("Classes/Menu.cpp", MENU_CPP)?;
    test.write_file(
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
fn test_fold_text_output() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.command().arg("fold"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Menu.cpp
      5:15  color   Color3B(255, 0, 128) → #ff0080
      6:17  color   Color4B(0, 0, 0, 128) → #000000 80
      7:16  vector  Vec2(0.5f, 1.5f) → [0.5; 1.5]
      8:17  size    Size(10, 20) → 10.0 × 20.0
      9:39  string  TR("MENU_START") → „Start“
    ✓ Folded 4 values and 1 string in 1 file

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_fold_uses_requested_locale() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(
        test.command().args(["fold", "--strings-only", "--locale", "de_DE"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Menu.cpp
      9:39  string  TR("MENU_START") → „Starten“
    ✓ Folded 0 values and 1 string in 1 file

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_fold_values_only() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.command().args(["fold", "--values-only"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Menu.cpp
      5:15  color   Color3B(255, 0, 128) → #ff0080
      6:17  color   Color4B(0, 0, 0, 128) → #000000 80
      7:16  vector  Vec2(0.5f, 1.5f) → [0.5; 1.5]
      8:17  size    Size(10, 20) → 10.0 × 20.0
    ✓ Folded 4 values and 0 strings in 1 file

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fold_signed_vector() -> Result<()> {
    let test = CliTest::with_file(
        "Classes/Move.cpp",
        "void f() {\n    auto v = Vec2(-1.0f, 2.0f);\n    auto c = Color3B(-1, 0, 0);\n}\n",
    )?;

    assert_cmd_snapshot!(test.command().arg("fold"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Classes/Move.cpp
      2:14  vector  Vec2(-1.0f, 2.0f) → [-1.0; 2.0]
    ✓ Folded 1 value and 0 strings in 1 file

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fold_json_output() -> Result<()> {
    let test = project()?;

    let run = test.run(&["fold", "--format", "json", "Classes"])?;
    assert_eq!(run.code, Some(0), "stderr: {}", run.stderr);

    let parsed: Value = serde_json::from_str(&run.stdout)?;
    assert_eq!(parsed["locale"], "en_US");

    let files = parsed["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "Classes/Menu.cpp");

    let folds = files[0]["folds"].as_array().unwrap();
    assert_eq!(folds.len(), 5);
    assert_eq!(folds[0]["type"], "value");
    assert_eq!(folds[0]["kind"], "color");
    assert_eq!(folds[0]["placeholder"], "#ff0080");
    assert_eq!(folds[0]["line"], 5);
    assert_eq!(folds[0]["column"], 15);

    let string = folds.iter().find(|f| f["type"] == "string").unwrap();
    assert_eq!(string["id"], "MENU_START");
    assert_eq!(string["text"], "Start");
    assert_eq!(string["source"], "TR(\"MENU_START\")");

    Ok(())
}

#[test]
fn test_fold_layout_file() -> Result<()> {
    let test = project()?;
    test.write_file(
        "Resources/layouts/menu.xml",
        "<Menu>\n  <Button title=\"MENU_QUIT\" image='quit.png'/>\n</Menu>\n",
    )?;

    assert_cmd_snapshot!(
        test.command().args(["fold", "Resources/layouts/menu.xml"]),
        @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    Resources/layouts/menu.xml
      2:17  string  "MENU_QUIT" → „Quit“
    ✓ Folded 0 values and 1 string in 1 file

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_fold_without_anything_to_fold() -> Result<()> {
    let test = CliTest::with_file("Classes/Empty.cpp", "int main() { return 0; }\n")?;

    assert_cmd_snapshot!(test.command().arg("fold"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Nothing to fold in 1 file

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_fold_long_text_is_shortened() -> Result<()> {
    let test = CliTest::with_file(
        "Classes/Intro.cpp",
        "void f() { show(\"INTRO\"); }\n",
    )?;
    test.write_file(
        "Resources/en.strings",
        "\"INTRO\" = \"Once upon a time there was a very long introduction text\";\n",
    )?;

    let run = test.run(&["fold", "--format", "json"])?;
    let parsed: Value = serde_json::from_str(&run.stdout)?;
    let fold = &parsed["files"][0]["folds"][0];

    let placeholder = fold["placeholder"].as_str().unwrap();
    assert!(placeholder.ends_with("[\u{2026}]\u{201C}"), "{}", placeholder);
    assert_eq!(
        fold["text"],
        "Once upon a time there was a very long introduction text"
    );

    Ok(())
}
