use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TABLE: &str = "translation/translations.json";

#[test]
fn test_missing_language_key() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"greeting": "Hi"}, "fr": {}}"#)?;
    test.write_file("index.html", r#"<button id="greeting">Hi</button>"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert_eq!(
        out.stdout,
        "Translation check result
------------------------
Languages found: en, fr
Total translation keys (union): 1
Unique DOM ids detected in HTML/JS: 1

Missing keys by language:
 - en: 0 missing
 - fr: 1 missing
    greeting

No unused translation keys detected.

\u{2718} Checked 1 source file (strict mode) - 1 missing, 0 not in table, 0 unused
"
    );
    Ok(())
}

#[test]
fn test_clean_site() -> Result<()> {
    let test = CliTest::with_file(
        TABLE,
        r#"{"en": {"title": "Home", "greeting": "Hi"}, "zh-CN": {"title": "主页", "greeting": "欢迎"}}"#,
    )?;
    test.write_file(
        "index.html",
        r#"<h1 id="title">Home</h1><p id="greeting">Hi</p><main id="content"></main>"#,
    )?;
    test.write_file(
        "translation/translation.js",
        r#"document.getElementById('content').innerHTML = '';"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("No missing keys across languages."));
    assert!(out.stdout.contains("No unused translation keys detected."));
    assert!(
        out.stdout
            .contains("\u{2713} Checked 2 source files (strict mode) - no issues found")
    );
    Ok(())
}

#[test]
fn test_only_unused_keys() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home", "oldBanner": "Sale"}}"#)?;
    test.write_file("index.html", r#"<h1 id="title">Home</h1>"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(3));
    assert!(out.stdout.contains(
        "Unused translation keys (present in JSON but not found in HTML/JS): 1\n  oldBanner\n"
    ));
    Ok(())
}

#[test]
fn test_missing_outranks_unused() -> Result<()> {
    let test = CliTest::with_file(
        TABLE,
        r#"{"en": {"title": "Home", "oldBanner": "Sale"}, "fr": {"oldBanner": "Solde"}}"#,
    )?;
    test.write_file("index.html", r#"<h1 id="title">Home</h1>"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stdout.contains(" - fr: 1 missing\n    title\n"));
    assert!(out.stdout.contains("  oldBanner\n"));
    Ok(())
}

#[test]
fn test_id_missing_from_table() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home"}}"#)?;
    test.write_file(
        "pages/about.html",
        r#"<h1 id="title">About</h1><span id="aboutIntro">...</span>"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stdout.contains(
        "IDs referenced in HTML/JS but missing from translations.json:\n  aboutIntro\n"
    ));
    Ok(())
}

#[test]
fn test_script_only_id_strict_vs_permissive() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home"}}"#)?;
    test.write_file("index.html", r#"<h1 id="title">Home</h1>"#)?;
    test.write_file(
        "app.js",
        r##"document.querySelector("#notesContainer").addEventListener("click", open);"##,
    )?;

    let strict = run(test.check_command())?;
    assert_eq!(strict.code, Some(0));
    assert!(!strict.stdout.contains("notesContainer"));

    let mut cmd = test.check_command();
    cmd.args(["--mode", "permissive"]);
    let permissive = run(cmd)?;
    assert_eq!(permissive.code, Some(2));
    assert!(permissive.stdout.contains("  notesContainer\n"));
    assert!(permissive.stdout.contains("(permissive mode)"));
    Ok(())
}

#[test]
fn test_mode_from_config() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home"}}"#)?;
    test.write_file(".sitetoolsrc.json", r#"{ "idMode": "permissive" }"#)?;
    test.write_file(
        "index.html",
        r#"<section id="Misc"><h1 id="title">Home</h1></section>"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stdout.contains("  Misc\n"));
    Ok(())
}

#[test]
fn test_missing_translation_file() -> Result<()> {
    let test = CliTest::with_file("index.html", r#"<p id="x">x</p>"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.starts_with("Error: "));
    assert!(out.stderr.contains("translation/translations.json not found"));
    Ok(())
}

#[test]
fn test_malformed_translation_file() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home",}}"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Failed to parse translation file"));
    assert!(out.stderr.contains("line 1"));
    Ok(())
}

#[test]
fn test_custom_translations_path() -> Result<()> {
    let test = CliTest::with_file("i18n/strings.json", r#"{"en": {"title": "Home"}}"#)?;
    test.write_file("index.html", r#"<h1 id="title">Home</h1><p id="extra">x</p>"#)?;

    let mut cmd = test.check_command();
    cmd.args(["--translations", "i18n/strings.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(
        out.stdout
            .contains("IDs referenced in HTML/JS but missing from strings.json:\n  extra\n")
    );
    Ok(())
}

#[test]
fn test_unreadable_file_is_skipped() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home"}}"#)?;
    test.write_file("index.html", r#"<h1 id="title">Home</h1>"#)?;
    std::fs::write(test.root().join("broken.html"), [0xff, 0xfe, 0xfd])?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(
        out.stderr
            .contains("warning: 1 file(s) could not be read (use -v for details)")
    );
    Ok(())
}

#[test]
fn test_verbose_lists_unreadable_files() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {"title": "Home"}}"#)?;
    test.write_file("index.html", r#"<h1 id="title">Home</h1>"#)?;
    std::fs::write(test.root().join("broken.html"), [0xff, 0xfe, 0xfd])?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stderr.contains("warning: Skipping unreadable file"));
    assert!(out.stderr.contains("broken.html"));
    assert!(out.stderr.contains("1 file(s) could not be read"));
    Ok(())
}

#[test]
fn test_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::with_file(TABLE, r#"{"en": {}}"#)?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(
        out.stderr
            .contains("note: no .sitetoolsrc.json found, using defaults")
    );

    test.write_file(".sitetoolsrc.json", r#"{"idMode": "strict"}"#)?;
    let mut cmd = test.check_command();
    cmd.arg("-v");
    let out = run(cmd)?;

    assert!(!out.stderr.contains("using defaults"));

    let quiet = run(test.check_command())?;
    assert!(!quiet.stderr.contains("using defaults"));
    Ok(())
}

#[test]
fn test_report_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        TABLE,
        r#"{"zh-CN": {"b": "", "a": ""}, "en": {"a": "", "c": ""}}"#,
    )?;
    test.write_file("index.html", r#"<p id="a">A</p><p id="z">Z</p>"#)?;

    let first = run(test.check_command())?;
    let second = run(test.check_command())?;

    assert_eq!(first.code, second.code);
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}
