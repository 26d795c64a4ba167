use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.command();
    cmd.arg("init");

    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created .sitetoolsrc.json"));
    let config: serde_json::Value = serde_json::from_str(&test.read_file(".sitetoolsrc.json")?)?;
    assert_eq!(config["idMode"], "strict");
    assert_eq!(config["translationsFile"], "translation/translations.json");
    assert_eq!(config["notesRoot"], "Notes");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".sitetoolsrc.json", "{}")?;
    let mut cmd = test.command();
    cmd.arg("init");

    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains(".sitetoolsrc.json already exists"));
    assert_eq!(test.read_file(".sitetoolsrc.json")?, "{}");
    Ok(())
}
