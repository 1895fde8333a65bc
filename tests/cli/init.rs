use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .langsyncrc.json"));

    let config: serde_json::Value = serde_json::from_str(&test.read_file(".langsyncrc.json")?)?;
    assert_eq!(config["templatePath"], "./locale/template/translation.toml");
    assert_eq!(config["localePath"], "./locale");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(".langsyncrc.json already exists"));
    assert_eq!(test.read_file(".langsyncrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&[])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));
    Ok(())
}
