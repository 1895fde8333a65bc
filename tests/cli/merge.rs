use anyhow::Result;
use langsync::core::Document;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const ES_ES: &str = "locale/es-ES/translation.toml";
const ES_MX: &str = "locale/es-MX/translation.toml";
const ES: &str = "locale/es/translation.toml";

fn merge_args() -> [&'static str; 4] {
    ["merge", ES_ES, ES_MX, ES]
}

#[test]
fn test_merge_promotes_shared_keys() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ES_ES,
        "greeting = \"Hola\"\nfarewell = \"Adiós\"\ncar = \"Coche\"\n\n[ALERTS]\nerr1 = \"Error\"\n",
    )?;
    test.write_file(
        ES_MX,
        "greeting = \"Hola\"\nfarewell = \"Adiós\"\ncar = \"Carro\"\n\n[ALERTS]\nerr1 = \"Error\"\n",
    )?;

    let output = test.run(&merge_args())?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Merged"));
    assert!(out.contains("  - shared: 3 key(s)"));

    let parent: Document = test.read_file(ES)?.parse()?;
    assert!(parent.is_merged());
    assert_eq!(
        parent.entries.keys().collect::<Vec<_>>(),
        vec!["greeting", "farewell"]
    );
    assert_eq!(parent.alerts["err1"], "Error");

    let es_es: Document = test.read_file(ES_ES)?.parse()?;
    let es_mx: Document = test.read_file(ES_MX)?.parse()?;
    assert_eq!(es_es.entries.keys().collect::<Vec<_>>(), vec!["car"]);
    assert_eq!(es_es.entries["car"], "Coche");
    assert_eq!(es_mx.entries["car"], "Carro");
    assert!(es_es.alerts.is_empty());
    assert!(es_mx.alerts.is_empty());
    Ok(())
}

#[test]
fn test_merge_twice_is_stable() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(ES_ES, "a = \"1\"\nb = \"2\"\n")?;
    test.write_file(ES_MX, "a = \"1\"\nb = \"3\"\n")?;

    assert_eq!(test.run(&merge_args())?.status.code(), Some(0));
    let first_pass = (
        test.read_file(ES_ES)?,
        test.read_file(ES_MX)?,
        test.read_file(ES)?,
    );

    assert_eq!(test.run(&merge_args())?.status.code(), Some(0));
    let second_pass = (
        test.read_file(ES_ES)?,
        test.read_file(ES_MX)?,
        test.read_file(ES)?,
    );

    assert_eq!(first_pass, second_pass);
    Ok(())
}

#[test]
fn test_merge_reverts_diverged_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(ES_ES, "a = \"1\"\n")?;
    test.write_file(ES_MX, "a = \"1\"\n")?;
    assert_eq!(test.run(&merge_args())?.status.code(), Some(0));

    // The variant overrides the shared value.
    test.write_file(ES_MX, "a = \"2\"\n")?;
    let output = test.run(&merge_args())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  - reverted: 1 key(s) no longer shared"));

    let parent: Document = test.read_file(ES)?.parse()?;
    assert!(!parent.entries.contains_key("a"));
    let es_es: Document = test.read_file(ES_ES)?.parse()?;
    let es_mx: Document = test.read_file(ES_MX)?.parse()?;
    assert_eq!(es_es.entries["a"], "1");
    assert_eq!(es_mx.entries["a"], "2");
    Ok(())
}

#[test]
fn test_merge_keeps_empty_values_in_variants() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(ES_ES, "a = \"\"\nb = \"x\"\n")?;
    test.write_file(ES_MX, "a = \"\"\nb = \"x\"\n")?;

    let output = test.run(&merge_args())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  - unresolved: 1 key(s)"));
    let parent: Document = test.read_file(ES)?.parse()?;
    assert!(!parent.entries.contains_key("a"));
    let es_es: Document = test.read_file(ES_ES)?.parse()?;
    assert_eq!(es_es.entries.keys().collect::<Vec<_>>(), vec!["a"]);
    Ok(())
}

#[test]
fn test_merge_order_mismatch_warns() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(ES_ES, "a = \"1\"\nb = \"2\"\n")?;
    test.write_file(ES_MX, "b = \"2\"\na = \"1\"\n")?;

    let output = test.run(&merge_args())?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("WARN"));
    let parent: Document = test.read_file(ES)?.parse()?;
    assert_eq!(parent.entries.len(), 2);
    Ok(())
}

#[test]
fn test_merge_strict_order_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    let first = "a = \"1\"\nb = \"2\"\n";
    let second = "b = \"2\"\na = \"1\"\n";
    test.write_file(ES_ES, first)?;
    test.write_file(ES_MX, second)?;

    let output = test.run(&["merge", ES_ES, ES_MX, ES, "--strict-order"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to merge"));
    assert_eq!(test.read_file(ES_ES)?, first);
    assert_eq!(test.read_file(ES_MX)?, second);
    assert!(!test.exists(ES));
    Ok(())
}

#[test]
fn test_merge_strict_order_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsyncrc.json", r#"{ "strictOrder": true }"#)?;
    test.write_file(ES_ES, "a = \"1\"\nb = \"2\"\n")?;
    test.write_file(ES_MX, "b = \"2\"\na = \"1\"\n")?;

    let output = test.run(&merge_args())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.exists(ES));
    Ok(())
}

#[test]
fn test_merge_missing_variant_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(ES_ES, "a = \"1\"\n")?;

    let output = test.run(&merge_args())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.exists(ES));
    Ok(())
}
