use anyhow::Result;
use langsync::core::Document;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_update_syncs_merges_and_comments() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file("locale/fr/translation.toml", "greeting = \"Bonjour\"\n")?;
    test.write_file(
        "locale/es-ES/translation.toml",
        "greeting = \"Hola\"\nfarewell = \"Adiós\"\n",
    )?;
    test.write_file(
        "locale/es-MX/translation.toml",
        "greeting = \"Hola\"\nfarewell = \"Nos vemos\"\n",
    )?;

    let output = test.run(&["update"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Synced"));
    assert!(out.contains("Merged es into"));
    assert!(out.contains("Locale files are up to date"));

    let fr = test.read_file("locale/fr/translation.toml")?;
    assert!(fr.contains("greeting = \"Bonjour\" # Hello"));
    let fr: Document = fr.parse()?;
    assert_eq!(fr.entries["farewell"], "");

    let es: Document = test.read_file("locale/es/translation.toml")?.parse()?;
    assert!(es.is_merged());
    assert_eq!(es.entries["greeting"], "Hola");
    assert!(!es.entries.contains_key("farewell"));

    let es_mx: Document = test.read_file("locale/es-MX/translation.toml")?.parse()?;
    assert_eq!(es_mx.entries["farewell"], "Nos vemos");
    assert!(!es_mx.entries.contains_key("greeting"));
    Ok(())
}

#[test]
fn test_update_leaves_template_alone() -> Result<()> {
    let test = CliTest::with_template()?;
    let template = test.read_file("locale/template/translation.toml")?;
    test.write_file("locale/fr/translation.toml", "")?;

    let output = test.run(&["update-translations"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("locale/template/translation.toml")?, template);
    Ok(())
}

#[test]
fn test_update_skip_flags() -> Result<()> {
    let test = CliTest::with_template()?;
    let content = "greeting = \"Bonjour\"\n";
    test.write_file("locale/fr/translation.toml", content)?;

    let output = test.run(&["update", "--no-sync", "--no-merge", "--no-comment"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Nothing to update.\n");
    assert_eq!(test.read_file("locale/fr/translation.toml")?, content);
    Ok(())
}

#[test]
fn test_update_warns_on_variant_groups_not_of_two() -> Result<()> {
    let test = CliTest::with_template()?;
    for region in ["CN", "HK", "TW"] {
        test.write_file(
            &format!("locale/zh-{region}/translation.toml"),
            "greeting = \"你好\"\n",
        )?;
    }

    let output = test.run(&["update", "--no-comment"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("3 variant(s) found, merging needs exactly 2"));
    assert!(!out.contains("Locale files are up to date"));
    assert!(!test.exists("locale/zh/translation.toml"));
    Ok(())
}

#[test]
fn test_update_uses_config_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langsyncrc.json",
        r#"{ "templatePath": "i18n/en/base.toml", "localePath": "i18n" }"#,
    )?;
    test.write_file("i18n/en/base.toml", "title = \"Title\"\n")?;
    test.write_file("i18n/nl/base.toml", "")?;

    let output = test.run(&["update", "--no-comment"])?;

    assert_eq!(output.status.code(), Some(0));
    let nl: Document = test.read_file("i18n/nl/base.toml")?.parse()?;
    assert_eq!(nl.entries["title"], "");
    assert_eq!(test.read_file("i18n/en/base.toml")?, "title = \"Title\"\n");
    Ok(())
}

#[test]
fn test_update_flags_override_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langsyncrc.json",
        r#"{ "templatePath": "missing.toml", "localePath": "nowhere" }"#,
    )?;
    test.write_file("ref/template/t.toml", "k = \"v\"\n")?;
    test.write_file("ref/sv/t.toml", "")?;

    let output = test.run(&[
        "update",
        "-t",
        "ref/template/t.toml",
        "-l",
        "ref",
        "--no-comment",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    let sv: Document = test.read_file("ref/sv/t.toml")?.parse()?;
    assert!(sv.entries.contains_key("k"));
    Ok(())
}

#[test]
fn test_update_stops_on_malformed_file() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file("locale/fr/translation.toml", "[ALERTS\n")?;

    let output = test.run(&["update"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    Ok(())
}

#[test]
fn test_update_keeps_multiline_values() -> Result<()> {
    let test = CliTest::with_template()?;
    test.write_file(
        "locale/fr/translation.toml",
        "greeting = \"\"\"\nBonjour\nà tous\"\"\"\n",
    )?;

    let output = test.run(&["update"])?;

    assert_eq!(output.status.code(), Some(0));
    let text = test.read_file("locale/fr/translation.toml")?;
    assert!(text.contains("greeting = \"Bonjour\\nà tous\" # Hello"));
    let fr: Document = text.parse()?;
    assert_eq!(fr.entries["greeting"], "Bonjour\nà tous");
    assert_eq!(fr.entries["farewell"], "");
    Ok(())
}

#[test]
fn test_update_comment_skips_hand_written_multiline_values() -> Result<()> {
    let test = CliTest::with_template()?;
    let content = "greeting = '''\nfarewell = \"not an entry\"\n'''\n";
    test.write_file("locale/fr/translation.toml", content)?;

    let output = test.run(&["update", "--no-sync"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("locale/fr/translation.toml")?, content);
    Ok(())
}
