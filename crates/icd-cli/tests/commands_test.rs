//! End-to-end command runs against a temporary database seeded from the sample file.

use icd_cli::commands;
use icd_cli::AppContext;
use icd_core::IcdConfig;
use serde_json::Value;
use test_fixtures::{fixture_path, SAMPLE_CODES_CSV};

fn seeded(dir: &tempfile::TempDir) -> AppContext {
    let mut config = IcdConfig::default();
    config.storage.db_path = dir.path().join("codes.db").display().to_string();
    config.generation.api_key_env = "ICDGRAPH_CLI_TEST_KEY_NEVER_SET".to_string();
    let ctx = AppContext::with_config(config).unwrap();
    commands::ingest::run(&ctx, &fixture_path(SAMPLE_CODES_CSV), false).unwrap();
    ctx
}

#[test]
fn ingest_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = IcdConfig::default();
    config.storage.db_path = dir.path().join("codes.db").display().to_string();
    let ctx = AppContext::with_config(config).unwrap();

    let text = commands::ingest::run(&ctx, &fixture_path(SAMPLE_CODES_CSV), false).unwrap();
    assert!(text.contains("21 rows, 21 upserted, 0 skipped, 0 failed"), "{text}");

    let json: Value =
        serde_json::from_str(&commands::ingest::run(&ctx, &fixture_path(SAMPLE_CODES_CSV), true).unwrap())
            .unwrap();
    assert_eq!(json["upserted"], 21);
}

#[test]
fn lookup_shows_hierarchy() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = seeded(&dir);

    let text = commands::lookup::run(&ctx, "A00", false).unwrap();
    assert!(text.starts_with("A00  Cholera"));
    assert!(text.contains("children: A00.0, A00.1, A00.9"));

    let json: Value = serde_json::from_str(&commands::lookup::run(&ctx, "A00.1", true).unwrap()).unwrap();
    assert_eq!(json["code"], "A001");
    assert_eq!(json["displayCode"], "A00.1");
    assert_eq!(json["categoryName"], "Cholera");
    assert_eq!(json["parents"][0], "A00");

    let missing = commands::lookup::run(&ctx, "Z999", false).unwrap();
    assert_eq!(missing, "No code Z999 in the database.");
}

#[test]
fn search_and_category_listing() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = seeded(&dir);

    let json: Value =
        serde_json::from_str(&commands::search::run(&ctx, "pneumonia", Some(2), true).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);

    let text = commands::category::run(&ctx, "J12", false).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("J12 "));
    assert!(lines[1].starts_with("J12.0"));
    assert!(lines[3].starts_with("J12.9"));

    assert_eq!(
        commands::search::run(&ctx, "xyzzy", None, false).unwrap(),
        "No matching codes."
    );
}

#[test]
fn ask_without_a_key_answers_from_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = seeded(&dir);

    let json: Value =
        serde_json::from_str(&commands::ask::run(&ctx, "cholera", false, true).unwrap()).unwrap();
    assert_eq!(json["source"], "database only");
    assert_eq!(json["verified"], true);
    assert_eq!(json["codes"].as_array().unwrap().len(), 4);

    let text = commands::ask::run(&ctx, "xyzzy", true, false).unwrap();
    assert!(text.contains("couldn't find any matching ICD-10 codes"));
    assert!(text.ends_with("[source: no results]"));
}

#[test]
fn stats_counts_the_graph() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = seeded(&dir);
    let json: Value = serde_json::from_str(&commands::stats::run(&ctx, true).unwrap()).unwrap();
    assert_eq!(json["codes"], 21);
    assert_eq!(json["hierarchy_edges"], 9);
}

#[test]
fn unopenable_database_fails_at_startup() {
    let mut config = IcdConfig::default();
    config.storage.db_path = "/nonexistent-dir/sub/codes.db".to_string();
    let err = AppContext::with_config(config).err().unwrap();
    assert!(format!("{err:#}").contains("cannot open code database"));
}

#[test]
fn config_file_and_db_override() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("icdgraph.toml");
    std::fs::write(&config_path, "[retrieval]\ndefault_limit = 2\n").unwrap();

    let ctx = AppContext::open(&config_path, Some(dir.path().join("override.db"))).unwrap();
    assert_eq!(ctx.config.retrieval.default_limit, 2);
    assert!(ctx.config.storage.db_path.ends_with("override.db"));
    assert!(dir.path().join("override.db").exists());
}
