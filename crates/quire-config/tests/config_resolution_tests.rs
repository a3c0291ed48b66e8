//! Integration tests for layered configuration resolution

use quire_config::{
    ConfigLoader, ConfigResolver, QuireConfig, CONFIG_FILE_NAME, DEFAULT_INSTRUCTIONS_EXTENSION,
    DEFAULT_INSTRUCTIONS_SUBPATH, WORKSPACE_CONFIG_DIR,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_default_config_uses_builtin_constants() {
    let config = QuireConfig::default();
    assert_eq!(config.instructions.subpath, DEFAULT_INSTRUCTIONS_SUBPATH);
    assert_eq!(config.instructions.extension, DEFAULT_INSTRUCTIONS_EXTENSION);
}

#[test]
fn test_workspace_tier_overrides_global_tier() {
    let global = TempDir::new().unwrap();
    let global_file = global.path().join(CONFIG_FILE_NAME);
    fs::write(&global_file, "[logging]\nlevel = \"info\"\ndirectives = [\"hyper=off\"]\n").unwrap();

    let workspace = TempDir::new().unwrap();
    let dir = workspace.path().join(WORKSPACE_CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(CONFIG_FILE_NAME), "[logging]\nlevel = \"trace\"\n").unwrap();

    let config = ConfigResolver::with_global_path(Some(global_file), workspace.path())
        .unwrap()
        .into_config();

    assert_eq!(config.logging.level, "trace");
    assert_eq!(config.logging.directives, vec!["hyper=off".to_string()]);
}

#[tokio::test]
async fn test_loader_and_resolver_agree_on_same_document() {
    let document = "[instructions]\nsubpath = \"team/instructions\"\nfollow_references = false\n";

    let workspace = TempDir::new().unwrap();
    let dir = workspace.path().join(WORKSPACE_CONFIG_DIR);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(CONFIG_FILE_NAME);
    fs::write(&file, document).unwrap();

    let loaded = ConfigLoader::load_from_file(&file).await.unwrap();
    let resolved = ConfigResolver::with_global_path(None, workspace.path())
        .unwrap()
        .into_config();

    assert_eq!(loaded, resolved);
    assert!(!resolved.instructions.follow_references);
}
