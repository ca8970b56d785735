//! Exit codes of complete invocations, without network access.

use clap::Parser;
use modfetch_cli::{Cli, handlers};
use tempfile::TempDir;

fn factorio_home() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("player-data.json"),
        r#"{"service-username": "engineer", "service-token": "tok"}"#,
    )
    .unwrap();
    dir
}

fn cli(home: &TempDir, outdir: &std::path::Path, extra: &[&str]) -> Cli {
    let mut args = vec![
        "modfetch".to_string(),
        "--factorio-home".to_string(),
        home.path().to_string_lossy().into_owned(),
        "--outdir".to_string(),
        outdir.to_string_lossy().into_owned(),
        // Nothing listens on port 1, so any lookup fails fast.
        "--registry-url".to_string(),
        "http://127.0.0.1:1".to_string(),
    ];
    args.extend(extra.iter().map(|s| (*s).to_string()));
    Cli::parse_from(args)
}

#[tokio::test]
async fn empty_name_list_succeeds() {
    let home = factorio_home();
    let out = TempDir::new().unwrap();
    assert_eq!(handlers::run(&cli(&home, out.path(), &["--mods= , "])).await, 0);
}

#[tokio::test]
async fn missing_output_directory_exits_74() {
    let home = factorio_home();
    let out = TempDir::new().unwrap();
    let missing = out.path().join("missing");
    assert_eq!(handlers::run(&cli(&home, &missing, &["--mods", "alpha"])).await, 74);
}

#[tokio::test]
async fn missing_credentials_exit_78() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    assert_eq!(handlers::run(&cli(&home, out.path(), &["--mods", "alpha"])).await, 78);
}

#[tokio::test]
async fn unreachable_registry_is_partial_failure() {
    let home = factorio_home();
    let out = TempDir::new().unwrap();
    assert_eq!(handlers::run(&cli(&home, out.path(), &["--mods", "alpha,beta"])).await, 1);
    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn mod_list_with_only_base_succeeds() {
    let home = factorio_home();
    let out = TempDir::new().unwrap();
    let list = home.path().join("mod-list.json");
    std::fs::write(&list, r#"{"mods": [{"name": "base", "enabled": true}]}"#).unwrap();

    let code = handlers::run(&cli(&home, out.path(), &["--mod-list", list.to_str().unwrap()])).await;
    assert_eq!(code, 0);
}
