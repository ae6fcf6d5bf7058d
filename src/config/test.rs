use super::*;
use crate::types::LibraryKind;
use std::fs;
use tempfile::tempdir;

const TOML: &str = r#"
minify = true

[libraries.base]
path = "/etc.clientlibs/base"

[libraries."site.theme"]
path = "/etc.clientlibs/theme"
kinds = ["css"]
dependencies = ["base"]
"#;

fn expected() -> Configuration {
    Configuration {
        minify: true,
        libraries: [
            (
                "base".to_string(),
                Library {
                    path: "/etc.clientlibs/base".into(),
                    kinds: vec![LibraryKind::Css, LibraryKind::Js],
                    dependencies: vec![],
                },
            ),
            (
                "site.theme".to_string(),
                Library {
                    path: "/etc.clientlibs/theme".into(),
                    kinds: vec![LibraryKind::Css],
                    dependencies: vec!["base".into()],
                },
            ),
        ]
        .into_iter()
        .collect(),
    }
}

#[test]
fn load_toml_file() {
    let dir = tempdir().expect("error creating temp dir");
    let file = dir.path().join("libs.toml");
    fs::write(&file, TOML).expect("error writing config");

    let cfg = load(Some(file)).expect("expected config to parse");
    assert_eq!(cfg, expected());
}

#[test]
fn load_yaml_from_dir() {
    let dir = tempdir().expect("error creating temp dir");
    fs::write(
        dir.path().join("Clientlib.yaml"),
        r#"
minify: true
libraries:
  base:
    path: /etc.clientlibs/base
  site.theme:
    path: /etc.clientlibs/theme
    kinds: [css]
    dependencies: [base]
"#,
    )
    .expect("error writing config");

    let cfg = load(Some(dir.path().to_path_buf())).expect("expected config to parse");
    assert_eq!(cfg, expected());
}

#[test]
fn load_json_from_dir() {
    let dir = tempdir().expect("error creating temp dir");
    fs::write(
        dir.path().join(".clientlib.json"),
        r#"{"libraries": {"base": {"path": "/etc.clientlibs/base", "kinds": ["js"]}}}"#,
    )
    .expect("error writing config");

    let cfg = load(Some(dir.path().to_path_buf())).expect("expected config to parse");
    assert!(!cfg.minify);
    assert_eq!(cfg.libraries["base"].kinds, [LibraryKind::Js]);
}

#[test]
fn toml_goes_first() {
    let dir = tempdir().expect("error creating temp dir");
    fs::write(dir.path().join("Clientlib.toml"), TOML).expect("error writing config");
    fs::write(dir.path().join("Clientlib.json"), "{}").expect("error writing config");

    let source = Source::find(dir.path()).expect("expected to find a config");
    assert_eq!(source, Source(dir.path().join("Clientlib.toml")));
}

#[test]
fn err_no_config_in_dir() {
    let dir = tempdir().expect("error creating temp dir");
    let err = load(Some(dir.path().to_path_buf())).expect_err("expected no config");
    assert!(
        err.to_string()
            .starts_with("Unable to find any clientlib configuration")
    );
}

#[test]
fn err_unsupported_extension() {
    let dir = tempdir().expect("error creating temp dir");
    let file = dir.path().join("libs.ini");
    fs::write(&file, "").expect("error writing config");

    let err = load(Some(file)).expect_err("expected config to err");
    assert_eq!(
        format!("{:#}", err).split(": ").last(),
        Some("Unsupported configuration file type: ini")
    );
}

#[test]
fn err_missing_path() {
    let dir = tempdir().expect("error creating temp dir");
    let path = dir.path().join("fake-dir");
    let err = load(Some(path.clone())).expect_err("expected config to err");
    assert_eq!(
        err.to_string(),
        format!("{} is neither a file nor a directory", path.display())
    );
}

#[test]
fn err_library_without_path() {
    let dir = tempdir().expect("error creating temp dir");
    let file = dir.path().join("Clientlib.toml");
    fs::write(&file, "[libraries.base]\nkinds = [\"css\"]\n").expect("error writing config");

    assert!(load(Some(file)).is_err());
}
