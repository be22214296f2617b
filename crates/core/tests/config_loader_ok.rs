use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use tidytemplate_core::config::loader::ConfigLoader;
use tidytemplate_core::open::OpenerCommand;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
output_dir = "/tmp/tidy"
author = "Ada Lovelace"
extension = ".qmd"
openers = [["code", "--reuse-window"], ["open"]]

[logging]
level = "debug"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.source.as_deref(), Some(cfg_path.as_path()));
    assert_eq!(rc.output_dir.display().to_string(), "/tmp/tidy");
    assert_eq!(rc.author, "Ada Lovelace");
    assert_eq!(rc.extension, "qmd");
    assert_eq!(
        rc.openers,
        vec![
            OpenerCommand::with_args("code", ["--reuse-window"]),
            OpenerCommand::new("open"),
        ]
    );
    assert_eq!(rc.logging.level, "debug");
    assert!(rc.template.is_none());
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("tidytemplate/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
author = "Default Author"

[profiles.r]
author = "R User"
extension = "Rmd"
template = "/tmp/templates/tidy.Rmd"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("r")).expect("should load");
    assert_eq!(rc.active_profile, "r");
    assert_eq!(rc.author, "R User");
    assert_eq!(rc.extension, "Rmd");
    assert_eq!(rc.template, Some(PathBuf::from("/tmp/templates/tidy.Rmd")));
}

#[test]
fn missing_default_profile_uses_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n");

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.author, "Your Name");
    assert_eq!(rc.extension, "qmd");
    assert_eq!(rc.output_dir, PathBuf::from("."));
    assert_eq!(rc.openers.len(), 3);
    assert_eq!(rc.logging.level, "warn");
}
