mod common;

use std::fs;
use std::path::Path;

use common::SECURED_MANIFEST;
use serial_test::serial;
use tempfile::TempDir;
use wsgen::{AppError, generate_at};

fn with_temp_dir_env<T>(temp_dir: &Path, f: impl FnOnce() -> T) -> T {
    unsafe {
        std::env::set_var("WSGEN_SERVER_TEMP_DIR", temp_dir);
    }
    let result = f();
    unsafe {
        std::env::remove_var("WSGEN_SERVER_TEMP_DIR");
    }
    result
}

#[test]
#[serial]
fn generate_at_returns_archive_summary() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    fs::write(root.join("hello.toml"), SECURED_MANIFEST).unwrap();

    let archive = with_temp_dir_env(&root.join("server"), || {
        generate_at(Path::new("hello.toml"), None, root.clone())
    })
    .expect("generate failed")
    .expect("EJB deployment should produce an archive");

    assert_eq!(archive.servlets, 3);
    assert_eq!(archive.security_constraints, 2);
    assert_eq!(archive.login_method.as_deref(), Some("BASIC"));
    assert_eq!(archive.url.to_file_path().unwrap(), archive.path);
    assert!(archive.path.join("WEB-INF/web.xml").is_file());
    assert!(archive.path.join("WEB-INF/jboss-web.xml").is_file());
}

#[test]
#[serial]
fn repeated_generation_allocates_distinct_archives() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    fs::write(root.join("hello.toml"), SECURED_MANIFEST).unwrap();

    let (first, second) = with_temp_dir_env(&root.join("server"), || {
        let first = generate_at(Path::new("hello.toml"), None, root.clone());
        let second = generate_at(Path::new("hello.toml"), None, root.clone());
        (first, second)
    });

    let first = first.unwrap().unwrap();
    let second = second.unwrap().unwrap();
    assert_ne!(first.path, second.path);
    assert_eq!(first.path.parent(), second.path.parent());
}

#[test]
#[serial]
fn generate_at_surfaces_manifest_errors() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    fs::write(root.join("broken.toml"), "name = \"x\"\ntype = \"UNKNOWN\"\n").unwrap();

    let result = with_temp_dir_env(&root.join("server"), || {
        generate_at(Path::new("broken.toml"), None, root.clone())
    });

    assert!(matches!(result, Err(AppError::TomlParseError(_))));
}
