use gostrap::copier::{copy_file, copy_template_to_project};
use gostrap::error::Error;
use gostrap::ignore::IgnoreSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const LOGO: [u8; 6] = [0x89, b'P', b'N', b'G', 0x00, 0xff];

fn write(root: &Path, name: &str, content: &[u8]) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn make_template() -> TempDir {
    let template = TempDir::new().unwrap();
    let root = template.path();
    write(root, "go.mod", b"module template\n");
    write(root, "internal/app/app.go", b"package app\n");
    write(root, "assets/logo.png", &LOGO);
    write(root, "bin/tool", b"binary");
    write(root, "internal/bin/keep.txt", b"nested bin is ignored too");
    write(root, "go.sum", b"sums");
    template
}

fn copy(template: &Path, dest: &Path, ignore: &IgnoreSet) {
    copy_template_to_project(template, dest, ignore).unwrap();
}

#[test]
fn test_copy_mirrors_tree() {
    let template = make_template();
    let output = TempDir::new().unwrap();
    let dest = output.path();

    copy(template.path(), dest, &IgnoreSet::default());

    assert_eq!(fs::read(dest.join("go.mod")).unwrap(), b"module template\n");
    assert_eq!(
        fs::read(dest.join("internal/app/app.go")).unwrap(),
        b"package app\n"
    );
    assert_eq!(fs::read(dest.join("assets/logo.png")).unwrap(), LOGO);
}

#[test]
fn test_copy_skips_ignored_names() {
    let template = make_template();
    let output = TempDir::new().unwrap();
    let dest = output.path();

    copy(template.path(), dest, &IgnoreSet::default());

    assert!(!dest.join("bin").exists());
    assert!(!dest.join("internal/bin").exists());
    assert!(!dest.join("go.sum").exists());
}

#[test]
fn test_copy_without_ignore_set() {
    let template = make_template();
    let output = TempDir::new().unwrap();
    let dest = output.path();

    copy(template.path(), dest, &IgnoreSet::empty());

    assert!(dest.join("bin/tool").is_file());
    assert!(dest.join("go.sum").is_file());
}

#[test]
fn test_copy_ignores_nothing_at_root() {
    let parent = TempDir::new().unwrap();
    let root = parent.path().join("bin");
    write(&root, "go.mod", b"module template\n");
    let output = TempDir::new().unwrap();

    copy(&root, output.path(), &IgnoreSet::default());

    assert!(output.path().join("go.mod").is_file());
}

#[test]
fn test_copy_is_idempotent() {
    let template = make_template();
    let twice = TempDir::new().unwrap();
    let once = TempDir::new().unwrap();
    let ignore = IgnoreSet::default();

    copy(template.path(), twice.path(), &ignore);
    copy(template.path(), twice.path(), &ignore);
    copy(template.path(), once.path(), &ignore);

    assert!(!dir_diff::is_different(&twice, &once).unwrap());
}

#[test]
fn test_copy_missing_template_root() {
    let temp_dir = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let result = copy_template_to_project(
        temp_dir.path().join("missing"),
        output.path(),
        &IgnoreSet::default(),
    );
    assert!(matches!(result, Err(Error::Walk { .. })));
}

#[test]
fn test_copy_reports_failing_path() {
    let template = make_template();
    let output = TempDir::new().unwrap();
    let dest = output.path();
    // A file where the copier needs a directory.
    write(dest, "internal", b"not a directory");

    let result = copy_template_to_project(template.path(), dest, &IgnoreSet::default());
    match result {
        Err(Error::Copy { path, .. }) => assert_eq!(path, dest.join("internal")),
        other => panic!("Expected Copy error, got {other:?}"),
    }
}

#[test]
fn test_copy_file_missing_source() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("missing.txt");

    let result = copy_file(&source, &temp_dir.path().join("dest.txt"));
    assert!(matches!(result, Err(Error::Copy { path, .. }) if path == source));
}
