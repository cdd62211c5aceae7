#![cfg(unix)]

use std::path::{Path, PathBuf};

use devlaunch::paths::{is_absolute, normalize, resolve};

#[test]
fn resolve_joins_and_drops_current_dir_segments() {
    assert_eq!(
        resolve(Path::new("/base"), Path::new("./dist/server.js")),
        PathBuf::from("/base/dist/server.js")
    );
}

#[test]
fn resolve_handles_parent_segments() {
    assert_eq!(
        resolve(Path::new("/base/app"), Path::new("../shared/run.sh")),
        PathBuf::from("/base/shared/run.sh")
    );
    assert_eq!(
        resolve(Path::new("/"), Path::new("../../x")),
        PathBuf::from("/x")
    );
}

#[test]
fn absolute_path_ignores_base() {
    assert_eq!(
        resolve(Path::new("/base"), Path::new("/opt/./app/../run.sh")),
        PathBuf::from("/opt/run.sh")
    );
}

#[test]
fn normalize_relative_paths() {
    assert_eq!(normalize(Path::new("a/./b/../c")), PathBuf::from("a/c"));
    assert_eq!(normalize(Path::new("../a")), PathBuf::from("../a"));
    assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
}

#[test]
fn absolute_detection() {
    assert!(is_absolute(Path::new("/srv")));
    assert!(!is_absolute(Path::new("./srv")));
    assert!(!is_absolute(Path::new("srv")));
}
