// src/paths.rs

//! Lexical path helpers used by the startup resolver.

use std::path::{Component, Path, PathBuf};

pub fn is_absolute(path: &Path) -> bool {
    path.is_absolute()
}

/// Resolve `path` against `base` the way a shell would read it.
///
/// - An absolute `path` ignores `base`.
/// - `.` segments are dropped and `..` pops the previous segment; `..` at the
///   root stays at the root.
///
/// This is purely lexical: symlinks are not followed and nothing is read
/// from disk.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically normalise `path` (see [`resolve`]).
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // Number of normal segments currently in `out` that `..` may pop.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                out.push(component.as_os_str());
                depth = 0;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(segment) => {
                out.push(segment);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
