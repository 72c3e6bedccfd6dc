use std::path::{Component, Path, PathBuf};

use relative_path::RelativePath;

/// Resolve a reference location against the manifest directory.
///
/// Both `/` and `\` are accepted as separators. `.` and `..` are resolved
/// lexically, so the result does not depend on what exists on disk.
pub fn resolve_location(base_dir: &Path, location: &str) -> PathBuf {
    let forward = location.replace('\\', "/");
    let native = forward.replace('/', std::path::MAIN_SEPARATOR_STR);

    if Path::new(&native).is_absolute() {
        return normalize_lexically(Path::new(&native));
    }

    let joined = RelativePath::new(forward.trim_start_matches('/')).to_path(base_dir);
    normalize_lexically(&joined)
}

/// Drop `.` components and fold `..` into the preceding component.
///
/// A `..` that would climb above the root is discarded, and leading `..`
/// components of a relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    out.push("..");
                }
            },
            other => out.push(other),
        }
    }
    out
}

/// `path` made absolute against the working directory, then normalised.
///
/// An empty path stands for the working directory itself.
pub fn absolute_lexically(path: &Path) -> PathBuf {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_lexically(&absolute)
}

/// Component-wise prefix test after normalisation.
pub fn is_within(dir: &Path, path: &Path) -> bool {
    normalize_lexically(path).starts_with(normalize_lexically(dir))
}
