//! Lexical path handling shared by the descriptor and manifest parsers.
//!
//! Build descriptors are written on Windows and spell separators as `\`.
//! Everything here is purely lexical and never touches the file system, so
//! two spellings of one target always compare equal after normalisation.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` segments and turn `\` into `/`.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let raw = path.as_ref().to_string_lossy().replace('\\', "/");
    let mut out = PathBuf::new();

    for component in Path::new(&raw).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is still `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}

/// Resolve a raw reference against the directory of the file declaring it.
pub fn resolve(base_dir: &Path, raw: &str) -> PathBuf {
    let converted = raw.trim().replace('\\', "/");
    let candidate = Path::new(&converted);

    if candidate.is_absolute() {
        normalize(candidate)
    } else {
        normalize(base_dir.join(candidate))
    }
}

/// Last path segment of a raw name, either separator accepted.
pub fn file_name_of(raw: &str) -> &str {
    raw.rsplit(['/', '\\']).next().unwrap_or(raw)
}

/// File name with its last extension removed: `..\lib\Foo.lib` -> `Foo`.
pub fn file_stem_of(raw: &str) -> &str {
    let name = file_name_of(raw);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Lower-cased extension, if any.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    include!("paths.test.rs");
}
