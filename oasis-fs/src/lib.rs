//! Capability-based file helpers for reading and publishing datasets.
//!
//! Every helper resolves an ambient directory once and performs the actual
//! I/O relative to it through `cap-std`.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;
use std::path::Component;

/// Open the parent directory of `path` and return it with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn parent_dir_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("'{path}' does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(p) if !p.as_str().is_empty() => p,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an ambient root (`.`, `/` or a Windows prefix) and the
/// remaining relative components, opening the root.
///
/// # Errors
/// Fails when the root cannot be opened or the path is not UTF-8 after
/// stripping its prefix.
pub fn ambient_root(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let root = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR)
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => {
            let handle = fs_utf8::Dir::open_ambient_dir(".", ambient_authority())?;
            return Ok((handle, dir.to_owned()));
        }
    };
    let relative = dir
        .strip_prefix(&root)
        .map_err(|_| io::Error::other(format!("'{dir}' does not start with '{root}'")))?
        .to_owned();
    let handle = fs_utf8::Dir::open_ambient_dir(&root, ambient_authority())?;
    Ok((handle, relative))
}

/// Create every missing directory above `path`.
///
/// # Errors
/// Propagates I/O errors from opening the root or creating directories.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) else {
        return Ok(());
    };
    let (root, relative) = ambient_root(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    root.create_dir_all(&relative)
}

/// Report whether `path` is a regular file.
///
/// # Errors
/// Returns `NotFound` when `path` or its parent does not exist, and
/// propagates any other I/O error.
pub fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Read a UTF-8 text file.
///
/// # Errors
/// Propagates I/O errors, including invalid UTF-8 content.
pub fn read_utf8(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = parent_dir_and_name(path)?;
    dir.read_to_string(name.as_str())
}

/// Write `contents` to `path`, creating parent directories and replacing any
/// existing file.
///
/// # Errors
/// Propagates I/O errors from directory creation or the write.
pub fn write_utf8(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = parent_dir_and_name(path)?;
    dir.write(name.as_str(), contents)
}
