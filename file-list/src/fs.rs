use std::path::{Component, Path, PathBuf};

/// Minimal metadata the file list needs about a single path.
#[derive(Clone, Debug)]
pub struct FsMetadata {
    /// Whether the path resolves to a directory (symlinks are followed).
    pub is_dir: bool,
}

/// Directory entry returned by [`FileSystem::read_dir`].
#[derive(Clone, Debug)]
pub struct FsEntry {
    /// Base name (no parent path)
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Whether this entry resolves to a directory (symlinks are followed).
    pub is_dir: bool,
}

/// Filesystem collaborator consulted by the file list.
///
/// Listing is blocking and scoped to a single reload; implementations should
/// return promptly. Order of the returned entries does not matter.
pub trait FileSystem {
    /// List the immediate entries of a directory (non-recursive).
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<FsEntry>>;
    /// Fetch minimal metadata for a path.
    fn metadata(&self, path: &Path) -> std::io::Result<FsMetadata>;
}

/// Default filesystem implementation using `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<FsEntry>> {
        let mut out = Vec::new();
        for e in std::fs::read_dir(dir)? {
            let Ok(e) = e else { continue };
            let Ok(ft) = e.file_type() else { continue };
            let path = e.path();
            // A link to a directory is navigable, so resolve it.
            let is_dir = if ft.is_symlink() {
                std::fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false)
            } else {
                ft.is_dir()
            };
            out.push(FsEntry {
                name: e.file_name().to_string_lossy().to_string(),
                path,
                is_dir,
            });
        }
        Ok(out)
    }

    fn metadata(&self, path: &Path) -> std::io::Result<FsMetadata> {
        let md = std::fs::metadata(path)?;
        Ok(FsMetadata {
            is_dir: md.is_dir(),
        })
    }
}

/// Normalize a path lexically: drop `.` components and let `..` remove the
/// preceding component.
///
/// Symlinks are never resolved and `..` never climbs above a root, so the
/// parent of `/` is `/`. An empty result becomes `.`.
///
/// ```
/// use file_list::normalize_lexically;
/// use std::path::Path;
///
/// assert_eq!(normalize_lexically(Path::new("/a/./b/..")), Path::new("/a"));
/// assert_eq!(normalize_lexically(Path::new("/..")), Path::new("/"));
/// ```
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(_) | Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Parent of `dir` in normalized form. A root is its own parent.
pub(crate) fn parent_directory(dir: &Path) -> PathBuf {
    normalize_lexically(&dir.join(".."))
}
