use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::fs::{FileSystem, FsEntry, FsMetadata};

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    denied: BTreeSet<PathBuf>,
}

/// In-memory filesystem shared between a test and the list under test.
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryFs {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryFs {
    pub(crate) fn new() -> Self {
        let fs = Self::default();
        fs.add_dir("/");
        fs
    }

    pub(crate) fn add_dir(&self, path: impl AsRef<Path>) {
        let mut tree = self.tree.borrow_mut();
        for anc in path.as_ref().ancestors() {
            if !anc.as_os_str().is_empty() {
                tree.dirs.insert(anc.to_path_buf());
            }
        }
    }

    pub(crate) fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.tree.borrow_mut().files.insert(path.to_path_buf());
    }

    pub(crate) fn deny(&self, path: impl AsRef<Path>) {
        self.tree
            .borrow_mut()
            .denied
            .insert(path.as_ref().to_path_buf());
    }

    pub(crate) fn allow(&self, path: impl AsRef<Path>) {
        self.tree.borrow_mut().denied.remove(path.as_ref());
    }

    pub(crate) fn remove_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut tree = self.tree.borrow_mut();
        tree.dirs.retain(|d| !d.starts_with(path));
        tree.files.retain(|f| !f.starts_with(path));
    }
}

impl FileSystem for MemoryFs {
    fn read_dir(&self, dir: &Path) -> std::io::Result<Vec<FsEntry>> {
        let tree = self.tree.borrow();
        if tree.denied.contains(dir) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        if !tree.dirs.contains(dir) {
            return Err(Error::new(ErrorKind::NotFound, "no such directory"));
        }
        let is_child = |p: &PathBuf| p.parent() == Some(dir);
        let dirs = tree.dirs.iter().filter(|p| is_child(*p)).map(|p| (p, true));
        let files = tree.files.iter().filter(|p| is_child(*p)).map(|p| (p, false));
        // Reverse so callers cannot rely on the listing order.
        let mut out: Vec<FsEntry> = dirs
            .chain(files)
            .map(|(p, is_dir)| FsEntry {
                name: p
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                path: p.clone(),
                is_dir,
            })
            .collect();
        out.reverse();
        Ok(out)
    }

    fn metadata(&self, path: &Path) -> std::io::Result<FsMetadata> {
        let tree = self.tree.borrow();
        if tree.dirs.contains(path) {
            Ok(FsMetadata { is_dir: true })
        } else if tree.files.contains(path) {
            Ok(FsMetadata { is_dir: false })
        } else {
            Err(Error::new(ErrorKind::NotFound, "no such file"))
        }
    }
}

/// `/root` containing `b.txt`, `A/` and `a.txt`, plus `A/inner.txt`.
pub(crate) fn sample_tree() -> MemoryFs {
    let fs = MemoryFs::new();
    fs.add_file("/root/b.txt");
    fs.add_dir("/root/A");
    fs.add_file("/root/a.txt");
    fs.add_file("/root/A/inner.txt");
    fs
}
