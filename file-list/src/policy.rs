use std::path::Path;

use indexmap::IndexSet;

/// Which entries of a listing may be chosen.
///
/// A filter either permits a set of file types, or (when that set is empty)
/// selects directories. The two modes are mutually exclusive and the filter
/// cannot change after construction.
///
/// File types are matched as raw suffixes of `"/" + file_name`, so `".txt"`,
/// `"txt"` and `"notes.txt"` all accept `notes.txt`. Note that `"txt"` also
/// accepts a file named `mytxt`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionFilter {
    permitted: IndexSet<String>,
}

impl SelectionFilter {
    /// Create a filter permitting the given file types. An empty list yields
    /// a directory-selecting filter.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permitted: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter that selects directories only.
    pub fn directories() -> Self {
        Self::default()
    }

    /// Permitted file type suffixes, in insertion order.
    pub fn permitted_extensions(&self) -> &IndexSet<String> {
        &self.permitted
    }

    /// `true` iff no file types are permitted.
    pub fn is_selecting_directories(&self) -> bool {
        self.permitted.is_empty()
    }

    /// Decide whether `path` may be chosen.
    ///
    /// `is_dir` must reflect what the filesystem reports; callers treat an
    /// unreadable or missing path as not a directory.
    pub fn is_selectable(&self, path: &Path, is_dir: bool) -> bool {
        if self.is_selecting_directories() {
            return is_dir;
        }
        if is_dir {
            return false;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let rooted = format!("/{name}");
        self.permitted.iter().any(|ext| rooted.ends_with(ext.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
