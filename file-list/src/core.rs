use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::events::ContextChange;
use crate::fs::{FileSystem, StdFileSystem};
use crate::icons::IconResolver;
use crate::policy::SelectionFilter;

pub(crate) type SelectionCallback = Box<dyn FnMut(Selection)>;
pub(crate) type CancelCallback = Box<dyn FnOnce()>;
pub(crate) type ContextCallback = Box<dyn FnMut(&ContextChange)>;
pub(crate) type DirectoryFilter = Box<dyn Fn(&Path) -> bool>;

/// Selection result containing the committed paths
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected filesystem paths
    pub paths: Vec<PathBuf>,
}

/// Errors reported by the file list.
///
/// None of these are fatal: the list stays usable after every one of them.
#[derive(Error, Debug)]
pub enum FileListError {
    /// The directory could not be listed (permission denied, vanished, ...)
    #[error("cannot list {}: {source}", .path.display())]
    ListingUnavailable {
        /// Directory that failed to list
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Navigation target is not an enterable directory
    #[error("not an enterable directory: {}", .0.display())]
    InvalidNavigationTarget(PathBuf),
    /// Nothing selectable is active, so there is nothing to commit
    #[error("no selectable entry is active")]
    NoSelection,
    /// The picker was dismissed without a commit
    #[error("cancelled")]
    Cancelled,
    /// The picker already committed or was cancelled
    #[error("picker already finished")]
    AlreadyFinished,
}

/// Construction-time configuration for a [`FileList`](crate::FileList).
///
/// Everything set here is fixed for the lifetime of the list.
///
/// ```
/// use file_list::FileListConfig;
///
/// let list = FileListConfig::new()
///     .file_types([".rs", ".toml"])
///     .directory_filter(|dir| !dir.ends_with("target"))
///     .on_selection(|sel| eprintln!("{:?}", sel.paths))
///     .on_cancel(|| eprintln!("cancelled"))
///     .build();
/// assert!(!list.filter().is_selecting_directories());
/// assert_eq!(list.row_count(), 0);
/// ```
pub struct FileListConfig {
    pub(crate) filter: SelectionFilter,
    pub(crate) directory_filter: Option<DirectoryFilter>,
    pub(crate) on_selection: Option<SelectionCallback>,
    pub(crate) on_cancel: Option<CancelCallback>,
    pub(crate) on_context_change: Option<ContextCallback>,
    pub(crate) fs: Box<dyn FileSystem>,
    pub(crate) icons: Option<Box<dyn IconResolver>>,
    pub(crate) start_dir: Option<PathBuf>,
}

impl Default for FileListConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FileListConfig {
    /// Create a configuration selecting directories, backed by `std::fs`.
    pub fn new() -> Self {
        Self {
            filter: SelectionFilter::directories(),
            directory_filter: None,
            on_selection: None,
            on_cancel: None,
            on_context_change: None,
            fs: Box::new(StdFileSystem),
            icons: None,
            start_dir: None,
        }
    }

    /// Permit files whose name ends with one of `types`. An empty list keeps
    /// directory-selection mode.
    pub fn file_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = SelectionFilter::new(types);
        self
    }

    /// Use a prepared selection filter.
    pub fn filter(mut self, filter: SelectionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Restrict which directories may be entered.
    pub fn directory_filter(mut self, f: impl Fn(&Path) -> bool + 'static) -> Self {
        self.directory_filter = Some(Box::new(f));
        self
    }

    /// Called once with the committed paths.
    pub fn on_selection(mut self, f: impl FnMut(Selection) + 'static) -> Self {
        self.on_selection = Some(Box::new(f));
        self
    }

    /// Called at most once if the picker is dismissed without a commit.
    pub fn on_cancel(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }

    /// Called whenever the active context may have changed.
    pub fn on_context_change(mut self, f: impl FnMut(&ContextChange) + 'static) -> Self {
        self.on_context_change = Some(Box::new(f));
        self
    }

    /// Replace the filesystem collaborator.
    pub fn file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self
    }

    /// Attach an icon resolver used to decorate rows.
    pub fn icons(mut self, icons: impl IconResolver + 'static) -> Self {
        self.icons = Some(Box::new(icons));
        self
    }

    /// Directory to show right after construction. Ignored if it cannot be
    /// entered.
    pub fn start_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }
}

impl std::fmt::Debug for FileListConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileListConfig")
            .field("filter", &self.filter)
            .field("directory_filter", &self.directory_filter.is_some())
            .field("icons", &self.icons.is_some())
            .field("start_dir", &self.start_dir)
            .finish_non_exhaustive()
    }
}
