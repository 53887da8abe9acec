use std::path::{Path, PathBuf};

use crate::core::{
    CancelCallback, ContextCallback, DirectoryFilter, FileListConfig, FileListError, Selection,
    SelectionCallback,
};
use crate::events::{ContextChange, EventOutcome, HostRequest, ListEvent};
use crate::fs::{FileSystem, parent_directory};
use crate::icons::{EntryKind, IconResolver};
use crate::policy::SelectionFilter;

/// One entry of the current directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    /// Full path (current directory joined with the entry name)
    pub path: PathBuf,
    /// Last path component
    pub name: String,
    /// Whether the entry resolves to a directory
    pub is_dir: bool,
}

/// Row data handed to the list host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowInfo {
    /// Full path of the entry
    pub path: PathBuf,
    /// Text to show (last path component)
    pub display_name: String,
    /// Whether the entry resolves to a directory
    pub is_dir: bool,
    /// Whether the selection filter accepts this entry
    pub selectable: bool,
    /// Whether this row holds the highlight
    pub highlighted: bool,
    /// Icon identifier from the configured [`IconResolver`], if any
    pub icon: Option<String>,
}

/// Navigation and selectability state of one file picker.
///
/// States are *empty* (no directory entered yet), *listing* a directory, and
/// *listing with a highlighted row*. `show` and `pop_directory` move between
/// listings, `on_row_highlighted` adds a highlight, and every reload drops the
/// highlight again.
///
/// All operations are synchronous and meant to be called from the thread that
/// owns the hosting view.
pub struct FileList {
    current_dir: Option<PathBuf>,
    children: Option<Vec<ListEntry>>,
    highlighted: Option<PathBuf>,
    filter: SelectionFilter,
    directory_filter: Option<DirectoryFilter>,
    on_selection: Option<SelectionCallback>,
    on_cancel: Option<CancelCallback>,
    on_context_change: Option<ContextCallback>,
    fs: Box<dyn FileSystem>,
    icons: Option<Box<dyn IconResolver>>,
    host_requests: Vec<HostRequest>,
    listing_error: Option<String>,
    finished: bool,
    result: Option<Result<Selection, FileListError>>,
}

impl FileListConfig {
    /// Build the file list. It starts empty unless a start directory was
    /// configured and could be entered.
    pub fn build(self) -> FileList {
        FileList::from_config(self)
    }
}

impl FileList {
    /// Create a list with the given filter, backed by `std::fs` and without
    /// callbacks.
    pub fn new(filter: SelectionFilter) -> Self {
        FileListConfig::new().filter(filter).build()
    }

    fn from_config(config: FileListConfig) -> Self {
        let FileListConfig {
            filter,
            directory_filter,
            on_selection,
            on_cancel,
            on_context_change,
            fs,
            icons,
            start_dir,
        } = config;
        let mut list = Self {
            current_dir: None,
            children: None,
            highlighted: None,
            filter,
            directory_filter,
            on_selection,
            on_cancel,
            on_context_change,
            fs,
            icons,
            host_requests: Vec::new(),
            listing_error: None,
            finished: false,
            result: None,
        };
        if let Some(dir) = start_dir {
            let _ = list.show(dir);
        }
        list
    }

    /// Directory being listed, `None` before any directory was entered.
    pub fn current_directory(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Sorted listing of the current directory; `None` when there is no
    /// current directory or it could not be read.
    pub fn children(&self) -> Option<&[ListEntry]> {
        self.children.as_deref()
    }

    /// Highlighted (not yet committed) entry.
    pub fn highlighted_entry(&self) -> Option<&Path> {
        self.highlighted.as_deref()
    }

    /// The highlighted entry if any, else the current directory.
    pub fn active_context(&self) -> Option<&Path> {
        self.highlighted.as_deref().or(self.current_dir.as_deref())
    }

    /// Whether the active context may be committed right now.
    pub fn has_valid_context(&self) -> bool {
        self.active_context()
            .is_some_and(|path| self.is_selectable(path))
    }

    /// Apply the selection filter to `path`.
    ///
    /// Entries of the current listing reuse the kind recorded at listing
    /// time; other paths ask the filesystem, and anything unreadable counts
    /// as not a directory.
    pub fn is_selectable(&self, path: &Path) -> bool {
        self.filter.is_selectable(path, self.resolve_is_dir(path))
    }

    /// The selection filter fixed at construction.
    pub fn filter(&self) -> &SelectionFilter {
        &self.filter
    }

    /// Description of the last listing failure, cleared by the next
    /// successful reload.
    pub fn listing_error(&self) -> Option<&str> {
        self.listing_error.as_deref()
    }

    /// Whether the picker already committed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Take the final result: the committed selection, or
    /// [`FileListError::Cancelled`].
    pub fn take_result(&mut self) -> Option<Result<Selection, FileListError>> {
        self.result.take()
    }

    /// Take the pending requests for the row host, oldest first.
    pub fn drain_host_requests(&mut self) -> Vec<HostRequest> {
        std::mem::take(&mut self.host_requests)
    }

    /// Re-read the current directory.
    ///
    /// A listing failure leaves `children` as `None` instead of returning an
    /// error. Whatever happens, the reload ends by dropping the highlight,
    /// queueing [`HostRequest::ReloadRows`], [`HostRequest::ScrollToTop`] and
    /// [`HostRequest::ClearHighlight`], and firing one context-change
    /// notification.
    pub fn reload(&mut self) {
        let finalizer = ReloadFinalizer { list: self };
        let list = &mut *finalizer.list;

        let Some(dir) = list.current_dir.clone() else {
            list.children = None;
            list.listing_error = None;
            return;
        };

        match list.list_children(&dir) {
            Ok(children) => {
                list_debug!(
                    event = "listing.reloaded",
                    dir = %dir.display(),
                    entries = children.len(),
                    "listing reloaded"
                );
                list.children = Some(children);
                list.listing_error = None;
            }
            Err(err) => {
                list_warn!(
                    event = "listing.unavailable",
                    dir = %dir.display(),
                    error = %err,
                    "listing unavailable"
                );
                list.children = None;
                list.listing_error = Some(err.to_string());
            }
        }
    }

    /// Enter `dir` and list it.
    ///
    /// Leaves the state untouched and returns
    /// [`FileListError::InvalidNavigationTarget`] when `dir` is not a
    /// directory or the configured directory filter rejects it.
    pub fn show(&mut self, dir: impl AsRef<Path>) -> Result<(), FileListError> {
        let dir = dir.as_ref();
        if !self.fs.metadata(dir).is_ok_and(|m| m.is_dir) {
            list_trace!(
                event = "navigation.rejected",
                dir = %dir.display(),
                reason = "not a directory"
            );
            return Err(FileListError::InvalidNavigationTarget(dir.to_path_buf()));
        }
        if let Some(accepts) = &self.directory_filter {
            if !accepts(dir) {
                list_trace!(
                    event = "navigation.rejected",
                    dir = %dir.display(),
                    reason = "directory filter"
                );
                return Err(FileListError::InvalidNavigationTarget(dir.to_path_buf()));
            }
        }
        self.current_dir = Some(dir.to_path_buf());
        self.reload();
        Ok(())
    }

    /// Ascend to the parent of the current directory and list it.
    ///
    /// The parent is computed lexically, so at a filesystem root the list
    /// stays on the root and simply reloads. Without a current directory this
    /// only reloads the empty state.
    pub fn pop_directory(&mut self) {
        self.current_dir = self.current_dir.as_deref().map(parent_directory);
        self.reload();
    }

    /// A row was activated: descend into directories, commit selectable
    /// files, ignore everything else. Paths outside the current listing are
    /// ignored.
    pub fn on_row_activated(&mut self, path: &Path) -> EventOutcome {
        let Some(is_dir) = self.listed_entry(path).map(|e| e.is_dir) else {
            list_trace!(
                event = "activation.rejected",
                path = %path.display(),
                "activation outside current listing"
            );
            return EventOutcome::Ignored;
        };
        if is_dir {
            return match self.show(path) {
                Ok(()) => EventOutcome::Navigated,
                Err(_) => EventOutcome::Ignored,
            };
        }
        if self.finished || !self.filter.is_selectable(path, false) {
            return EventOutcome::Ignored;
        }
        self.commit(path.to_path_buf());
        EventOutcome::Committed
    }

    /// A row received the highlight. Paths outside the current listing are
    /// ignored.
    pub fn on_row_highlighted(&mut self, path: &Path) -> EventOutcome {
        if self.row_index_of(path).is_none() {
            list_trace!(
                event = "highlight.rejected",
                path = %path.display(),
                "highlight outside current listing"
            );
            return EventOutcome::Ignored;
        }
        self.highlighted = Some(path.to_path_buf());
        self.notify_context_change();
        EventOutcome::Highlighted
    }

    /// Index-based form of [`on_row_activated`](Self::on_row_activated).
    pub fn activate_row(&mut self, index: usize) -> EventOutcome {
        match self.row_path(index) {
            Some(path) => self.on_row_activated(&path),
            None => EventOutcome::Ignored,
        }
    }

    /// Index-based form of [`on_row_highlighted`](Self::on_row_highlighted).
    pub fn highlight_row(&mut self, index: usize) -> EventOutcome {
        match self.row_path(index) {
            Some(path) => self.on_row_highlighted(&path),
            None => EventOutcome::Ignored,
        }
    }

    /// Number of rows in the current listing.
    pub fn row_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    /// Describe the row at `index`; `None` past [`row_count`](Self::row_count).
    pub fn describe_row(&self, index: usize) -> Option<RowInfo> {
        let entry = self.children.as_ref()?.get(index)?;
        let icon = self
            .icons
            .as_ref()
            .and_then(|r| r.icon_for(&entry.name, EntryKind::from_is_dir(entry.is_dir)));
        Some(RowInfo {
            path: entry.path.clone(),
            display_name: entry.name.clone(),
            is_dir: entry.is_dir,
            selectable: self.filter.is_selectable(&entry.path, entry.is_dir),
            highlighted: self.highlighted.as_deref() == Some(entry.path.as_path()),
            icon,
        })
    }

    /// Row index of `path` in the current listing.
    pub fn row_index_of(&self, path: &Path) -> Option<usize> {
        self.children.as_ref()?.iter().position(|e| e.path == path)
    }

    /// Commit the active context.
    ///
    /// Fails with [`FileListError::NoSelection`] when the active context is
    /// missing or not selectable, and with [`FileListError::AlreadyFinished`]
    /// after a previous commit or cancel.
    pub fn confirm(&mut self) -> Result<(), FileListError> {
        if self.finished {
            return Err(FileListError::AlreadyFinished);
        }
        let active = self
            .active_context()
            .filter(|path| self.is_selectable(path))
            .map(Path::to_path_buf)
            .ok_or(FileListError::NoSelection)?;
        self.commit(active);
        Ok(())
    }

    /// Dismiss the picker without a commit. The cancel callback runs at most
    /// once.
    pub fn cancel(&mut self) -> Result<(), FileListError> {
        if self.finished {
            return Err(FileListError::AlreadyFinished);
        }
        list_debug!(event = "picker.cancelled", "picker cancelled");
        self.finished = true;
        self.result = Some(Err(FileListError::Cancelled));
        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }
        self.request(HostRequest::Close);
        Ok(())
    }

    /// Apply one host event.
    pub fn handle_event(&mut self, ev: ListEvent) -> EventOutcome {
        match ev {
            ListEvent::Activated(path) => self.on_row_activated(&path),
            ListEvent::Highlighted(path) => self.on_row_highlighted(&path),
            ListEvent::NavigateUp => {
                let before = self.current_dir.clone();
                self.pop_directory();
                if before == self.current_dir {
                    EventOutcome::Reloaded
                } else {
                    EventOutcome::Navigated
                }
            }
            ListEvent::NavigateTo(dir) => match self.show(&dir) {
                Ok(()) => EventOutcome::Navigated,
                Err(_) => EventOutcome::Ignored,
            },
            ListEvent::Reload => {
                self.reload();
                EventOutcome::Reloaded
            }
            ListEvent::Confirm => match self.confirm() {
                Ok(()) => EventOutcome::Committed,
                Err(_) => EventOutcome::Ignored,
            },
            ListEvent::Cancel => match self.cancel() {
                Ok(()) => EventOutcome::Cancelled,
                Err(_) => EventOutcome::Ignored,
            },
        }
    }

    fn commit(&mut self, path: PathBuf) {
        list_debug!(
            event = "selection.committed",
            path = %path.display(),
            "selection committed"
        );
        let selection = Selection { paths: vec![path] };
        self.finished = true;
        self.result = Some(Ok(selection.clone()));
        if let Some(on_selection) = self.on_selection.as_mut() {
            on_selection(selection);
        }
        self.request(HostRequest::Close);
    }

    fn list_children(&self, dir: &Path) -> Result<Vec<ListEntry>, FileListError> {
        let raw = self
            .fs
            .read_dir(dir)
            .map_err(|source| FileListError::ListingUnavailable {
                path: dir.to_path_buf(),
                source,
            })?;
        let mut out: Vec<ListEntry> = raw
            .into_iter()
            .filter_map(|e| {
                let name = e.path.file_name()?;
                Some(ListEntry {
                    path: dir.join(name),
                    name: name.to_string_lossy().into_owned(),
                    is_dir: e.is_dir,
                })
            })
            .collect();
        // Ordinal order of the raw names: "A" < "a.txt" < "b.txt".
        out.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(out)
    }

    fn listed_entry(&self, path: &Path) -> Option<&ListEntry> {
        self.children.as_ref()?.iter().find(|e| e.path == path)
    }

    fn resolve_is_dir(&self, path: &Path) -> bool {
        match self.listed_entry(path) {
            Some(entry) => entry.is_dir,
            None => self.fs.metadata(path).is_ok_and(|m| m.is_dir),
        }
    }

    fn row_path(&self, index: usize) -> Option<PathBuf> {
        self.children.as_ref()?.get(index).map(|e| e.path.clone())
    }

    fn request(&mut self, req: HostRequest) {
        if !self.host_requests.contains(&req) {
            self.host_requests.push(req);
        }
    }

    fn notify_context_change(&mut self) {
        let change = ContextChange {
            active: self.active_context().map(Path::to_path_buf),
            can_commit: !self.finished && self.has_valid_context(),
        };
        if let Some(on_change) = self.on_context_change.as_mut() {
            on_change(&change);
        }
    }

    fn finish_reload(&mut self) {
        self.highlighted = None;
        self.request(HostRequest::ReloadRows);
        self.request(HostRequest::ScrollToTop);
        self.request(HostRequest::ClearHighlight);
        self.notify_context_change();
    }
}

/// Runs the reload epilogue on every exit path of [`FileList::reload`].
struct ReloadFinalizer<'a> {
    list: &'a mut FileList,
}

impl Drop for ReloadFinalizer<'_> {
    fn drop(&mut self) {
        self.list.finish_reload();
    }
}

impl std::fmt::Debug for FileList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileList")
            .field("current_dir", &self.current_dir)
            .field("children", &self.children)
            .field("highlighted", &self.highlighted)
            .field("filter", &self.filter)
            .field("listing_error", &self.listing_error)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
