use std::path::PathBuf;

/// Input events for driving a [`FileList`](crate::FileList).
///
/// These are emitted by the hosting list view and applied with
/// [`FileList::handle_event`](crate::FileList::handle_event). They carry
/// plain paths so the core stays free of UI framework types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListEvent {
    /// A row was activated (double-click, Enter).
    Activated(PathBuf),
    /// A row received the highlight.
    Highlighted(PathBuf),
    /// Ascend to the parent directory.
    NavigateUp,
    /// Show a specific directory.
    NavigateTo(PathBuf),
    /// Re-read the current directory.
    Reload,
    /// Commit the active context (the dialog's "Select" button).
    Confirm,
    /// Dismiss the picker without committing.
    Cancel,
}

/// What applying a [`ListEvent`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing changed.
    Ignored,
    /// A new directory is shown.
    Navigated,
    /// The highlighted row changed.
    Highlighted,
    /// The listing was re-read in place.
    Reloaded,
    /// A selection was committed.
    Committed,
    /// The picker was cancelled.
    Cancelled,
}

/// Work the core asks the row host to perform.
///
/// Drained with [`FileList::drain_host_requests`](crate::FileList::drain_host_requests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostRequest {
    /// Row data changed; re-query `row_count` / `describe_row`.
    ReloadRows,
    /// Scroll the list back to its first row.
    ScrollToTop,
    /// Drop the visual highlight from whatever row has it.
    ClearHighlight,
    /// Close the window hosting the picker.
    Close,
}

/// Payload of the context-change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextChange {
    /// Highlighted entry if any, else the current directory.
    pub active: Option<PathBuf>,
    /// Whether committing `active` is currently allowed.
    pub can_commit: bool,
}
