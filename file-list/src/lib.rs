#![deny(missing_docs)]
//! Navigation and selectability core for embeddable file-picker list views.
//!
//! The crate owns the state a file picker needs between frames: the directory
//! being shown, its sorted listing, and the row the user has highlighted but
//! not yet committed. It knows nothing about widgets. A hosting list view
//! feeds row events in ([`ListEvent`]) and reads rows out
//! ([`FileList::row_count`], [`FileList::describe_row`]); anything visual the
//! core wants done is queued as a [`HostRequest`].
//!
//! Selectability is decided by one policy ([`SelectionFilter`]): with
//! permitted file types only matching files can be chosen, without them only
//! directories can.
//!
//! ```no_run
//! use file_list::{FileListConfig, ListEvent};
//!
//! let mut list = FileListConfig::new()
//!     .file_types([".txt", ".md"])
//!     .on_selection(|sel| println!("picked {:?}", sel.paths))
//!     .build();
//! let _ = list.show("/home");
//! for i in 0..list.row_count() {
//!     if let Some(row) = list.describe_row(i) {
//!         println!("{} selectable={}", row.display_name, row.selectable);
//!     }
//! }
//! list.handle_event(ListEvent::NavigateUp);
//! ```

#[macro_use]
mod logging_macros;

mod core;
mod events;
mod file_list;
mod fs;
mod icons;
pub mod logging;
mod policy;
#[cfg(test)]
mod test_support;

pub use crate::core::{FileListConfig, FileListError, Selection};
pub use events::{ContextChange, EventOutcome, HostRequest, ListEvent};
pub use file_list::{FileList, ListEntry, RowInfo};
pub use fs::{FileSystem, FsEntry, FsMetadata, StdFileSystem, normalize_lexically};
pub use icons::{EntryKind, IconMatcher, IconRegistry, IconResolver, IconRule};
pub use policy::SelectionFilter;
