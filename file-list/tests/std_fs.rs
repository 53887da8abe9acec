use std::path::{Path, PathBuf};

use file_list::{EventOutcome, FileListConfig, FileSystem, ListEvent, StdFileSystem};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    p.push(format!("file-list-{prefix}-{pid}-{t}"));
    p
}

fn sample_root(prefix: &str) -> PathBuf {
    let dir = unique_temp_dir(prefix);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("A")).unwrap();
    std::fs::write(dir.join("b.txt"), b"b").unwrap();
    std::fs::write(dir.join("a.txt"), b"a").unwrap();
    std::fs::write(dir.join("A").join("inner.txt"), b"inner").unwrap();
    dir
}

fn row_names(list: &file_list::FileList) -> Vec<String> {
    (0..list.row_count())
        .filter_map(|i| list.describe_row(i))
        .map(|r| r.display_name)
        .collect()
}

#[test]
fn std_fs_lists_immediate_entries() {
    let dir = sample_root("read_dir");
    let mut entries = StdFileSystem.read_dir(&dir).unwrap();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    let kinds: Vec<(&str, bool)> = entries.iter().map(|e| (e.name.as_str(), e.is_dir)).collect();
    assert_eq!(kinds, vec![("A", true), ("a.txt", false), ("b.txt", false)]);
    assert!(StdFileSystem.metadata(&dir.join("A")).unwrap().is_dir);
    assert!(StdFileSystem.metadata(&dir.join("missing")).is_err());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn browse_descend_and_ascend_on_disk() {
    let dir = sample_root("browse");
    let mut list = FileListConfig::new()
        .file_types([".txt"])
        .start_directory(&dir)
        .build();

    assert_eq!(row_names(&list), vec!["A", "a.txt", "b.txt"]);
    let selectable: Vec<bool> = (0..3)
        .filter_map(|i| list.describe_row(i))
        .map(|r| r.selectable)
        .collect();
    assert_eq!(selectable, vec![false, true, true]);

    assert_eq!(list.activate_row(0), EventOutcome::Navigated);
    assert_eq!(list.current_directory(), Some(dir.join("A").as_path()));
    assert_eq!(row_names(&list), vec!["inner.txt"]);

    assert_eq!(list.handle_event(ListEvent::NavigateUp), EventOutcome::Navigated);
    assert_eq!(list.current_directory(), Some(dir.as_path()));
    assert_eq!(row_names(&list), vec!["A", "a.txt", "b.txt"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn removed_directory_reloads_as_empty() {
    let dir = sample_root("removed");
    let mut list = FileListConfig::new().start_directory(dir.join("A")).build();
    assert_eq!(list.row_count(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
    list.reload();
    assert!(list.children().is_none());
    assert_eq!(list.row_count(), 0);
    assert!(list.listing_error().is_some());
}

#[test]
fn commit_on_disk_reports_full_path() {
    let dir = sample_root("commit");
    let picked = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    let sink = picked.clone();
    let mut list = FileListConfig::new()
        .file_types(["txt"])
        .on_selection(move |sel| sink.borrow_mut().extend(sel.paths))
        .start_directory(&dir)
        .build();

    let path = dir.join("a.txt");
    assert_eq!(
        list.handle_event(ListEvent::Activated(path.clone())),
        EventOutcome::Committed
    );
    assert_eq!(*picked.borrow(), vec![path]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[test]
fn symlinked_directory_is_navigable() {
    let dir = sample_root("symlink");
    std::os::unix::fs::symlink(dir.join("A"), dir.join("link")).unwrap();
    assert!(StdFileSystem.metadata(&dir.join("link")).unwrap().is_dir);
    let mut list = FileListConfig::new().start_directory(&dir).build();

    let idx = list.row_index_of(&dir.join("link")).unwrap();
    let row = list.describe_row(idx).unwrap();
    assert!(row.is_dir);
    assert!(row.selectable);
    assert_eq!(list.activate_row(idx), EventOutcome::Navigated);
    assert_eq!(list.current_directory(), Some(dir.join("link").as_path()));

    list.pop_directory();
    assert_eq!(list.current_directory(), Some(Path::new(&dir)));

    std::fs::remove_dir_all(&dir).unwrap();
}
