//! Minimal line-based host for the file list.
//!
//! ```text
//! cargo run -p file-list --example list_dir -- [DIR] [EXT...]
//! ```
//!
//! Commands: `<n>` activate row, `h <n>` highlight row, `..` go up,
//! `ok` commit the active context, `q` cancel.

use std::io::{self, BufRead, Write};

use file_list::{FileList, FileListConfig, HostRequest, IconRegistry, ListEvent};

fn print_rows(list: &FileList) {
    match list.current_directory() {
        Some(dir) => println!("== {}", dir.display()),
        None => println!("== (no directory)"),
    }
    if let Some(err) = list.listing_error() {
        println!("   ({err})");
    }
    for i in 0..list.row_count() {
        let Some(row) = list.describe_row(i) else { break };
        let mark = if row.highlighted { '>' } else { ' ' };
        let state = if row.selectable { "" } else { "  (disabled)" };
        let icon = row.icon.as_deref().unwrap_or("     ");
        println!("{mark}{i:>4} {icon} {}{state}", row.display_name);
    }
}

fn main() {
    file_list::logging::init_tracing();

    let mut args = std::env::args().skip(1);
    let start = args
        .next()
        .map(Into::into)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| ".".into());
    let types: Vec<String> = args.collect();

    let mut icons = IconRegistry::default();
    icons.push_dir_icon("[dir]");
    icons.push_file_icon("     ");

    let mut list = FileListConfig::new()
        .file_types(types)
        .icons(icons)
        .on_selection(|sel| {
            for p in &sel.paths {
                println!("selected: {}", p.display());
            }
        })
        .on_cancel(|| println!("cancelled"))
        .on_context_change(|c| {
            if let Some(active) = &c.active {
                println!("-- context: {} (commit {})", active.display(), c.can_commit);
            }
        })
        .start_directory(start)
        .build();

    let stdin = io::stdin();
    loop {
        let requests = list.drain_host_requests();
        if requests.contains(&HostRequest::Close) {
            break;
        }
        if requests.contains(&HostRequest::ReloadRows) {
            print_rows(&list);
        }
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            let _ = list.cancel();
            break;
        }
        let line = line.trim();
        let event = match line {
            ".." => Some(ListEvent::NavigateUp),
            "ok" => Some(ListEvent::Confirm),
            "q" => Some(ListEvent::Cancel),
            "r" => Some(ListEvent::Reload),
            _ => None,
        };
        if let Some(event) = event {
            println!("{:?}", list.handle_event(event));
            continue;
        }
        if let Some(n) = line.strip_prefix("h ").and_then(|n| n.trim().parse().ok()) {
            println!("{:?}", list.highlight_row(n));
            print_rows(&list);
        } else if let Ok(n) = line.parse() {
            println!("{:?}", list.activate_row(n));
        } else {
            println!("unknown command: {line}");
        }
    }
}
