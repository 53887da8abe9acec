use std::path::Path;

/// Kind of filesystem entry for decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory.
    Dir,
    /// File.
    File,
}

impl EntryKind {
    pub(crate) fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Dir } else { Self::File }
    }
}

/// Icon-resolution collaborator.
///
/// Consulted once per described row. Implementations must answer quickly
/// (cache internally if lookups are expensive); `None` means no icon.
pub trait IconResolver {
    /// Icon identifier for an entry with the given file name.
    fn icon_for(&self, name: &str, kind: EntryKind) -> Option<String>;
}

impl<F> IconResolver for F
where
    F: Fn(&str, EntryKind) -> Option<String>,
{
    fn icon_for(&self, name: &str, kind: EntryKind) -> Option<String> {
        self(name, kind)
    }
}

/// Matcher for an icon rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconMatcher {
    /// Match any directory.
    AnyDir,
    /// Match any file.
    AnyFile,
    /// Match a file extension (case-insensitive, without leading dot).
    Extension(String),
}

impl IconMatcher {
    fn matches(&self, name: &str, kind: EntryKind) -> bool {
        match self {
            Self::AnyDir => matches!(kind, EntryKind::Dir),
            Self::AnyFile => matches!(kind, EntryKind::File),
            Self::Extension(ext) => {
                if !matches!(kind, EntryKind::File) {
                    return false;
                }
                Path::new(name)
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|a| a.eq_ignore_ascii_case(ext))
            }
        }
    }
}

/// A single icon rule (matcher + icon identifier).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconRule {
    /// Matching predicate.
    pub matcher: IconMatcher,
    /// Icon identifier handed to the host (a glyph, asset name, ...).
    pub icon: String,
}

/// Rule-based [`IconResolver`].
///
/// Rules are evaluated in insertion order. The first matching rule wins, so
/// push specific extensions before the `AnyFile` fallback.
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    /// Ordered rule list.
    pub rules: Vec<IconRule>,
}

impl IconRegistry {
    /// Add a rule.
    pub fn push_rule(&mut self, matcher: IconMatcher, icon: impl Into<String>) {
        self.rules.push(IconRule {
            matcher,
            icon: icon.into(),
        });
    }

    /// Convenience: icon for all directories.
    pub fn push_dir_icon(&mut self, icon: impl Into<String>) {
        self.push_rule(IconMatcher::AnyDir, icon);
    }

    /// Convenience: icon for all files.
    pub fn push_file_icon(&mut self, icon: impl Into<String>) {
        self.push_rule(IconMatcher::AnyFile, icon);
    }

    /// Convenience: icon for one extension (case-insensitive, without leading dot).
    pub fn push_extension_icon(&mut self, ext: impl AsRef<str>, icon: impl Into<String>) {
        let ext = ext.as_ref().trim_start_matches('.').to_lowercase();
        self.push_rule(IconMatcher::Extension(ext), icon);
    }

    /// Resolve an icon for an entry.
    pub fn resolve(&self, name: &str, kind: EntryKind) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.matcher.matches(name, kind))
            .map(|r| r.icon.as_str())
    }
}

impl IconResolver for IconRegistry {
    fn icon_for(&self, name: &str, kind: EntryKind) -> Option<String> {
        self.resolve(name, kind).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_insensitive() {
        let mut reg = IconRegistry::default();
        reg.push_extension_icon(".PNG", "image");
        assert_eq!(reg.resolve("a.png", EntryKind::File), Some("image"));
        assert_eq!(reg.resolve("a.PNG", EntryKind::File), Some("image"));
        assert!(reg.resolve("a.png", EntryKind::Dir).is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut reg = IconRegistry::default();
        reg.push_dir_icon("folder");
        reg.push_extension_icon("txt", "text");
        reg.push_file_icon("file");
        assert_eq!(reg.resolve("a.txt", EntryKind::File), Some("text"));
        assert_eq!(reg.resolve("a.bin", EntryKind::File), Some("file"));
        assert_eq!(reg.resolve("a.txt", EntryKind::Dir), Some("folder"));
    }

    #[test]
    fn closures_act_as_resolvers() {
        let r = |name: &str, _kind: EntryKind| Some(format!("icon:{name}"));
        assert_eq!(r.icon_for("x", EntryKind::File).as_deref(), Some("icon:x"));
    }
}
