//! Navigation generated from the docs directory.

use super::is_markdown;
use crate::config::section::NavigationNode;
use crate::utils::path::to_slash;
use jwalk::WalkDir;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Index documents, listed first in their directory.
const INDEX_NAMES: &[&str] = &["index.md", "README.md"];

/// Every markdown document under `docs_dir`, as sorted `/`-separated paths
/// relative to it. Hidden files and directories are skipped.
pub fn collect_docs(docs_dir: &Path) -> io::Result<Vec<String>> {
    if !docs_dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("docs directory `{}` not found", docs_dir.display()),
        ));
    }

    let mut docs: Vec<String> = WalkDir::new(docs_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_markdown(path))
        .filter_map(|path| path.strip_prefix(docs_dir).ok().map(to_slash))
        .collect();
    docs.sort();
    Ok(docs)
}

/// Build a navigation tree from `docs_dir`.
///
/// In each directory the index document comes first, then files and
/// subdirectories alphabetically. Subdirectories become sections titled
/// after the directory name.
pub fn scan_docs(docs_dir: &Path) -> io::Result<Vec<NavigationNode>> {
    let mut root = DirTree::default();
    for doc in collect_docs(docs_dir)? {
        root.insert(&doc);
    }
    Ok(root.into_nodes())
}

#[derive(Debug, Default)]
struct DirTree {
    /// File name -> path relative to the docs root.
    files: BTreeMap<String, String>,
    dirs: BTreeMap<String, DirTree>,
}

enum Entry {
    File(String),
    Dir(String, DirTree),
}

impl DirTree {
    fn insert(&mut self, path: &str) {
        let mut node = self;
        let mut parts = path.split('/').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                node.files.insert(part.to_string(), path.to_string());
            } else {
                node = node.dirs.entry(part.to_string()).or_default();
            }
        }
    }

    fn into_nodes(self) -> Vec<NavigationNode> {
        let mut entries: Vec<(String, Entry)> = self
            .files
            .into_iter()
            .map(|(name, path)| (name, Entry::File(path)))
            .chain(
                self.dirs
                    .into_iter()
                    .map(|(name, tree)| (name.clone(), Entry::Dir(name, tree))),
            )
            .collect();
        entries.sort_by(|(a, _), (b, _)| index_rank(a).cmp(&index_rank(b)).then_with(|| a.cmp(b)));

        entries
            .into_iter()
            .map(|(_, entry)| match entry {
                Entry::File(path) => NavigationNode::page(None, path),
                Entry::Dir(name, tree) => NavigationNode::section(dir_title(&name), tree.into_nodes()),
            })
            .collect()
    }
}

fn index_rank(name: &str) -> usize {
    INDEX_NAMES
        .iter()
        .position(|index| *index == name)
        .unwrap_or(INDEX_NAMES.len())
}

/// Section title for a directory: `-`/`_` become spaces, and an
/// all-lowercase name gets its first letter capitalized.
fn dir_title(name: &str) -> String {
    let title = name.replace(['-', '_'], " ");
    if title.chars().any(char::is_uppercase) {
        return title;
    }
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => title,
    }
}
