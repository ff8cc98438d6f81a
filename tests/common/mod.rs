#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Write `content` to `base/rel`, creating parent directories
pub fn write_file(base: &Path, rel: &str, content: &str) -> PathBuf {
    let path = base.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

/// A source catalog whose messages were extracted from `refs`
pub fn po_with_refs(refs: &[&str]) -> String {
    let ref_lines: Vec<String> = refs.iter().map(|r| format!("#: {r}")).collect();
    format!(
        "msgid \"\"\nmsgstr \"\"\n\n{}\nmsgid \"test.id\"\nmsgstr \"test\"\n",
        ref_lines.join("\n")
    )
}

pub const COMPILED: &str = "export default {}\n";

/// Every path under `root` (directories included) with file contents, sorted
pub fn snapshot(root: &Path) -> Vec<(String, Option<Vec<u8>>)> {
    let mut items: Vec<_> = WalkDir::new(root)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            let content = e
                .file_type()
                .is_file()
                .then(|| fs::read(e.path()).unwrap());
            (rel, content)
        })
        .collect();
    items.sort();
    items
}

/// Copy a directory tree
pub fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from) {
        let entry = entry.unwrap();
        let target = to.join(entry.path().strip_prefix(from).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}
