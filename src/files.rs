use std::fs;
use std::path::{Path, PathBuf};

/// List the PDF and TXT documents inside `dir`, sorted by path. The
/// extension filter is advisory only, mirroring a file picker's filter
/// hint; anything the user points the tool at still goes to the backend
/// unchecked.
pub fn scan_documents(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir() {
        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                    if ext.eq_ignore_ascii_case("pdf") || ext.eq_ignore_ascii_case("txt") {
                        files.push(path);
                    }
                }
            }
        }
    }

    files.sort();
    files
}
