//! Dataset discovery: find the yearly weeks files under a data root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// A weeks dataset discovered under the data root.
#[derive(Debug)]
pub struct DatasetFile {
    pub path: PathBuf,
    /// File stem used for log lines, e.g. "weeks" or "weeks-2022"
    pub label: String,
}

/// Scan the data root for `weeks*.json` datasets, sorted by path.
///
/// The book table (`books*.json`) and any other JSON in the tree are
/// left alone.
pub fn scan_datasets(root: &Path) -> Vec<DatasetFile> {
    let mut datasets = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s,
            None => continue,
        };
        if !stem.starts_with("weeks") {
            continue;
        }

        datasets.push(DatasetFile {
            path: path.to_path_buf(),
            label: stem.to_string(),
        });
    }

    datasets.sort_by(|a, b| a.path.cmp(&b.path));
    datasets
}
