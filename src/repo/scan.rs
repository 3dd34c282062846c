//! Listing of release entry files in the data repository.
//!
//! A release sandbox holds one `<id>.cif` file per entry, spread over a
//! hashed directory layout. The loader wants a flat path list, minus
//! entries queued for removal and anything on an explicit skip list.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

/// Reads a skip list: one entry id per line. Ids are lowercased and
/// completed to `<id>.cif` file names for direct comparison during the
/// scan.
pub fn load_skip_list(path: &Path) -> io::Result<HashSet<String>> {
    let reader = BufReader::new(File::open(path)?);
    let mut skip = HashSet::new();
    for line in reader.lines() {
        let id = line?.trim().to_lowercase();
        if !id.is_empty() {
            skip.insert(format!("{}.cif", id));
        }
    }
    info!("skip list holds {} entries", skip.len());
    Ok(skip)
}

/// Collects the current entry file paths under `root`.
///
/// Keeps files named `<4-char id>.cif`, skips any directory whose path
/// contains `REMOVE` (entries staged for withdrawal), and drops file
/// names present in `skip`. Unreadable directory entries are passed
/// over rather than failing the scan.
pub fn collect_entry_paths(root: &Path, skip: &HashSet<String>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|s| s.contains("REMOVE"))
        }) {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name.len() == 8 && name.ends_with(".cif") && !skip.contains(name) {
            paths.push(entry.into_path());
        }
    }
    info!("found {} entry files under {}", paths.len(), root.display());
    paths
}

/// Writes the path list, one path per line.
pub fn write_path_list(out: &Path, paths: &[PathBuf]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(out)?);
    for p in paths {
        writeln!(writer, "{}", p.display())?;
    }
    writer.flush()
}
