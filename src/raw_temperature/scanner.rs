// Licensed under the Open Software License version 3.0
use super::format::is_raw_temperature_file;
use std::path::{Path, PathBuf};
use tokio::fs::read_dir;
use tokio_stream::{wrappers::ReadDirStream, StreamExt};

/// Lists `.rawtemp` files inside `base_path`, oldest file name first
pub async fn get_all_raw_temperature_files(base_path: &Path) -> Vec<PathBuf> {
    let mut list: Vec<PathBuf> = Vec::new();
    // Return empty list if base_path is not a directory
    if !base_path.is_dir() {
        tracing::error!("{} is not a directory", base_path.display());
        return list;
    }
    tracing::trace!("Scanning directory: {}", base_path.display());
    let mut entries = match read_dir(base_path).await {
        Ok(entries) => ReadDirStream::new(entries),
        Err(error) => {
            tracing::warn!("Failed to read {}: {}", base_path.display(), error);
            return list;
        }
    };
    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if is_raw_temperature_file(&path) {
                    list.push(path);
                }
            }
            Err(error) => tracing::warn!("Skipping directory entry: {}", error),
        }
    }
    // Names are timestamps or zero-padded counters
    list.sort_by(|a, b| {
        let a = a.file_name().unwrap_or_default();
        let b = b.file_name().unwrap_or_default();
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    });
    list
}
