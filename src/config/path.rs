//! Module for searching for denshacon config files

use std::{
    fs::{self, DirEntry},
    path::PathBuf,
};

/// Base system fallback path to use if one cannot be found with XDG
const FALLBACK_BASE_PATH: &str = "/usr/share/denshacon";

/// Returns the base path for configuration data
pub fn get_base_path() -> PathBuf {
    let Ok(base_dirs) = xdg::BaseDirectories::with_prefix("denshacon") else {
        log::warn!("Unable to determine config base path. Using fallback path.");
        return PathBuf::from(FALLBACK_BASE_PATH);
    };

    // Get the data directories in preference order
    let data_dirs = base_dirs.get_data_dirs();
    for dir in data_dirs {
        if dir.exists() {
            return dir;
        }
    }

    log::warn!("Config base path not found. Using fallback path.");
    PathBuf::from(FALLBACK_BASE_PATH)
}

/// Returns a list of directories in load order to find device profiles.
/// E.g. ["/etc/denshacon/devices.d", "/usr/share/denshacon/devices"]
pub fn get_devices_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("./rootfs/usr/share/denshacon/devices"),
        PathBuf::from("/etc/denshacon/devices.d"),
        get_base_path().join("devices"),
    ]
}

/// Returns a list of file paths for the given directories sorted by filename across
/// all given directories. The filter argument is a closure that should return
/// `true` for any files that should be included in the final results.
pub fn get_multidir_sorted_files<F>(paths: &[PathBuf], filter: F) -> Vec<PathBuf>
where
    F: Fn(&DirEntry) -> bool,
{
    // Look for files in the given locations
    let mut file_entries: Vec<DirEntry> = paths
        .iter()
        .flat_map(|path| {
            log::trace!("Checking {path:?} for files");
            let files = match fs::read_dir(path) {
                Ok(files) => files,
                Err(e) => {
                    log::debug!("Unable to read directory: {path:?}: {e}");
                    return vec![];
                }
            };
            files
                .filter_map(|r| {
                    let Ok(entry) = r else { return None };
                    if filter(&entry) {
                        Some(entry)
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();
    log::trace!("Got file entries: {file_entries:?}");

    // Sort by file name, then by directory priority
    file_entries.sort_by(|a, b| {
        let file_name_a = a.file_name();
        let file_name_b = b.file_name();
        if file_name_a != file_name_b {
            return file_name_a.cmp(&file_name_b);
        }

        let directory_priority = |entry: &DirEntry| {
            let path = entry.path();
            path.parent()
                .and_then(|dir| {
                    paths
                        .iter()
                        .position(|base_path| base_path.as_os_str() == dir.as_os_str())
                })
                .unwrap_or(10)
        };

        directory_priority(a).cmp(&directory_priority(b))
    });

    file_entries.into_iter().map(|entry| entry.path()).collect()
}

/// Returns all YAML device profile paths in load order
pub fn get_device_profile_paths() -> Vec<PathBuf> {
    get_multidir_sorted_files(&get_devices_paths(), |entry| {
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or_default();
        let name = entry.file_name();
        let name = name.to_string_lossy();
        is_file && (name.ends_with(".yaml") || name.ends_with(".yml"))
    })
}
