//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`, which
//! points to the cwd of the last focused terminal (or the folder Zellij was
//! started from). The plugin itself keeps no data; the only location it
//! needs is the directory for trace output.

use std::path::PathBuf;

/// Returns the data directory used for trace output.
///
/// Located at `/host/.local/share/zellij/zlibrarian` in the sandbox, which
/// typically resolves to `~/.local/share/zellij/zlibrarian` when Zellij is
/// started from a home-directory terminal.
///
/// # Examples
///
/// ```
/// use zlibrarian::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zlibrarian");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zlibrarian")
}
