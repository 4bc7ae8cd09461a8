use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".venue_core";
const CONFIG_FILE: &str = "config.json";

/// Resolves where the crate keeps its configuration on disk.
pub struct PathResolver;

impl PathResolver {
    /// `$VENUE_CORE_HOME` when set, otherwise `~/.venue_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os("VENUE_CORE_HOME") {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
