use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};

pub const HELP_FILE_NAME: &str = "help.txt";

/// `help.txt` next to the running executable.
pub fn help_file_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(HELP_FILE_NAME))
}

/// Open the help file with the platform's default handler.
pub fn open_help() -> Result<()> {
    let path = help_file_path()?;
    open_help_at(&path, |p| open::that(p))
}

/// Check `path` exists, then hand it to `launch`.
pub fn open_help_at<F>(path: &Path, launch: F) -> Result<()>
where
    F: FnOnce(&Path) -> std::io::Result<()>,
{
    if !path.is_file() {
        return Err(AppError::HelpMissing(path.to_path_buf()));
    }
    launch(path).map_err(|source| AppError::HelpLaunch {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Opened help file {}", path.display());
    Ok(())
}
