use crate::config::Config;
use crate::error::AppError;
use crate::model::Task;
use std::path::{Path, PathBuf};

const STORE_FILE_NAME: &str = "tasks.json";
const STORE_ENV_VAR: &str = "TASKTRACKER_STORE_PATH";

/// Result of reading the store. A missing file is simply an empty
/// collection; an unreadable or unparsable one also yields an empty
/// collection but sets `recovered` so callers can warn about the
/// discarded content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub recovered: bool,
}

/// Resolution order: `TASKTRACKER_STORE_PATH`, then the config file's
/// `store_path`, then the platform config directory.
pub fn store_path(config: &Config) -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(STORE_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config.store_path.clone() {
        return Ok(path);
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join("tasktracker")
            .join(STORE_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("tasktracker")
            .join(STORE_FILE_NAME))
    }
}

pub fn load_tasks(path: &Path) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            return LoadOutcome {
                tasks: Vec::new(),
                recovered: true,
            };
        }
    };

    match serde_json::from_str::<Vec<Task>>(&content) {
        Ok(tasks) => LoadOutcome {
            tasks,
            recovered: false,
        },
        Err(_) => LoadOutcome {
            tasks: Vec::new(),
            recovered: true,
        },
    }
}

/// Writes the whole collection, overwriting prior content. The write is
/// not atomic; a crash mid-write can truncate the file.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| AppError::io(err.to_string()))?;
    }

    let content =
        serde_json::to_string_pretty(tasks).map_err(|err| AppError::invalid_data(err.to_string()))?;
    std::fs::write(path, content).map_err(|err| AppError::io(err.to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, permissions).map_err(|err| AppError::io(err.to_string()))?;
    }

    Ok(())
}
