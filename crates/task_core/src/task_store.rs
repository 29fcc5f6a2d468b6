use crate::error::AppError;
use crate::model::Task;
use crate::storage::json_store;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// Result of a list query. `total` is the size of the whole collection,
/// so callers can tell an empty store apart from a fully filtered view.
#[derive(Debug, Clone)]
pub struct ListView {
    pub tasks: Vec<Task>,
    pub total: usize,
}

/// Owns the task collection for one invocation: loads the full state at
/// construction, applies at most one mutation, and writes the full state
/// back after every mutation. Last writer wins; there is no locking.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    recovered: bool,
}

impl TaskStore {
    pub fn open(path: &Path) -> Self {
        let outcome = json_store::load_tasks(path);
        Self {
            path: path.to_path_buf(),
            tasks: outcome.tasks,
            recovered: outcome.recovered,
        }
    }

    /// True when the store file existed but could not be read or parsed
    /// and the collection was reset to empty.
    pub fn recovered(&self) -> bool {
        self.recovered
    }

    pub fn add(&mut self, description: &str, priority: &str) -> Result<Task, AppError> {
        let id = self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        let task = Task {
            id,
            description: description.to_string(),
            priority: priority.to_lowercase(),
            completed: false,
            created_at: now_timestamp()?,
            completed_at: None,
        };

        self.tasks.push(task.clone());
        self.save()?;

        Ok(task)
    }

    pub fn list(&self, include_completed: bool) -> ListView {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| include_completed || !task.completed)
            .cloned()
            .collect();
        tasks.sort_by_key(Task::priority_rank);

        ListView {
            tasks,
            total: self.tasks.len(),
        }
    }

    /// Marks the first task with the given id as completed. Re-completing
    /// an already completed task re-stamps `completed_at` and re-persists.
    pub fn complete(&mut self, id: u64) -> Result<Task, AppError> {
        let completed_at = now_timestamp()?;
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| AppError::not_found(format!("task {id} not found")))?;

        task.completed = true;
        task.completed_at = Some(completed_at);
        let updated = task.clone();
        self.save()?;

        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<Task, AppError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| AppError::not_found(format!("task {id} not found")))?;

        let removed = self.tasks.remove(index);
        self.save()?;

        Ok(removed)
    }

    /// Removes every completed task and persists unconditionally, even
    /// when nothing was removed.
    pub fn clear_completed(&mut self) -> Result<usize, AppError> {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        self.save()?;

        Ok(removed)
    }

    fn save(&self) -> Result<(), AppError> {
        json_store::save_tasks(&self.path, &self.tasks)
    }
}

fn now_timestamp() -> Result<String, AppError> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc()
        .to_offset(offset)
        .format(&Rfc3339)
        .map_err(|err| AppError::invalid_data(err.to_string()))
}
