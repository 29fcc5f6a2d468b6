use clap::{CommandFactory, Parser};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use task_cli::cli::{Cli, Command};
use task_core::config;
use task_core::error::AppError;
use task_core::model::Task;
use task_core::storage::json_store;
use task_core::task_store::{ListView, TaskStore};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "St")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

fn status_icon(task: &Task) -> &'static str {
    if task.completed { "✓" } else { "○" }
}

fn priority_cell(priority: &str) -> String {
    let icon = match priority {
        "high" => "🔴",
        "medium" => "🟡",
        "low" => "🟢",
        _ => "⚪",
    };
    format!("{} {}", icon, priority.to_uppercase())
}

fn print_tasks_plain(view: &ListView) {
    if view.total == 0 {
        println!("No tasks found.");
        return;
    }

    let rows: Vec<TaskRow> = view
        .tasks
        .iter()
        .map(|task| TaskRow {
            id: task.id,
            status: status_icon(task).to_string(),
            priority: priority_cell(&task.priority),
            description: task.description.clone(),
            created_at: task.created_at.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn print_tasks_json(tasks: &[Task]) -> Result<(), AppError> {
    let payload =
        serde_json::to_string(tasks).map_err(|err| AppError::invalid_data(err.to_string()))?;
    println!("{payload}");
    Ok(())
}

fn print_task_json(task: &Task) -> Result<(), AppError> {
    let payload =
        serde_json::to_string(task).map_err(|err| AppError::invalid_data(err.to_string()))?;
    println!("{payload}");
    Ok(())
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_command(command: Command, json: bool, store: &mut TaskStore) -> Result<(), AppError> {
    match command {
        Command::Add {
            description,
            priority,
        } => {
            let task = store.add(&description, priority.as_str())?;
            if json {
                print_task_json(&task)?;
            } else {
                println!(
                    "✓ Task added: {} (Priority: {})",
                    task.description, task.priority
                );
            }
        }
        Command::List { all } => {
            let view = store.list(all);
            if json {
                print_tasks_json(&view.tasks)?;
            } else {
                print_tasks_plain(&view);
            }
        }
        Command::Complete { id } => {
            let task = store.complete(id)?;
            if json {
                print_task_json(&task)?;
            } else {
                println!("✓ Task {} marked as complete!", task.id);
            }
        }
        Command::Delete { id } => {
            let task = store.delete(id)?;
            if json {
                print_task_json(&task)?;
            } else {
                println!("✓ Task deleted: {}", task.description);
            }
        }
        Command::Clear => {
            let removed = store.clear_completed()?;
            if json {
                println!("{}", serde_json::json!({ "removed": removed }));
            } else {
                println!("✓ Removed {removed} completed task(s).");
            }
        }
    }

    Ok(())
}

fn run(command: Command, json: bool) -> Result<(), AppError> {
    let config_load = config::load_config_with_fallback();
    if let Some(err) = &config_load.error {
        eprintln!("warning: ignoring configuration: {err}");
    }

    let path = json_store::store_path(&config_load.config)?;
    let mut store = TaskStore::open(&path);
    if store.recovered() {
        eprintln!(
            "warning: task store at {} was unreadable; starting fresh",
            path.display()
        );
    }

    run_command(command, json, &mut store)
}

fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        print_help();
        return;
    };

    if let Err(err) = run(command, cli.json) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}
