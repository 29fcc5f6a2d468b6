use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Manage your personal tasks with priorities", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: task_cli add "Complete project documentation" --priority high
    Add {
        description: String,
        /// Task priority
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: Priority,
    },
    /// List tasks
    ///
    /// Example: task_cli list --all
    List {
        /// Show completed tasks
        #[arg(short, long)]
        all: bool,
    },
    /// Mark a task as complete
    ///
    /// Example: task_cli complete 1
    Complete {
        id: u64,
    },
    /// Delete a task
    ///
    /// Example: task_cli delete 2
    Delete {
        id: u64,
    },
    /// Remove all completed tasks
    ///
    /// Example: task_cli clear
    Clear,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}
