mod task;

pub use task::{PRIORITY_HIGH, PRIORITY_LOW, PRIORITY_MEDIUM, Task, priority_rank};
