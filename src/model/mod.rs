pub mod task;
pub mod task_list;

pub use task::{Task, TaskFilter};
pub use task_list::{TaskCounts, TaskList};
