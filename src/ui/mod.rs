pub mod components;
pub mod task_page;
