//! 任务列表管理器
//!
//! 持有有序任务列表和输入草稿。所有操作都是同步的内存修改，
//! 无效输入（空标题、未知过滤器、删除不存在的任务）一律静默忽略。

use tracing::{debug, info};

use super::task::{Task, TaskFilter};

/// 各过滤器下的任务数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskCounts {
    /// 获取指定过滤器的数量
    pub fn get(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.all,
            TaskFilter::Pending => self.pending,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// 任务列表
#[derive(Debug, Clone)]
pub struct TaskList {
    /// 任务（插入顺序即显示顺序）
    pub tasks: Vec<Task>,
    /// 标题草稿
    pub task_title: String,
    /// 描述草稿
    pub task_description: String,
    /// 当前过滤器（原样保存）
    filter: String,
    /// 下一个分配的 ID
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            task_title: String::new(),
            task_description: String::new(),
            filter: TaskFilter::All.name().to_string(),
            next_id: 1,
        }
    }

    /// 当前过滤器原文
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// 当前生效的过滤器
    pub fn active_filter(&self) -> TaskFilter {
        TaskFilter::from_name(&self.filter)
    }

    /// 下一个将被分配的 ID
    #[allow(dead_code)]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// 用草稿创建任务
    ///
    /// 标题 trim 后为空时不做任何修改并返回 `None`。
    /// 成功时保存原始标题，清空两个草稿，返回新任务的 ID。
    pub fn add_task(&mut self) -> Option<u64> {
        if self.task_title.trim().is_empty() {
            debug!("add_task ignored: empty title");
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(Task {
            id,
            title: std::mem::take(&mut self.task_title),
            description: std::mem::take(&mut self.task_description),
            completed: false,
        });

        info!(id, "task added");
        Some(id)
    }

    /// 删除与给定任务 ID 相同的任务，返回是否删除
    pub fn delete_task(&mut self, task: &Task) -> bool {
        self.delete_task_by_id(task.id)
    }

    /// 按 ID 删除任务，不存在时静默返回 false
    pub fn delete_task_by_id(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!(id, "task deleted");
        } else {
            debug!(id, "delete_task ignored: no such task");
        }
        removed
    }

    /// 设置过滤器，不做校验
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        debug!(filter = %self.filter, "filter changed");
    }

    /// 按当前过滤器计算可见任务，保持原有顺序
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        let filter = self.active_filter();
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// 切换完成状态，返回新状态；任务不存在时返回 `None`
    pub fn toggle_task(&mut self, id: u64) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        info!(id, completed = task.completed, "task toggled");
        Some(task.completed)
    }

    /// 按 ID 查找任务
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 统计各过滤器下的数量
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            all: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }
}
