/// 单个任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务 ID（单调递增，删除后不复用）
    pub id: u64,
    /// 标题（保留用户输入原文，不做 trim）
    pub title: String,
    /// 描述，可以为空
    pub description: String,
    /// 是否已完成
    pub completed: bool,
}

impl Task {
    /// 返回状态对应的图标
    pub fn icon(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

/// 任务过滤器（只影响显示，不改动数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    /// 所有过滤器，按 Tab 栏顺序
    pub fn all() -> &'static [TaskFilter] {
        &[TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed]
    }

    /// 从名称解析，只认 "completed" / "pending"，其余一律视为 All
    pub fn from_name(name: &str) -> Self {
        match name {
            "completed" => TaskFilter::Completed,
            "pending" => TaskFilter::Pending,
            _ => TaskFilter::All,
        }
    }

    /// 规范名称
    pub fn name(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Pending => "pending",
            TaskFilter::Completed => "completed",
        }
    }

    /// Tab 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
        }
    }

    /// 切换到下一个过滤器（循环）
    pub fn next(&self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Pending,
            TaskFilter::Pending => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::All,
        }
    }

    /// 切换到上一个过滤器（循环）
    pub fn prev(&self) -> Self {
        match self {
            TaskFilter::All => TaskFilter::Completed,
            TaskFilter::Pending => TaskFilter::All,
            TaskFilter::Completed => TaskFilter::Pending,
        }
    }

    /// 任务是否通过该过滤器
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}
