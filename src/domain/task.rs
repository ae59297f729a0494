//! Tasks with priority, due date and completion flag

use crate::domain::record::{non_empty, overwrite, overwrite_optional, Patch, Record};
use crate::domain::EntityKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority. Older stores carry the localized labels, accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    #[serde(alias = "Высокий")]
    High,
    #[serde(alias = "Средний")]
    Medium,
    #[default]
    #[serde(alias = "Низкий")]
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(label)
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "высокий" => Ok(Priority::High),
            "medium" | "средний" => Ok(Priority::Medium),
            "low" | "низкий" => Ok(Priority::Low),
            _ => Err(format!(
                "unknown priority '{}'. Valid priorities are: high, medium, low",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "task_id")]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<String>,
}

impl Task {
    /// Create an open task; the repository assigns the id
    pub fn new(
        title: String,
        description: String,
        priority: Priority,
        due_date: Option<String>,
    ) -> Self {
        Task {
            id: 0,
            title,
            description,
            done: false,
            priority,
            due_date: non_empty(due_date),
        }
    }
}

impl Record for Task {
    const KIND: EntityKind = EntityKind::Tasks;

    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<String>,
}

impl Patch<Task> for TaskPatch {
    fn apply(self, task: &mut Task) {
        overwrite(&mut task.title, self.title);
        overwrite(&mut task.description, self.description);
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        overwrite_optional(&mut task.due_date, self.due_date);
    }
}
