//! Tasks use cases

use crate::application::RecordService;
use crate::domain::{Priority, Task, TaskPatch};
use crate::error::Result;

pub type TasksService = RecordService<Task>;

impl RecordService<Task> {
    pub fn add(
        &mut self,
        title: String,
        description: String,
        priority: Priority,
        due_date: Option<String>,
    ) -> Result<&Task> {
        self.repository
            .add(Task::new(title, description, priority, due_date))
    }

    pub fn edit(&mut self, id: u32, patch: TaskPatch) -> Result<&Task> {
        self.repository.edit(id, patch)
    }

    pub fn mark_done(&mut self, id: u32) -> Result<&Task> {
        self.repository.mark_done(id)
    }
}
