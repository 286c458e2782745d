use super::task::Task;
use super::task::TaskId;

/// Errors that can occur during list operations.
///
/// Every variant is a user-input validation failure, not a system fault; the
/// triggering operation is a no-op and the list is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskError {
    EmptyText,
    NoSelection,
    NotFound(TaskId),
    AlreadyDone,
}

impl std::fmt::Display for TaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "Please enter a task."),
            Self::NoSelection => write!(f, "Please select a task."),
            Self::NotFound(_) => write!(f, "That task no longer exists."),
            Self::AlreadyDone => write!(f, "This task is already marked as complete."),
        }
    }
}

impl std::error::Error for TaskError {}

/// Insertion-ordered collection of tasks addressed by stable id.
///
/// The rendered listing is always rebuilt from this sequence, so visible
/// order mirrors insertion order after every mutation.
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    issued: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pending task, returning its handle.
    /// Whitespace-only text is rejected and nothing changes.
    pub fn add(&mut self, text: &str) -> Result<TaskId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        let id = TaskId::from(self.issued);
        self.issued += 1;
        self.tasks.push(Task::new(id, text.to_string()));
        Ok(id)
    }

    /// Replaces the text of the task and returns it to pending, even if it
    /// was completed before the rewrite.
    pub fn update(&mut self, id: TaskId, text: &str) -> Result<(), TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        self.find(id)?.rewrite(text.to_string());
        Ok(())
    }

    /// Removes the task, preserving the relative order of the rest.
    pub fn delete(&mut self, id: TaskId) -> Result<(), TaskError> {
        let index = self.index(id)?;
        self.tasks.remove(index);
        Ok(())
    }

    /// Marks the task complete. Completing twice is rejected, not ignored.
    pub fn complete(&mut self, id: TaskId) -> Result<(), TaskError> {
        let task = self.find(id)?;
        if task.is_done() {
            return Err(TaskError::AlreadyDone);
        }
        task.finish();
        Ok(())
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }
    /// Tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn index(&self, id: TaskId) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TaskError::NotFound(id))
    }
    fn find(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TaskError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_pending_tasks() {
        let mut list = TaskList::new();
        let id = list.add("buy milk").expect("valid text");
        assert_eq!(list.len(), 1);
        let task = list.get(id).expect("just added");
        assert_eq!(task.to_string(), "buy milk");
        assert!(!task.is_done());
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = TaskList::new();
        assert_eq!(list.add(""), Err(TaskError::EmptyText));
        assert_eq!(list.add("   \t"), Err(TaskError::EmptyText));
        assert!(list.is_empty());
    }

    #[test]
    fn complete_marks_once_and_only_once() {
        let mut list = TaskList::new();
        let id = list.add("water plants").expect("valid text");
        assert_eq!(list.complete(id), Ok(()));
        assert_eq!(
            list.get(id).expect("still there").to_string(),
            "[Completed] water plants"
        );
        assert_eq!(list.complete(id), Err(TaskError::AlreadyDone));
    }

    #[test]
    fn delete_preserves_relative_order() {
        let mut list = TaskList::new();
        let a = list.add("a").expect("valid text");
        let b = list.add("b").expect("valid text");
        let c = list.add("c").expect("valid text");
        list.delete(b).expect("b exists");
        let rest = list.iter().map(Task::id).collect::<Vec<_>>();
        assert_eq!(rest, vec![a, c]);
        assert_eq!(list.delete(b), Err(TaskError::NotFound(b)));
    }

    #[test]
    fn update_rewrites_and_clears_completion() {
        let mut list = TaskList::new();
        let id = list.add("old text").expect("valid text");
        let other = list.add("untouched").expect("valid text");
        list.complete(id).expect("first completion");
        list.update(id, "new text").expect("valid rewrite");
        let task = list.get(id).expect("still there");
        assert_eq!(task.to_string(), "new text");
        assert!(!task.is_done());
        assert_eq!(list.get(other).expect("still there").to_string(), "untouched");
    }

    #[test]
    fn update_rejects_blank_text() {
        let mut list = TaskList::new();
        let id = list.add("keep me").expect("valid text");
        assert_eq!(list.update(id, "  "), Err(TaskError::EmptyText));
        assert_eq!(list.get(id).expect("still there").to_string(), "keep me");
    }

    #[test]
    fn ids_survive_unrelated_deletions() {
        let mut list = TaskList::new();
        let a = list.add("first").expect("valid text");
        let b = list.add("second").expect("valid text");
        list.delete(a).expect("a exists");
        assert_eq!(list.get(b).expect("still there").to_string(), "second");
        let c = list.add("third").expect("valid text");
        assert_ne!(c, a); // ids are never reused
    }
}
