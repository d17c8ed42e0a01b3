//! Ordered collection of unique tasks
//!
//! Uniqueness is by weak identity ([`Task::is_same_task`]): no two tasks in a
//! [`TaskList`] share both name and priority. Every mutation that would break
//! that fails and leaves the list untouched.

use thiserror::Error;

use super::task::Task;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskListError {
    #[error("This task already exists in the task list")]
    DuplicateTask,

    #[error("Task not found in the task list")]
    TaskNotFound,
}

/// Tasks in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from tasks, failing if any two are the same task
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Result<Self, TaskListError> {
        let mut list = Self::new();
        for task in tasks {
            list.add(task)?;
        }
        Ok(list)
    }

    /// Returns true if a task with the same identity is in the list
    pub fn contains(&self, task: &Task) -> bool {
        self.tasks.iter().any(|t| t.is_same_task(task))
    }

    /// Appends a task
    pub fn add(&mut self, task: Task) -> Result<(), TaskListError> {
        if self.contains(&task) {
            return Err(TaskListError::DuplicateTask);
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Replaces `target` with `edited` in place
    ///
    /// `edited` may keep the identity of `target`, but must not collide with
    /// any other task in the list.
    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TaskListError> {
        let position = self.position(target).ok_or(TaskListError::TaskNotFound)?;

        if !target.is_same_task(&edited) && self.contains(&edited) {
            return Err(TaskListError::DuplicateTask);
        }

        self.tasks[position] = edited;
        Ok(())
    }

    /// Removes `target` and returns it
    pub fn remove(&mut self, target: &Task) -> Result<Task, TaskListError> {
        let position = self.position(target).ok_or(TaskListError::TaskNotFound)?;
        Ok(self.tasks.remove(position))
    }

    /// Replaces the whole contents, failing if `tasks` contains duplicates
    pub fn reset(&mut self, tasks: impl IntoIterator<Item = Task>) -> Result<(), TaskListError> {
        *self = Self::from_tasks(tasks)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<&Task> {
        self.tasks.get(offset)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    fn position(&self, target: &Task) -> Option<usize> {
        self.tasks.iter().position(|t| t == target)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, Name, Priority, Tag};

    fn make_task(name: &str, priority: Priority, description: &str) -> Task {
        Task::new(
            Name::new(name).unwrap(),
            priority,
            Description::new(description).unwrap(),
            [Tag::new("HELP").unwrap()],
        )
    }

    #[test]
    fn add_appends_in_order() {
        let mut list = TaskList::new();
        let first = make_task("Homework 1", Priority::High, "Pages 10 - 12");
        let second = make_task("Lab 2", Priority::Medium, "TCP");

        list.add(first.clone()).unwrap();
        list.add(second.clone()).unwrap();

        assert_eq!(list.as_slice(), &[first, second]);
    }

    #[test]
    fn add_rejects_same_task() {
        let mut list = TaskList::new();
        list.add(make_task("Homework 1", Priority::High, "Pages 10 - 12"))
            .unwrap();

        let result = list.add(make_task("Homework 1", Priority::High, "Different"));

        assert_eq!(result, Err(TaskListError::DuplicateTask));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn add_allows_same_name_with_other_priority() {
        let mut list = TaskList::new();
        list.add(make_task("Homework 1", Priority::High, "a")).unwrap();
        list.add(make_task("Homework 1", Priority::Low, "b")).unwrap();

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn contains_uses_weak_identity() {
        let mut list = TaskList::new();
        list.add(make_task("Homework 1", Priority::High, "a")).unwrap();

        assert!(list.contains(&make_task("Homework 1", Priority::High, "b")));
        assert!(!list.contains(&make_task("Homework 1", Priority::Medium, "a")));
    }

    #[test]
    fn set_task_replaces_in_place() {
        let first = make_task("Homework 1", Priority::High, "a");
        let second = make_task("Lab 2", Priority::Medium, "b");
        let mut list = TaskList::from_tasks([first.clone(), second.clone()]).unwrap();

        let edited = make_task("Homework 3", Priority::High, "c");
        list.set_task(&first, edited.clone()).unwrap();

        assert_eq!(list.as_slice(), &[edited, second]);
    }

    #[test]
    fn set_task_keeps_identity() {
        let first = make_task("Homework 1", Priority::High, "a");
        let mut list = TaskList::from_tasks([first.clone()]).unwrap();

        let edited = first.mark_done();
        list.set_task(&first, edited.clone()).unwrap();

        assert_eq!(list.get(0), Some(&edited));
    }

    #[test]
    fn set_task_rejects_collision_with_other_task() {
        let first = make_task("Homework 1", Priority::High, "a");
        let second = make_task("Lab 2", Priority::Medium, "b");
        let mut list = TaskList::from_tasks([first.clone(), second.clone()]).unwrap();
        let before = list.clone();

        let result = list.set_task(&first, make_task("Lab 2", Priority::Medium, "c"));

        assert_eq!(result, Err(TaskListError::DuplicateTask));
        assert_eq!(list, before);
    }

    #[test]
    fn set_task_missing_target() {
        let mut list = TaskList::new();
        let task = make_task("Homework 1", Priority::High, "a");

        assert_eq!(
            list.set_task(&task, task.clone()),
            Err(TaskListError::TaskNotFound)
        );
    }

    #[test]
    fn remove_uses_full_equality() {
        let task = make_task("Homework 1", Priority::High, "a");
        let mut list = TaskList::from_tasks([task.clone()]).unwrap();

        let lookalike = make_task("Homework 1", Priority::High, "b");
        assert_eq!(list.remove(&lookalike), Err(TaskListError::TaskNotFound));

        assert_eq!(list.remove(&task), Ok(task));
        assert!(list.is_empty());
    }

    #[test]
    fn from_tasks_rejects_duplicates() {
        let result = TaskList::from_tasks([
            make_task("Homework 1", Priority::High, "a"),
            make_task("Homework 1", Priority::High, "b"),
        ]);

        assert_eq!(result, Err(TaskListError::DuplicateTask));
    }

    #[test]
    fn reset_is_all_or_nothing() {
        let task = make_task("Homework 1", Priority::High, "a");
        let mut list = TaskList::from_tasks([task.clone()]).unwrap();

        let result = list.reset([
            make_task("Lab 2", Priority::Medium, "b"),
            make_task("Lab 2", Priority::Medium, "c"),
        ]);

        assert!(result.is_err());
        assert_eq!(list.as_slice(), &[task]);
    }
}
