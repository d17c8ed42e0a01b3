//! Predicates and the live filtered view over the task list

use crate::domain::{Index, Task, TaskList};

/// Which tasks the filtered view shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskPredicate {
    #[default]
    ShowAll,

    /// Some word of the task name equals one of the keywords, ignoring case
    NameContainsKeywords(Vec<String>),
}

impl TaskPredicate {
    /// Builds a keyword predicate from whitespace-separated input
    pub fn name_contains(keywords: &str) -> Self {
        TaskPredicate::NameContainsKeywords(
            keywords.split_whitespace().map(str::to_string).collect(),
        )
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskPredicate::ShowAll => true,
            TaskPredicate::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                let keyword = keyword.to_lowercase();
                task.name().words().any(|word| word.to_lowercase() == keyword)
            }),
        }
    }
}

/// Read-only projection of a task list through a predicate
///
/// The view holds no tasks of its own; every read re-evaluates the predicate
/// against the current list, so it can never go stale.
#[derive(Debug, Clone, Copy)]
pub struct FilteredTasks<'a> {
    tasks: &'a TaskList,
    predicate: &'a TaskPredicate,
}

impl<'a> FilteredTasks<'a> {
    pub(crate) fn new(tasks: &'a TaskList, predicate: &'a TaskPredicate) -> Self {
        Self { tasks, predicate }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Task> + 'a {
        let predicate = self.predicate;
        self.tasks.iter().filter(move |task| predicate.matches(task))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Task shown at the given position
    pub fn get(&self, index: Index) -> Option<&'a Task> {
        self.iter().nth(index.zero_based())
    }

    pub fn to_vec(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }
}
