//! # Model
//!
//! The single owner of all in-memory state: the task list, the predicate
//! behind the filtered view, the pet and the pomodoro session. Commands
//! mutate state only through [`Model`].
//!
//! ## Reminders
//!
//! Adding a task that carries a reminder, or replacing a task with one whose
//! reminder changed, queues a [`ReminderEvent`]. Callers collect the queue
//! with [`Model::take_reminder_events`] and deliver it however they like.

mod filter;

use tracing::{debug, info};

use crate::domain::{Name, Pet, Pomodoro, ReminderEvent, Task, TaskList, TaskListError};

pub use filter::{FilteredTasks, TaskPredicate};

/// In-memory application state
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    tasks: TaskList,
    predicate: TaskPredicate,
    pet: Pet,
    pomodoro: Pomodoro,
    pending_reminders: Vec<ReminderEvent>,
}

impl Model {
    /// Creates a model showing every task
    pub fn new(tasks: TaskList, pet: Pet, pomodoro: Pomodoro) -> Self {
        debug!(tasks = tasks.len(), "Initializing model");
        info!("Initializing with pet: {}", pet);

        Self {
            tasks,
            predicate: TaskPredicate::ShowAll,
            pet,
            pomodoro,
            pending_reminders: Vec::new(),
        }
    }

    // ----- Task list -------------------------------------------------------

    pub fn task_list(&self) -> &TaskList {
        &self.tasks
    }

    /// Replaces the whole task list
    pub fn set_task_list(&mut self, tasks: TaskList) {
        self.tasks = tasks;
    }

    /// Returns true if a task with the same identity exists
    pub fn has_task(&self, task: &Task) -> bool {
        self.tasks.contains(task)
    }

    /// Appends a task and resets the view to show all tasks
    pub fn add_task(&mut self, task: Task) -> Result<(), TaskListError> {
        let event = task.reminder_event();
        self.tasks.add(task)?;
        self.queue_reminder(event);
        self.update_filtered_task_list(TaskPredicate::ShowAll);
        Ok(())
    }

    /// Removes the given task
    pub fn delete_task(&mut self, target: &Task) -> Result<Task, TaskListError> {
        self.tasks.remove(target)
    }

    /// Replaces `target` with `edited`
    pub fn set_task(&mut self, target: &Task, edited: Task) -> Result<(), TaskListError> {
        let event = if edited.reminder() != target.reminder() {
            edited.reminder_event()
        } else {
            None
        };
        self.tasks.set_task(target, edited)?;
        self.queue_reminder(event);
        Ok(())
    }

    // ----- Filtered view ---------------------------------------------------

    /// Live view of the tasks matching the current predicate
    pub fn filtered_tasks(&self) -> FilteredTasks<'_> {
        FilteredTasks::new(&self.tasks, &self.predicate)
    }

    pub fn predicate(&self) -> &TaskPredicate {
        &self.predicate
    }

    /// Replaces the predicate behind the filtered view
    pub fn update_filtered_task_list(&mut self, predicate: TaskPredicate) {
        self.predicate = predicate;
    }

    // ----- Pet -------------------------------------------------------------

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn set_pet_name(&mut self, name: Name) {
        self.pet.set_name(name);
    }

    pub fn increment_exp(&mut self) {
        self.pet.increment_exp();
    }

    // ----- Pomodoro --------------------------------------------------------

    pub fn pomodoro(&self) -> &Pomodoro {
        &self.pomodoro
    }

    /// Binds a task to the pomodoro session without starting it
    pub fn set_pomodoro_task(&mut self, task: Task) {
        self.pomodoro.bind_task(task);
    }

    // ----- Reminders -------------------------------------------------------

    /// Drains the reminders queued since the last call
    pub fn take_reminder_events(&mut self) -> Vec<ReminderEvent> {
        std::mem::take(&mut self.pending_reminders)
    }

    fn queue_reminder(&mut self, event: Option<ReminderEvent>) {
        if let Some(event) = event {
            debug!(task = %event.task_name, "Queued reminder");
            self.pending_reminders.push(event);
        }
    }
}
